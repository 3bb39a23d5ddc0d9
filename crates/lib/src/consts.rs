//! Fixed names shared by both tools.

/// Environment variable overriding the directory the tools treat as their own location.
pub const SCRIPT_DIR_ENV: &str = "DEVTOOLS_SCRIPT_DIR";

/// Environment variable overriding the test runner program.
pub const TEST_RUNNER_ENV: &str = "DEVTOOLS_CTEST";

pub const DEFAULT_TEST_RUNNER: &str = "ctest";
pub const TEST_RUNNER_VERBOSE_FLAG: &str = "-V";

pub const BUILD_DIR_NAME: &str = "build";
pub const VSCODE_DIR_NAME: &str = ".vscode";
pub const CPP_PROPERTIES_FILE: &str = "c_cpp_properties.json";
