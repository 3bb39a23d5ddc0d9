//! Integration tests for the devtools binaries.

mod common;
mod vscode_config_tests;
