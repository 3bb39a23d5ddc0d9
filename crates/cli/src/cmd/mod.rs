mod vscode_config;

pub use run_tests::{BUILD_DIR_MISSING, cmd_run_tests};
pub use vscode_config::{WRITTEN_MESSAGE, cmd_vscode_config};
