//! devtools-cli: shared plumbing for the `run-tests` and `vscode-config` binaries.

pub mod cmd;
pub mod logging;
pub mod output;
