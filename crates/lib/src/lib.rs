//! devtools-lib: Core logic for the devtools helper binaries
//!
//! This crate provides the two operations behind the CLIs:
//! - `test_runner`: run the test runner inside a prepared build directory
//! - `vscode`: write the fixed C/C++ editor configuration document
//!
//! Paths are always resolved from an explicit base directory (see `paths`).

pub mod consts;
pub mod paths;
pub mod platform;
pub mod test_runner;
pub mod vscode;
