//! Run the test runner against a prepared build directory.
//!
//! The build directory must already exist (it is produced by the CMake
//! build); this module never creates it. The runner is started with the
//! build directory as its working directory and waited on synchronously.
//! Its exit status is returned to the caller rather than interpreted here.

mod types;

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::paths;

pub use types::{TestOutcome, TestRunError, TestRunner};

/// Resolve `<base>/../build`, failing if it does not exist.
pub fn locate_build_dir(base: &Path) -> Result<PathBuf, TestRunError> {
  let build_dir = paths::build_dir(base);
  if !build_dir.exists() {
    debug!(path = %build_dir.display(), "build directory missing");
    return Err(TestRunError::BuildDirMissing { path: build_dir });
  }
  Ok(build_dir)
}

/// Run `runner` once inside `build_dir` and wait for it to exit.
///
/// A runner that exits non-zero is not an error: the status is reported
/// through [`TestOutcome`] so the caller can propagate it.
///
/// # Errors
///
/// Returns [`TestRunError::Spawn`] if the process cannot be started.
pub fn run_tests(build_dir: &Path, runner: &TestRunner) -> Result<TestOutcome, TestRunError> {
  info!(cmd = %runner.command_line(), dir = %build_dir.display(), "running tests");

  let status = Command::new(&runner.program)
    .args(&runner.args)
    .current_dir(build_dir)
    .status()
    .map_err(|source| TestRunError::Spawn {
      program: runner.program.clone(),
      dir: build_dir.to_path_buf(),
      source,
    })?;

  let outcome = TestOutcome::from(status);
  debug!(code = ?outcome.code(), "test runner exited");
  Ok(outcome)
}

/// Locate the build directory for `base` and run the tests in it.
pub fn run(base: &Path, runner: &TestRunner) -> Result<TestOutcome, TestRunError> {
  let build_dir = locate_build_dir(base)?;
  run_tests(&build_dir, runner)
}
