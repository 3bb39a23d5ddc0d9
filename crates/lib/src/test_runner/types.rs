//! Types for running the test runner.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::consts::{DEFAULT_TEST_RUNNER, TEST_RUNNER_ENV, TEST_RUNNER_VERBOSE_FLAG};

/// Errors that prevent the test runner from producing an exit status.
#[derive(Debug, Error)]
pub enum TestRunError {
  /// The build directory has not been created yet.
  #[error("build directory not found: {}", path.display())]
  BuildDirMissing { path: PathBuf },

  /// The test runner process could not be started.
  #[error("failed to run {program} in {}: {source}", dir.display())]
  Spawn {
    program: String,
    dir: PathBuf,
    source: std::io::Error,
  },
}

/// The external test runner command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRunner {
  pub program: String,
  pub args: Vec<String>,
}

impl TestRunner {
  /// `ctest -V`
  pub fn ctest() -> Self {
    Self::verbose(DEFAULT_TEST_RUNNER)
  }

  /// Same as [`TestRunner::ctest`], but honours `DEVTOOLS_CTEST` for the program.
  pub fn from_env() -> Self {
    match std::env::var(TEST_RUNNER_ENV) {
      Ok(program) if !program.is_empty() => Self::verbose(&program),
      _ => Self::default(),
    }
  }

  fn verbose(program: &str) -> Self {
    Self {
      program: program.to_string(),
      args: vec![TEST_RUNNER_VERBOSE_FLAG.to_string()],
    }
  }

  /// Append extra arguments after the defaults.
  pub fn with_args<I, S>(mut self, extra: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(extra.into_iter().map(Into::into));
    self
  }

  /// The full command line, for display.
  pub fn command_line(&self) -> String {
    std::iter::once(self.program.as_str())
      .chain(self.args.iter().map(String::as_str))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl Default for TestRunner {
  fn default() -> Self {
    Self::ctest()
  }
}

/// How the test runner exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestOutcome {
  code: Option<i32>,
}

impl TestOutcome {
  pub fn from_code(code: Option<i32>) -> Self {
    Self { code }
  }

  /// Raw exit code, `None` if the runner was terminated by a signal.
  pub fn code(&self) -> Option<i32> {
    self.code
  }

  pub fn is_success(&self) -> bool {
    self.code == Some(0)
  }

  /// Status to exit the invoking process with.
  ///
  /// Codes that don't fit a process status become 1.
  pub fn exit_code(&self) -> u8 {
    match self.code {
      Some(0) => 0,
      Some(code) => u8::try_from(code).unwrap_or(1),
      None => 1,
    }
  }
}

impl From<ExitStatus> for TestOutcome {
  fn from(status: ExitStatus) -> Self {
    Self::from_code(status.code())
  }
}
