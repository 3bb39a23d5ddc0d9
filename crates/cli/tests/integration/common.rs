//! Shared test helpers for CLI integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated project tree.
///
/// The binaries see `<temp>/scripts` as their own directory, so `../build`
/// and `../.vscode` land directly under the temp root.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Project without a build directory.
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("scripts")).unwrap();
    Self { temp }
  }

  /// Project whose build directory already exists.
  pub fn with_build_dir() -> Self {
    let env = Self::new();
    fs::create_dir_all(env.build_dir()).unwrap();
    env
  }

  pub fn base(&self) -> PathBuf {
    self.temp.path().join("scripts")
  }

  pub fn build_dir(&self) -> PathBuf {
    self.temp.path().join("build")
  }

  pub fn properties_path(&self) -> PathBuf {
    self.temp.path().join(".vscode").join("c_cpp_properties.json")
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
  }

  /// Log appended to by the fake runner, one line per run.
  pub fn runner_log(&self) -> PathBuf {
    self.temp.path().join("runner.log")
  }

  /// Lines of the runner log as `(working dir, arguments)`.
  pub fn runner_runs(&self) -> Vec<(PathBuf, String)> {
    match fs::read_to_string(self.runner_log()) {
      Ok(log) => log
        .lines()
        .map(|line| {
          let (dir, args) = line.split_once('|').unwrap();
          (PathBuf::from(dir), args.to_string())
        })
        .collect(),
      Err(_) => Vec::new(),
    }
  }

  /// Install a fake test runner that records each run and exits with `exit_code`.
  #[cfg(unix)]
  pub fn fake_runner(&self, exit_code: i32) -> PathBuf {
    self.fake_runner_with(&format!("exit {}", exit_code))
  }

  /// Install a fake test runner that records each run, then runs `tail`.
  #[cfg(unix)]
  pub fn fake_runner_with(&self, tail: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.temp.path().join("fake-ctest");
    let script = format!(
      "#!/bin/sh\nprintf '%s|%s\\n' \"$(pwd -P)\" \"$*\" >> '{}'\n{}\n",
      self.runner_log().display(),
      tail
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// `run-tests` with this project as its base directory.
  pub fn run_tests_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("run-tests");
    cmd.env("DEVTOOLS_SCRIPT_DIR", self.base());
    cmd.env_remove("DEVTOOLS_CTEST");
    cmd.env_remove("RUST_LOG");
    cmd
  }

  /// `vscode-config` with this project as its base directory.
  pub fn vscode_config_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("vscode-config");
    cmd.env("DEVTOOLS_SCRIPT_DIR", self.base());
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
