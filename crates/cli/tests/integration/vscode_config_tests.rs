//! Integration tests for `vscode-config`.

use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use crate::common::TestEnv;

const EXPECTED: &str = include_str!("../../../lib/tests/fixtures/c_cpp_properties.json");

fn configuration_names(value: &Value) -> Vec<String> {
  value["configurations"]
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["name"].as_str().unwrap().to_string())
    .collect()
}

#[test]
fn creates_vscode_dir_and_writes_file() {
  let env = TestEnv::new();

  env
    .vscode_config_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "Configurations written to .vscode/c_cpp_properties.json.",
    ));

  let content = fs::read_to_string(env.properties_path()).unwrap();
  assert_eq!(content, EXPECTED);

  let value: Value = serde_json::from_str(&content).unwrap();
  assert_eq!(configuration_names(&value), ["Linux", "Mac", "Win32"]);
}

#[test]
fn second_run_is_byte_identical() {
  let env = TestEnv::new();

  env.vscode_config_cmd().assert().success();
  let first = fs::read(env.properties_path()).unwrap();

  env.vscode_config_cmd().assert().success();
  let second = fs::read(env.properties_path()).unwrap();

  assert_eq!(first, second);
}

#[test]
fn replaces_existing_file() {
  let env = TestEnv::new();
  env.write_file(
    ".vscode/c_cpp_properties.json",
    &format!("{{\"configurations\": [], \"stale\": \"{}\"}}", "x".repeat(4096)),
  );
  env.write_file(".vscode/settings.json", "{}");

  env.vscode_config_cmd().assert().success();

  assert_eq!(fs::read_to_string(env.properties_path()).unwrap(), EXPECTED);
  assert!(
    env.temp.path().join(".vscode").join("settings.json").exists(),
    "other editor files are left alone"
  );
}

#[test]
fn print_leaves_filesystem_untouched() {
  let env = TestEnv::new();

  let assert = env.vscode_config_cmd().arg("--print").assert().success();

  let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
  assert_eq!(configuration_names(&value), ["Linux", "Mac", "Win32"]);
  assert!(!env.temp.path().join(".vscode").exists());
}

#[test]
fn reports_host_configuration() {
  let env = TestEnv::new();

  env
    .vscode_config_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("Host configuration"));
}
