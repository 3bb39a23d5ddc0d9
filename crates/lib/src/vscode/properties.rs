//! The `c_cpp_properties.json` document written by `vscode-config`.
//!
//! Field order in the structs is the key order in the emitted JSON, and
//! optional fields are omitted entirely when unset.

use serde::{Serialize, Serializer};

/// Top-level `c_cpp_properties.json` document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CppProperties {
  pub env: ConfigEnv,
  pub configurations: &'static [PlatformConfiguration],
  pub version: u32,
  pub enable_configuration_squiggles: bool,
}

/// Variables referenced from configurations as `${name}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEnv {
  pub my_include_path: &'static [&'static str],
  pub my_defines: &'static [&'static str],
}

/// One entry of `configurations`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfiguration {
  pub name: &'static str,
  pub compiler_path: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub compiler_args: Option<&'static [&'static str]>,
  pub intelli_sense_mode: &'static str,
  pub include_path: &'static [&'static str],
  pub defines: &'static [&'static str],
  pub c_standard: &'static str,
  pub cpp_standard: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub configuration_provider: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forced_include: Option<&'static [&'static str]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub compile_commands: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dotconfig: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub merge_configurations: Option<bool>,
  #[serde(
    skip_serializing_if = "Option::is_none",
    serialize_with = "serialize_variables"
  )]
  pub custom_configuration_variables: Option<&'static [(&'static str, &'static str)]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mac_framework_path: Option<&'static [&'static str]>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub windows_sdk_version: Option<&'static str>,
  pub browse: Browse,
}

/// Tag-parser settings for a configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Browse {
  pub path: &'static [&'static str],
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit_symbols_to_included_headers: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub database_filename: Option<&'static str>,
}

/// Emits `custom_configuration_variables` as a JSON object, keeping pair order.
fn serialize_variables<S>(
  variables: &Option<&'static [(&'static str, &'static str)]>,
  serializer: S,
) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  match variables {
    Some(pairs) => serializer.collect_map(pairs.iter().copied()),
    None => serializer.serialize_none(),
  }
}

impl PlatformConfiguration {
  const EMPTY: Self = Self {
    name: "",
    compiler_path: "",
    compiler_args: None,
    intelli_sense_mode: "",
    include_path: &[],
    defines: &[],
    c_standard: "",
    cpp_standard: "",
    configuration_provider: None,
    forced_include: None,
    compile_commands: None,
    dotconfig: None,
    merge_configurations: None,
    custom_configuration_variables: None,
    mac_framework_path: None,
    windows_sdk_version: None,
    browse: Browse {
      path: &[],
      limit_symbols_to_included_headers: None,
      database_filename: None,
    },
  };
}

/// The document written to `.vscode/c_cpp_properties.json`.
pub static CPP_PROPERTIES: CppProperties = CppProperties {
  env: ConfigEnv {
    my_include_path: &["${workspaceFolder}/include", "${workspaceFolder}/src"],
    my_defines: &["DEBUG", "MY_FEATURE=1"],
  },
  configurations: &[
    PlatformConfiguration {
      name: "Linux",
      compiler_path: "/usr/bin/clang",
      compiler_args: Some(&["-m32"]),
      intelli_sense_mode: "linux-clang-x64",
      include_path: &["${myIncludePath}", "/usr/include"],
      defines: &["${myDefines}"],
      c_standard: "c17",
      cpp_standard: "c++20",
      configuration_provider: Some("ms-vscode.cmake-tools"),
      forced_include: Some(&["${workspaceFolder}/common.h"]),
      compile_commands: Some("${workspaceFolder}/build/compile_commands.json"),
      dotconfig: Some("${workspaceFolder}/.config"),
      merge_configurations: Some(true),
      custom_configuration_variables: Some(&[("custom_vars", "here")]),
      browse: Browse {
        path: &["${myIncludePath}", "/usr/include", "${workspaceFolder}"],
        limit_symbols_to_included_headers: Some(true),
        database_filename: Some("${workspaceFolder}/.vscode/browse.vc.db"),
      },
      ..PlatformConfiguration::EMPTY
    },
    PlatformConfiguration {
      name: "Mac",
      compiler_path: "/usr/bin/clang",
      intelli_sense_mode: "macos-clang-x64",
      include_path: &["${myIncludePath}"],
      defines: &["${myDefines}"],
      c_standard: "c11",
      cpp_standard: "c++17",
      mac_framework_path: Some(&["/System/Library/Frameworks", "/Library/Frameworks"]),
      browse: Browse {
        path: &["${myIncludePath}", "${workspaceFolder}"],
        limit_symbols_to_included_headers: None,
        database_filename: None,
      },
      ..PlatformConfiguration::EMPTY
    },
    PlatformConfiguration {
      name: "Win32",
      compiler_path: "C:/Program Files (x86)/Microsoft Visual Studio/2019/Community/VC/Tools/MSVC/14.28.29333/bin/Hostx64/x64/cl.exe",
      intelli_sense_mode: "windows-msvc-x64",
      include_path: &["${myIncludePath}"],
      defines: &["${myDefines}", "_WINDOWS"],
      c_standard: "c17",
      cpp_standard: "c++20",
      windows_sdk_version: Some("10.0.19041.0"),
      browse: Browse {
        path: &["${myIncludePath}", "${workspaceFolder}"],
        limit_symbols_to_included_headers: None,
        database_filename: None,
      },
      ..PlatformConfiguration::EMPTY
    },
  ],
  version: 4,
  enable_configuration_squiggles: true,
};
