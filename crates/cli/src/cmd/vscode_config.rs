//! Implementation of the `vscode-config` command.
//!
//! Writes the fixed C/C++ IntelliSense configuration to
//! `<base>/../.vscode/c_cpp_properties.json`, replacing any previous file.

use anyhow::{Context, Result};
use tracing::debug;

use devtools_lib::vscode::{self, CPP_PROPERTIES};
use devtools_lib::{paths, platform};

use crate::output;

pub const WRITTEN_MESSAGE: &str = "Configurations written to .vscode/c_cpp_properties.json.";

/// Execute the vscode-config command.
///
/// With `print`, the document is written to stdout and nothing on disk changes.
///
/// # Errors
///
/// Returns an error if the base directory cannot be resolved or any
/// filesystem step of the write fails.
pub fn cmd_vscode_config(print: bool) -> Result<()> {
  if print {
    let document = vscode::render(&CPP_PROPERTIES).context("Failed to serialize configuration")?;
    println!("{}", document);
    return Ok(());
  }

  let base = paths::script_dir().context("Failed to resolve script directory")?;
  let result = vscode::write(&base).context("Failed to write editor configuration")?;
  debug!(
    dir = %result.vscode_dir.display(),
    created = result.created_dir,
    "vscode directory ready"
  );

  let written = dunce::canonicalize(&result.properties_path).unwrap_or(result.properties_path);

  output::print_success(WRITTEN_MESSAGE);
  output::print_stat("File", &written.display().to_string());
  if let Some(config) = platform::host_configuration() {
    output::print_stat("Host configuration", config.name);
  }

  Ok(())
}
