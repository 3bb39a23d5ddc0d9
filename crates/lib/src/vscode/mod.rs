//! Write the C/C++ editor configuration for the project.
//!
//! Every write is a full overwrite of `<base>/../.vscode/c_cpp_properties.json`:
//! the `.vscode` directory is created if needed, any previous file is removed,
//! and the fixed [`CPP_PROPERTIES`] document is serialized with 4-space indent.

mod properties;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::{debug, info};

use crate::paths;

pub use properties::{Browse, CPP_PROPERTIES, ConfigEnv, CppProperties, PlatformConfiguration};

const INDENT: &[u8] = b"    ";

/// Errors that can occur while writing the configuration.
#[derive(Debug, Error)]
pub enum VscodeError {
  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to remove {}: {source}", path.display())]
  RemoveFile { path: PathBuf, source: io::Error },

  #[error("failed to create file {}: {source}", path.display())]
  CreateFile { path: PathBuf, source: io::Error },

  #[error("failed to serialize configuration to {}: {source}", path.display())]
  Serialize { path: PathBuf, source: serde_json::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: io::Error },
}

/// Result of a successful write.
#[derive(Debug)]
pub struct WriteResult {
  /// The `.vscode` directory
  pub vscode_dir: PathBuf,
  /// Path to the written `c_cpp_properties.json`
  pub properties_path: PathBuf,
  /// Whether `.vscode` had to be created
  pub created_dir: bool,
  /// Whether a previous file was removed
  pub replaced: bool,
}

/// Write [`CPP_PROPERTIES`] under `base`.
///
/// # Errors
///
/// Returns an error if any filesystem step fails. A failure during
/// serialization can leave a truncated file behind.
pub fn write(base: &Path) -> Result<WriteResult, VscodeError> {
  write_document(base, &CPP_PROPERTIES)
}

/// Write an arbitrary document to `<base>/../.vscode/c_cpp_properties.json`.
pub fn write_document<T: Serialize>(base: &Path, document: &T) -> Result<WriteResult, VscodeError> {
  let vscode_dir = paths::vscode_dir(base);
  let created_dir = !vscode_dir.exists();

  fs::create_dir_all(&vscode_dir).map_err(|source| VscodeError::CreateDir {
    path: vscode_dir.clone(),
    source,
  })?;

  let properties_path = paths::cpp_properties_path(base);
  let replaced = remove_existing(&properties_path)?;

  let file = File::create(&properties_path).map_err(|source| VscodeError::CreateFile {
    path: properties_path.clone(),
    source,
  })?;

  let mut writer = BufWriter::new(file);
  render_to(&mut writer, document).map_err(|source| VscodeError::Serialize {
    path: properties_path.clone(),
    source,
  })?;
  writer.flush().map_err(|source| VscodeError::WriteFile {
    path: properties_path.clone(),
    source,
  })?;

  info!(path = %properties_path.display(), replaced, "configuration written");

  Ok(WriteResult {
    vscode_dir,
    properties_path,
    created_dir,
    replaced,
  })
}

/// Serialize `document` as JSON indented by 4 spaces, without a trailing newline.
pub fn render_to<W: Write, T: Serialize>(writer: W, document: &T) -> Result<(), serde_json::Error> {
  let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
  document.serialize(&mut serializer)
}

/// Render `document` to a string in the on-disk format.
pub fn render<T: Serialize>(document: &T) -> Result<String, serde_json::Error> {
  let mut buf = Vec::new();
  render_to(&mut buf, document)?;
  Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}

/// Remove whatever is at `path`. Returns `false` if nothing was there.
fn remove_existing(path: &Path) -> Result<bool, VscodeError> {
  let metadata = match fs::symlink_metadata(path) {
    Ok(metadata) => metadata,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
    Err(source) => {
      return Err(VscodeError::RemoveFile {
        path: path.to_path_buf(),
        source,
      });
    }
  };

  let removed = if metadata.is_dir() {
    fs::remove_dir_all(path)
  } else {
    fs::remove_file(path)
  };

  match removed {
    Ok(()) => {
      debug!(path = %path.display(), "removed previous configuration");
      Ok(true)
    }
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
    Err(source) => Err(VscodeError::RemoveFile {
      path: path.to_path_buf(),
      source,
    }),
  }
}
