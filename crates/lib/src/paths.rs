//! Path resolution relative to the tools' base directory.
//!
//! Both tools live one level below the project root (like a `scripts/`
//! directory), so every project path is resolved as `<base>/../<name>`.
//! Only [`script_dir`] looks at the environment; everything else is pure.

use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{BUILD_DIR_NAME, CPP_PROPERTIES_FILE, SCRIPT_DIR_ENV, VSCODE_DIR_NAME};

/// Returns the base directory of the running tool.
///
/// Uses `DEVTOOLS_SCRIPT_DIR` when set and non-empty, otherwise the directory
/// containing the current executable.
pub fn script_dir() -> io::Result<PathBuf> {
  if let Some(dir) = std::env::var_os(SCRIPT_DIR_ENV).filter(|v| !v.is_empty()) {
    return Ok(PathBuf::from(dir));
  }

  let exe = dunce::canonicalize(std::env::current_exe()?)?;
  exe
    .parent()
    .map(Path::to_path_buf)
    .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))
}

/// Returns `<base>/../build`
pub fn build_dir(base: &Path) -> PathBuf {
  base.join("..").join(BUILD_DIR_NAME)
}

/// Returns `<base>/../.vscode`
pub fn vscode_dir(base: &Path) -> PathBuf {
  base.join("..").join(VSCODE_DIR_NAME)
}

/// Returns `<base>/../.vscode/c_cpp_properties.json`
pub fn cpp_properties_path(base: &Path) -> PathBuf {
  vscode_dir(base).join(CPP_PROPERTIES_FILE)
}
