pub mod os;

pub use os::Os;

use crate::vscode::{CPP_PROPERTIES, PlatformConfiguration};

/// Returns the editor configuration entry matching the current OS
///
/// Returns `None` if the OS has no entry
pub fn host_configuration() -> Option<&'static PlatformConfiguration> {
  let name = Os::current()?.cpp_configuration_name();
  CPP_PROPERTIES.configurations.iter().find(|c| c.name == name)
}
