/// Operating system variants that have an entry in the editor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Name of the `c_cpp_properties.json` configuration entry for this OS
  pub fn cpp_configuration_name(&self) -> &'static str {
    match self {
      Self::Linux => "Linux",
      Self::MacOs => "Mac",
      Self::Windows => "Win32",
    }
  }
}
