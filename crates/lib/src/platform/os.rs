use std::fmt;

/// Host operating system, as reported by the platform identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
  Other(String),
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    Self::from_identifier(std::env::consts::OS)
  }

  /// Map a platform identifier (e.g. `std::env::consts::OS`) to an `Os`
  pub fn from_identifier(identifier: &str) -> Self {
    match identifier {
      "linux" => Self::Linux,
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      other => Self::Other(other.to_string()),
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
      Self::Other(name) => name,
    }
  }

  pub fn is_linux(&self) -> bool {
    matches!(self, Self::Linux)
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
