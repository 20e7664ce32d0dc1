pub mod os;
pub mod paths;

pub use os::Os;
pub use paths::Layout;

/// Effective user id of this process.
///
/// Returns `None` on platforms without a uid concept.
#[cfg(unix)]
pub fn effective_uid() -> Option<u32> {
  Some(rustix::process::geteuid().as_raw())
}

#[cfg(not(unix))]
pub fn effective_uid() -> Option<u32> {
  None
}

/// Whether the process runs with root privileges.
///
/// Platforms without a uid concept count as elevated.
pub fn is_elevated(euid: Option<u32>) -> bool {
  euid.is_none_or(|uid| uid == 0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn root_uid_is_elevated() {
    assert!(is_elevated(Some(0)));
  }

  #[test]
  fn regular_uid_is_not_elevated() {
    assert!(!is_elevated(Some(1000)));
  }

  #[test]
  fn missing_uid_concept_counts_as_elevated() {
    assert!(is_elevated(None));
  }

  #[cfg(unix)]
  #[test]
  fn effective_uid_is_available_on_unix() {
    assert!(effective_uid().is_some());
  }
}
