//! Snapshot of the process environment taken once at startup.
//!
//! Everything the dispatcher needs to know about the host (platform, privilege
//! level, invoking user, arguments) is read here and nowhere else, so the rest
//! of the crate can be driven from hand-built contexts in tests.

use crate::platform::{self, Os};

/// Environment variable set by `sudo` to the invoking user.
pub const SUDO_USER_VAR: &str = "SUDO_USER";

/// General user identity variable, used when `SUDO_USER` is absent.
pub const USER_VAR: &str = "USER";

/// Immutable description of one `mb-service` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
  pub os: Os,
  /// Effective uid, `None` where the platform has no uid concept.
  pub euid: Option<u32>,
  pub sudo_user: Option<String>,
  pub user: Option<String>,
  /// Positional arguments following the program name.
  pub args: Vec<String>,
}

impl InvocationContext {
  /// Capture the current process environment.
  pub fn capture(args: Vec<String>) -> Self {
    Self {
      os: Os::current(),
      euid: platform::effective_uid(),
      sudo_user: non_empty_var(SUDO_USER_VAR),
      user: non_empty_var(USER_VAR),
      args,
    }
  }

  /// The subcommand name, if one was given.
  pub fn subcommand(&self) -> Option<&str> {
    self.args.first().map(String::as_str)
  }

  /// The optional argument following the subcommand. Empty strings count as absent.
  pub fn argument(&self) -> Option<&str> {
    self.args.get(1).map(String::as_str).filter(|s| !s.is_empty())
  }

  /// The user the service should run as: `SUDO_USER` first, then `USER`.
  pub fn service_user(&self) -> Option<&str> {
    self.sudo_user.as_deref().or(self.user.as_deref())
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name).ok().filter(|v| !v.is_empty())
}
