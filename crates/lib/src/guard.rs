//! Precondition checks run before anything else.
//!
//! `mb-service` only makes sense directly on a Linux host, outside any
//! container, as root. A failed check is an expected outcome rather than an
//! error: the caller reports it and exits successfully.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::context::InvocationContext;
use crate::platform::{self, Layout};

/// Why the dispatcher refused to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Refusal {
  #[error("This command is only available on Linux systems. Please use the mb-service for your platform.")]
  UnsupportedPlatform { os: String },

  #[error("This command is not available inside a container. Please run it on a host system.")]
  Container { marker: PathBuf },

  #[error("This command must be run as root. Please use sudo.")]
  NotRoot { uid: u32 },
}

/// Run the checks in order; the first failure wins and later checks never run.
pub fn check(ctx: &InvocationContext, layout: &Layout) -> Result<(), Refusal> {
  if !ctx.os.is_linux() {
    return Err(Refusal::UnsupportedPlatform {
      os: ctx.os.to_string(),
    });
  }

  if let Some(marker) = layout.container_marker() {
    debug!(marker = %marker.display(), "container marker found");
    return Err(Refusal::Container {
      marker: marker.to_path_buf(),
    });
  }

  if !platform::is_elevated(ctx.euid) {
    return Err(Refusal::NotRoot {
      uid: ctx.euid.unwrap_or_default(),
    });
  }

  Ok(())
}
