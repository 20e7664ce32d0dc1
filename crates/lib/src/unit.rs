//! systemd unit definition for the bridge service.
//!
//! The unit is written once, the first time any subcommand runs, and is never
//! rewritten or removed afterwards. An existing file is taken as "already
//! configured" whatever it contains.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::consts::SERVICE_NAME;
use crate::context::InvocationContext;
use crate::platform::Layout;
use crate::process::{Invocation, ProcessRunner};

/// Permissions of the unit file: owner read/write, everyone else read.
pub const UNIT_MODE: u32 = 0o644;

#[derive(Debug, Error)]
pub enum UnitError {
  #[error("Could not determine the user to run the service. Please set SUDO_USER or USER environment variable.")]
  UnknownUser,

  #[error("Failed to write service file: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to reload systemd daemon: {source}")]
  Reload {
    #[source]
    source: io::Error,
  },
}

impl UnitError {
  /// Whether the process must terminate with a failure status.
  ///
  /// A missing user only skips the current invocation; a unit that was not
  /// written or not loaded leaves the service half-configured.
  pub fn is_fatal(&self) -> bool {
    !matches!(self, UnitError::UnknownUser)
  }
}

/// What [`ensure_unit`] found or did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitState {
  Existing,
  Created { path: PathBuf, user: String },
}

/// The rendered unit, parameterized by the account it runs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUnit {
  pub user: String,
}

impl ServiceUnit {
  pub fn new(user: impl Into<String>) -> Self {
    Self { user: user.into() }
  }

  pub fn render(&self) -> String {
    format!(
      "[Unit]
Description={name}
After=network-online.target

[Service]
Type=simple
ExecStart={name} -service
WorkingDirectory=~
StandardOutput=inherit
StandardError=inherit
Restart=always
User={user}
Group={user}

[Install]
WantedBy=multi-user.target
",
      name = SERVICE_NAME,
      user = self.user
    )
  }
}

/// Make sure the unit file exists, writing it and reloading systemd if not.
pub fn ensure_unit<R, C>(
  ctx: &InvocationContext,
  layout: &Layout,
  runner: &mut R,
  console: &mut C,
) -> Result<UnitState, UnitError>
where
  R: ProcessRunner,
  C: Console,
{
  let user = ctx.service_user().ok_or(UnitError::UnknownUser)?;
  let path = &layout.unit_path;

  if path.exists() {
    debug!(path = %path.display(), "service unit already present");
    return Ok(UnitState::Existing);
  }

  let unit = ServiceUnit::new(user);
  let created = write_new(path, &unit.render()).map_err(|source| UnitError::Write {
    path: path.clone(),
    source,
  })?;
  if !created {
    debug!(path = %path.display(), "service unit created by someone else");
    return Ok(UnitState::Existing);
  }

  info!(path = %path.display(), user, "service unit written");
  console.success(&format!(
    "Service configuration written to {} successfully for user {}.",
    path.display(),
    user
  ));

  let status = runner
    .run(&Invocation::daemon_reload())
    .map_err(|source| UnitError::Reload { source })?;
  if status.success() {
    console.success("Systemd daemon reloaded successfully.");
  } else {
    console.warning(&format!("Systemd daemon reload exited with {}.", status));
  }

  Ok(UnitState::Created {
    path: path.clone(),
    user: user.to_string(),
  })
}

/// Create `path` exclusively and fill it with `contents`.
///
/// Returns `Ok(false)` when the file already exists.
fn write_new(path: &Path, contents: &str) -> io::Result<bool> {
  write_new_with(path, |file| file.write_all(contents.as_bytes()))
}

/// Create `path` exclusively and let `fill` write its contents.
///
/// A file that was created but could not be completed is removed again, so a
/// later run does not mistake it for a configured unit.
fn write_new_with<F>(path: &Path, fill: F) -> io::Result<bool>
where
  F: FnOnce(&mut File) -> io::Result<()>,
{
  let mut options = OpenOptions::new();
  options.write(true).create_new(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(UNIT_MODE);
  }

  let mut file = match options.open(path) {
    Ok(file) => file,
    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
    Err(e) => return Err(e),
  };

  let result = fill(&mut file).and_then(|()| set_unit_mode(path));
  drop(file);
  if let Err(e) = result {
    warn!(path = %path.display(), error = %e, "removing incomplete service unit");
    let _ = std::fs::remove_file(path);
    return Err(e);
  }

  Ok(true)
}

// The open mode is filtered through the umask.
#[cfg(unix)]
fn set_unit_mode(path: &Path) -> io::Result<()> {
  use std::os::unix::fs::PermissionsExt;
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(UNIT_MODE))
}

#[cfg(not(unix))]
fn set_unit_mode(_path: &Path) -> io::Result<()> {
  Ok(())
}
