//! External process execution.
//!
//! Every action `mb-service` performs is a single blocking child process that
//! inherits the terminal, so its output is the user-visible output.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::consts::SYSTEMCTL;

/// A program and its fixed argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<String>,
}

impl Invocation {
  pub fn new<I, S>(program: &str, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      program: program.to_string(),
      args: args.into_iter().map(Into::into).collect(),
    }
  }

  /// `systemctl daemon-reload`
  pub fn daemon_reload() -> Self {
    Self::new(SYSTEMCTL, ["daemon-reload"])
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// Launches child processes and waits for them.
///
/// An `Err` means the process could not be started at all; a started process
/// that fails is reported through its `ExitStatus`.
pub trait ProcessRunner {
  fn run(&mut self, invocation: &Invocation) -> io::Result<ExitStatus>;
}

/// Runs processes on the host with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
  fn run(&mut self, invocation: &Invocation) -> io::Result<ExitStatus> {
    debug!(command = %invocation, "spawning process");

    let status = Command::new(&invocation.program)
      .args(&invocation.args)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .status()?;

    debug!(command = %invocation, code = ?status.code(), "process exited");
    Ok(status)
  }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
  use super::*;
  use tracing_test::traced_test;

  #[test]
  fn display_joins_program_and_args() {
    let invocation = Invocation::new("journalctl", ["-u", "matterbridge.service", "-f"]);
    assert_eq!(invocation.to_string(), "journalctl -u matterbridge.service -f");
  }

  #[test]
  fn daemon_reload_targets_systemctl() {
    assert_eq!(
      Invocation::daemon_reload(),
      Invocation::new("systemctl", ["daemon-reload"])
    );
  }

  #[test]
  #[traced_test]
  fn system_runner_reports_exit_status() {
    let status = SystemRunner
      .run(&Invocation::new("/bin/sh", ["-c", "exit 3"]))
      .unwrap();

    assert_eq!(status.code(), Some(3));
    assert!(logs_contain("spawning process"));
  }

  #[test]
  fn system_runner_fails_to_launch_missing_binary() {
    let err = SystemRunner
      .run(&Invocation::new("/nonexistent/mb-service-test-binary", Vec::<String>::new()))
      .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }
}
