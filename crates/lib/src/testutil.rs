//! Test doubles for the process runner and console.

use std::collections::VecDeque;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::ExitStatus;

use crate::console::{Console, Level};
use crate::context::InvocationContext;
use crate::platform::Os;
use crate::process::{Invocation, ProcessRunner};

/// Exit status with the given code, as `waitpid` would report it.
pub fn exit_code(code: i32) -> ExitStatus {
  ExitStatus::from_raw(code << 8)
}

/// A root invocation on a Linux host run by `tester`.
pub fn root_context(args: &[&str]) -> InvocationContext {
  InvocationContext {
    os: Os::Linux,
    euid: Some(0),
    sudo_user: Some("tester".into()),
    user: Some("root".into()),
    args: args.iter().map(|s| s.to_string()).collect(),
  }
}

/// Records invocations instead of running them.
///
/// Responses are consumed in order; once exhausted every run succeeds.
#[derive(Debug, Default)]
pub struct FakeRunner {
  pub calls: Vec<Invocation>,
  responses: VecDeque<io::Result<ExitStatus>>,
  watched: Option<PathBuf>,
  /// Whether the watched path existed at the time of each call.
  pub watched_existed: Vec<bool>,
}

impl FakeRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record whether `path` exists each time a process is launched.
  pub fn watching(path: PathBuf) -> Self {
    Self {
      watched: Some(path),
      ..Self::default()
    }
  }

  pub fn respond(mut self, response: io::Result<ExitStatus>) -> Self {
    self.responses.push_back(response);
    self
  }

  pub fn fail_to_launch(self) -> Self {
    self.respond(Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory")))
  }

  pub fn programs(&self) -> Vec<&str> {
    self.calls.iter().map(|c| c.program.as_str()).collect()
  }
}

impl ProcessRunner for FakeRunner {
  fn run(&mut self, invocation: &Invocation) -> io::Result<ExitStatus> {
    self.calls.push(invocation.clone());
    if let Some(path) = &self.watched {
      self.watched_existed.push(path.exists());
    }
    self.responses.pop_front().unwrap_or_else(|| Ok(exit_code(0)))
  }
}

/// Console that keeps every message in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
  pub messages: Vec<(Level, String)>,
}

impl RecordingConsole {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn at(&self, level: Level) -> Vec<&str> {
    self
      .messages
      .iter()
      .filter(|(l, _)| *l == level)
      .map(|(_, m)| m.as_str())
      .collect()
  }

  pub fn errors(&self) -> Vec<&str> {
    self.at(Level::Error)
  }

  pub fn contains(&self, level: Level, needle: &str) -> bool {
    self.at(level).iter().any(|m| m.contains(needle))
  }
}

impl Console for RecordingConsole {
  fn emit(&mut self, level: Level, message: &str) {
    self.messages.push((level, message.to_string()));
  }
}
