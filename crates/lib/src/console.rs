//! User-facing message sink.
//!
//! The dispatcher never prints directly. The binary renders messages to the
//! terminal; tests record them.

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  /// Plain text on stdout, followed by one extra newline.
  Plain,
  Success,
  Warning,
  Error,
}

pub trait Console {
  fn emit(&mut self, level: Level, message: &str);

  fn plain(&mut self, message: &str) {
    self.emit(Level::Plain, message);
  }

  fn success(&mut self, message: &str) {
    self.emit(Level::Success, message);
  }

  fn warning(&mut self, message: &str) {
    self.emit(Level::Warning, message);
  }

  fn error(&mut self, message: &str) {
    self.emit(Level::Error, message);
  }
}
