//! CLI output formatting utilities.
//!
//! Colored status messages with Unicode symbols. Colors are only emitted when
//! the target stream supports them.

use mbservice_lib::console::{Console, Level};
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

/// Renders dispatcher messages on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Console for Terminal {
  fn emit(&mut self, level: Level, message: &str) {
    match level {
      Level::Plain => println!("{}", message),
      Level::Success => print_success(message),
      Level::Warning => print_warning(message),
      Level::Error => print_error(message),
    }
  }
}
