//! The `mb-service` control flow.
//!
//! Guard, then help or unit materialization, then one command. Nothing here
//! reads process-global state; the context, layout, runner and console are
//! all supplied by the caller.

use tracing::debug;

use crate::command::{Command, USAGE, UsageError};
use crate::console::Console;
use crate::context::InvocationContext;
use crate::guard::{self, Refusal};
use crate::platform::Layout;
use crate::process::ProcessRunner;
use crate::unit::{self, UnitError};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
  /// A precondition failed.
  Refused(Refusal),
  /// No subcommand was given; usage was printed.
  Help,
  /// The unit could not be materialized.
  Unit(UnitError),
  /// A known subcommand was missing its argument.
  Usage(UsageError),
  /// The subcommand is not in the table.
  Unknown(String),
  /// The command's process could not be started.
  LaunchFailed(Command),
  /// The command's process ran; `code` is its exit code, if it had one.
  Ran { command: Command, code: Option<i32> },
}

impl Outcome {
  /// Only a unit that failed to be written or loaded is a process failure.
  pub fn is_failure(&self) -> bool {
    matches!(self, Outcome::Unit(err) if err.is_fatal())
  }
}

/// Run one invocation to completion.
pub fn run<R, C>(ctx: &InvocationContext, layout: &Layout, runner: &mut R, console: &mut C) -> Outcome
where
  R: ProcessRunner,
  C: Console,
{
  if let Err(refusal) = guard::check(ctx, layout) {
    console.error(&refusal.to_string());
    return Outcome::Refused(refusal);
  }

  let Some(name) = ctx.subcommand() else {
    console.plain(USAGE);
    return Outcome::Help;
  };

  if let Err(err) = unit::ensure_unit(ctx, layout, runner, console) {
    console.error(&err.to_string());
    return Outcome::Unit(err);
  }

  let command = match Command::parse(name, ctx.argument()) {
    Ok(Some(command)) => command,
    Ok(None) => {
      debug!(subcommand = name, "unknown subcommand");
      return Outcome::Unknown(name.to_string());
    }
    Err(err) => {
      console.error(&err.to_string());
      return Outcome::Usage(err);
    }
  };

  execute(command, runner, console)
}

fn execute<R, C>(command: Command, runner: &mut R, console: &mut C) -> Outcome
where
  R: ProcessRunner,
  C: Console,
{
  let invocation = command.invocation();
  match runner.run(&invocation) {
    Ok(status) => {
      if !status.success() {
        console.warning(&format!("{} exited with {}.", invocation.program, status));
      }
      Outcome::Ran {
        code: status.code(),
        command,
      }
    }
    Err(err) => {
      console.error(&format!("{}: {}", command.failure_label(), err));
      Outcome::LaunchFailed(command)
    }
  }
}
