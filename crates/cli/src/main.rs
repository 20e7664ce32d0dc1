use std::ffi::OsString;
use std::iter;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mbservice_lib::context::InvocationContext;
use mbservice_lib::dispatch;
use mbservice_lib::platform::Layout;
use mbservice_lib::process::SystemRunner;

mod output;

/// mb-service - manage the matterbridge systemd service and its plugins
///
/// Takes a subcommand and at most one argument; run without arguments for usage.
#[derive(Parser)]
#[command(name = "mb-service")]
#[command(disable_help_flag = true, disable_version_flag = true, disable_help_subcommand = true)]
struct Cli {
  /// Subcommand followed by its optional argument
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  args: Vec<OsString>,
}

impl Cli {
  /// Parse raw process arguments, program name excluded.
  ///
  /// A `--` is inserted ahead of them so every user argument, including a
  /// literal `--`, reaches the dispatcher untouched.
  fn from_args_os<I>(raw: I) -> Result<Self, clap::Error>
  where
    I: IntoIterator<Item = OsString>,
  {
    let argv = iter::once(OsString::from("mb-service"))
      .chain(iter::once(OsString::from("--")))
      .chain(raw);
    Self::try_parse_from(argv)
  }

  /// Positional arguments as text; invalid UTF-8 is replaced, not rejected.
  fn positional(&self) -> Vec<String> {
    self.args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
  }
}

fn main() -> Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .without_time()
    .try_init()
    .map_err(|e| anyhow::anyhow!("{}", e))?;

  let cli = Cli::from_args_os(std::env::args_os().skip(1))?;
  let ctx = InvocationContext::capture(cli.positional());
  debug!(os = %ctx.os, euid = ?ctx.euid, args = ?ctx.args, "invocation");

  let outcome = dispatch::run(&ctx, &Layout::system(), &mut SystemRunner, &mut output::Terminal);
  debug!(?outcome, "finished");

  Ok(if outcome.is_failure() {
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  })
}
