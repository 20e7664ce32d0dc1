//! Subcommand table.
//!
//! Each subcommand name maps to a [`CommandKind`]; kinds that need an extra
//! argument say so through [`CommandKind::argument`], which keeps the
//! "please specify" checks uniform. A kind plus its argument becomes a
//! [`Command`], and every command resolves to exactly one [`Invocation`].

use thiserror::Error;

use crate::consts::{BRIDGE_BIN, CURRENT_DIR_PLUGIN, JOURNALCTL, LOG_LINES, NPM, SERVICE_NAME, SERVICE_UNIT, SYSTEMCTL};
use crate::process::Invocation;

/// Usage text printed for a bare invocation.
pub const USAGE: &str = "Usage: mb-service [start|stop|restart|logs|status]

  Please provide a command:
    start                            start the matterbridge service
    stop                             stop the matterbridge service
    restart                          restart the matterbridge service
    enable                           enable the matterbridge service
    disable                          disable the matterbridge service
    install <plugin>@<version>       install a plugin
    uninstall <plugin>@<version>     uninstall a plugin
    add <plugin>                     add a plugin to matterbridge
    remove <plugin>                  remove a plugin from matterbridge
    link                             adds the current directory to matterbridge for plugin development
    unlink                           reverses the link operation for the current directory
    logs                             tails the matterbridge service logs
    status                           check if matterbridge is running
";

/// A subcommand that was named but is missing its required argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please specify a {noun} to {verb}.")]
pub struct UsageError {
  pub noun: &'static str,
  pub verb: &'static str,
}

/// The extra argument a subcommand requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
  Package,
  Plugin,
}

impl Argument {
  pub fn noun(self) -> &'static str {
    match self {
      Argument::Package => "package",
      Argument::Plugin => "plugin",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
  Start,
  Stop,
  Restart,
  Enable,
  Disable,
  Install,
  Uninstall,
  Add,
  Remove,
  Link,
  Unlink,
  Logs,
  Status,
}

impl CommandKind {
  pub const ALL: [CommandKind; 13] = [
    CommandKind::Start,
    CommandKind::Stop,
    CommandKind::Restart,
    CommandKind::Enable,
    CommandKind::Disable,
    CommandKind::Install,
    CommandKind::Uninstall,
    CommandKind::Add,
    CommandKind::Remove,
    CommandKind::Link,
    CommandKind::Unlink,
    CommandKind::Logs,
    CommandKind::Status,
  ];

  pub fn name(self) -> &'static str {
    match self {
      CommandKind::Start => "start",
      CommandKind::Stop => "stop",
      CommandKind::Restart => "restart",
      CommandKind::Enable => "enable",
      CommandKind::Disable => "disable",
      CommandKind::Install => "install",
      CommandKind::Uninstall => "uninstall",
      CommandKind::Add => "add",
      CommandKind::Remove => "remove",
      CommandKind::Link => "link",
      CommandKind::Unlink => "unlink",
      CommandKind::Logs => "logs",
      CommandKind::Status => "status",
    }
  }

  /// Look up a subcommand by its exact name.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|kind| kind.name() == name)
  }

  pub fn argument(self) -> Option<Argument> {
    match self {
      CommandKind::Install | CommandKind::Uninstall => Some(Argument::Package),
      CommandKind::Add | CommandKind::Remove => Some(Argument::Plugin),
      _ => None,
    }
  }

  /// Pair this kind with the caller's argument.
  ///
  /// The argument is ignored by kinds that do not take one.
  pub fn with_argument(self, argument: Option<&str>) -> Result<Command, UsageError> {
    if let (Some(required), None) = (self.argument(), argument) {
      return Err(UsageError {
        noun: required.noun(),
        verb: self.name(),
      });
    }
    let value = argument.unwrap_or_default().to_string();

    Ok(match self {
      CommandKind::Start => Command::Service(ServiceVerb::Start),
      CommandKind::Stop => Command::Service(ServiceVerb::Stop),
      CommandKind::Restart => Command::Service(ServiceVerb::Restart),
      CommandKind::Enable => Command::Service(ServiceVerb::Enable),
      CommandKind::Disable => Command::Service(ServiceVerb::Disable),
      CommandKind::Install => Command::Install(value),
      CommandKind::Uninstall => Command::Uninstall(value),
      CommandKind::Add => Command::AddPlugin(value),
      CommandKind::Remove => Command::RemovePlugin(value),
      CommandKind::Link => Command::AddPlugin(CURRENT_DIR_PLUGIN.to_string()),
      CommandKind::Unlink => Command::RemovePlugin(CURRENT_DIR_PLUGIN.to_string()),
      CommandKind::Logs => Command::Logs,
      CommandKind::Status => Command::Status,
    })
  }
}

/// systemctl verbs that take only the service name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceVerb {
  Start,
  Stop,
  Restart,
  Enable,
  Disable,
}

impl ServiceVerb {
  pub fn as_str(self) -> &'static str {
    match self {
      ServiceVerb::Start => "start",
      ServiceVerb::Stop => "stop",
      ServiceVerb::Restart => "restart",
      ServiceVerb::Enable => "enable",
      ServiceVerb::Disable => "disable",
    }
  }
}

/// A fully resolved action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Service(ServiceVerb),
  Install(String),
  Uninstall(String),
  AddPlugin(String),
  RemovePlugin(String),
  Logs,
  Status,
}

impl Command {
  /// Parse a subcommand name and its optional argument.
  ///
  /// Returns `Ok(None)` for names outside the table.
  pub fn parse(name: &str, argument: Option<&str>) -> Result<Option<Command>, UsageError> {
    CommandKind::from_name(name)
      .map(|kind| kind.with_argument(argument))
      .transpose()
  }

  /// The external process this command runs.
  pub fn invocation(&self) -> Invocation {
    match self {
      Command::Service(verb) => Invocation::new(SYSTEMCTL, [verb.as_str(), SERVICE_NAME]),
      Command::Install(package) => Invocation::new(
        NPM,
        ["install", package.as_str(), "--global", "--omit=dev", "--verbose"],
      ),
      Command::Uninstall(package) => Invocation::new(NPM, ["uninstall", package.as_str(), "--global", "--verbose"]),
      Command::AddPlugin(plugin) => Invocation::new(BRIDGE_BIN, ["-add", plugin.as_str()]),
      Command::RemovePlugin(plugin) => Invocation::new(BRIDGE_BIN, ["-remove", plugin.as_str()]),
      Command::Logs => Invocation::new(
        JOURNALCTL,
        ["-u", SERVICE_UNIT, "-n", LOG_LINES, "-f", "--output", "cat"],
      ),
      Command::Status => Invocation::new(SYSTEMCTL, ["status", SERVICE_NAME, "--no-pager"]),
    }
  }

  /// Prefix for the message shown when the process cannot be launched.
  pub fn failure_label(&self) -> String {
    match self {
      Command::Service(verb) => format!("Failed to {} {} service", verb.as_str(), SERVICE_NAME),
      Command::Install(package) => format!("Failed to install {}", package),
      Command::Uninstall(package) => format!("Failed to uninstall {}", package),
      Command::AddPlugin(plugin) => format!("Failed to add plugin {}", plugin),
      Command::RemovePlugin(plugin) => format!("Failed to remove plugin {}", plugin),
      Command::Logs => "Failed to show logs".to_string(),
      Command::Status => "Failed to get status".to_string(),
    }
  }
}
