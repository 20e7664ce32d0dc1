//! mbservice-lib: the dispatcher behind `mb-service`
//!
//! `mb-service` manages the matterbridge systemd service and its plugins:
//! - `guard`: refuses to run off Linux, inside containers, or without root
//! - `unit`: writes the systemd unit on first use
//! - `command`: the subcommand table and the process each one runs
//! - `dispatch`: ties the pieces together for a single invocation

pub mod command;
pub mod console;
pub mod consts;
pub mod context;
pub mod dispatch;
pub mod guard;
pub mod platform;
pub mod process;
pub mod unit;

#[cfg(all(test, unix))]
mod testutil;
