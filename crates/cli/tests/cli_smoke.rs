//! CLI smoke tests for mb-service.
//!
//! Only bare invocations are exercised here: any subcommand could write the
//! systemd unit or call systemctl when the tests happen to run as root on a
//! real host.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Get a Command for the mb-service binary.
fn mb_service_cmd() -> Command {
  cargo_bin_cmd!("mb-service")
}

/// Every way a bare invocation may legitimately end.
const BARE_OUTCOMES: [&str; 4] = [
  "Usage: mb-service",
  "only available on Linux systems",
  "not available inside a container",
  "must be run as root",
];

#[test]
fn bare_invocation_exits_successfully() {
  let output = mb_service_cmd().env_remove("RUST_LOG").output().unwrap();

  assert!(output.status.success());
  let combined = format!(
    "{}{}",
    String::from_utf8_lossy(&output.stdout),
    String::from_utf8_lossy(&output.stderr)
  );
  assert!(
    BARE_OUTCOMES.iter().any(|needle| combined.contains(needle)),
    "unexpected output: {}",
    combined
  );
}

#[test]
fn usage_lists_all_subcommands_when_printed() {
  let output = mb_service_cmd().env_remove("RUST_LOG").output().unwrap();
  let stdout = String::from_utf8_lossy(&output.stdout);

  // Usage is only reachable as root on a Linux host.
  if stdout.contains("Usage: mb-service") {
    for name in [
      "start", "stop", "restart", "enable", "disable", "install", "uninstall", "add", "remove", "link", "unlink",
      "logs", "status",
    ] {
      assert!(stdout.contains(&format!("    {} ", name)), "usage is missing {}", name);
    }
  }
}

#[test]
fn debug_logging_goes_to_stderr() {
  mb_service_cmd()
    .env("RUST_LOG", "debug")
    .assert()
    .success()
    .stderr(predicate::str::contains("invocation"));
}

#[test]
fn usage_ends_with_a_blank_line_when_printed() {
  let output = mb_service_cmd().env_remove("RUST_LOG").output().unwrap();
  let stdout = String::from_utf8_lossy(&output.stdout);

  if stdout.contains("Usage: mb-service") {
    assert!(stdout.ends_with("\n\n"), "unexpected usage ending: {:?}", stdout);
    assert!(!stdout.ends_with("\n\n\n"));
  }
}
