/// Name of the managed systemd service.
pub const SERVICE_NAME: &str = "matterbridge";

/// Unit name used when filtering the journal.
pub const SERVICE_UNIT: &str = "matterbridge.service";

/// The bridge binary, also responsible for its own plugin registration.
pub const BRIDGE_BIN: &str = "matterbridge";

pub const SYSTEMCTL: &str = "systemctl";
pub const JOURNALCTL: &str = "journalctl";
pub const NPM: &str = "npm";

/// Plugin identifier used by `link`/`unlink`: the current working directory.
pub const CURRENT_DIR_PLUGIN: &str = "./";

/// Number of journal lines shown before following.
pub const LOG_LINES: &str = "1000";
