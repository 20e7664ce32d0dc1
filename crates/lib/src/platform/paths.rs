use std::path::{Path, PathBuf};

use crate::consts::SERVICE_UNIT;

/// Directory holding administrator-provided systemd units.
pub const SYSTEMD_UNIT_DIR: &str = "/etc/systemd/system";

/// Marker created by Docker at the container root.
pub const DOCKER_MARKER: &str = "/.dockerenv";

/// Marker created by Podman in the runtime directory.
pub const PODMAN_MARKER: &str = "/run/.containerenv";

/// Host paths the dispatcher reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
  /// Location of the service unit definition.
  pub unit_path: PathBuf,
  /// Paths whose existence means we are running inside a container.
  pub container_markers: Vec<PathBuf>,
}

impl Layout {
  /// The layout of a real host.
  pub fn system() -> Self {
    Self {
      unit_path: Path::new(SYSTEMD_UNIT_DIR).join(SERVICE_UNIT),
      container_markers: vec![PathBuf::from(DOCKER_MARKER), PathBuf::from(PODMAN_MARKER)],
    }
  }

  /// A layout with every path placed under `root`.
  ///
  /// Mirrors the host layout so tests can stage markers and unit files in a
  /// temporary directory.
  pub fn rooted_at(root: &Path) -> Self {
    Self {
      unit_path: root.join("etc/systemd/system").join(SERVICE_UNIT),
      container_markers: vec![root.join(".dockerenv"), root.join("run/.containerenv")],
    }
  }

  /// Returns the first container marker present on disk, if any.
  pub fn container_marker(&self) -> Option<&Path> {
    self.container_markers.iter().map(PathBuf::as_path).find(|p| p.exists())
  }
}
