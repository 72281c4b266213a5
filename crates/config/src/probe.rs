//! Filesystem existence probing for optional credential files.
//!
//! Responsibilities:
//! - Define the `FileProbe` abstraction over filesystem existence checks.
//! - Resolve an optional file reference to its path or to absence.
//!
//! Does NOT handle:
//! - Reading or validating file contents; files are opaque and passed
//!   through by reference only.
//! - Deciding which paths to probe (see `resolver` and `constants`).
//!
//! Invariants:
//! - Probing is read-only and idempotent for unchanged filesystem state.
//! - Absence is a value (`None`), never an empty path and never an error.

use std::path::{Path, PathBuf};

/// Checks whether a file exists.
///
/// The resolver goes through this trait so tests can simulate presence or
/// absence without touching a real filesystem.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// File probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Resolve a path to `Some(path)` when the file exists, `None` otherwise.
pub fn file_if_exists(probe: &impl FileProbe, path: PathBuf) -> Option<PathBuf> {
    if probe.exists(&path) { Some(path) } else { None }
}
