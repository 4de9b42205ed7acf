//! Mtime watcher

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::FileSystem;
use crate::error::BillboardResult;

/// Change detector for one path, using the modification time as the only signal.
///
/// The baseline starts at "never observed", so the first check always
/// reports a change. Any difference counts, including a clock going
/// backwards.
#[derive(Debug, Clone)]
pub struct MtimeWatcher {
    path: PathBuf,
    last_seen: Option<SystemTime>,
}

impl MtimeWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_seen: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modification time as of the last reported change
    pub fn last_seen(&self) -> Option<SystemTime> {
        self.last_seen
    }

    /// Test-and-set: report whether the mtime moved and adopt the new one.
    ///
    /// Two calls with no change in between return `true` then `false`. A
    /// stat failure is returned as-is and leaves the baseline untouched.
    pub fn has_changed<F: FileSystem + ?Sized>(&mut self, fs: &F) -> BillboardResult<bool> {
        let current = fs.modified(&self.path)?;
        if self.last_seen == Some(current) {
            return Ok(false);
        }

        tracing::debug!(
            path = %self.path.display(),
            first = self.last_seen.is_none(),
            "mtime changed"
        );
        self.last_seen = Some(current);
        Ok(true)
    }

    /// Forget the baseline so the next check reports a change
    pub fn reset(&mut self) {
        self.last_seen = None;
    }
}
