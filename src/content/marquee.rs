//! Marquee message: one plain text file, returned verbatim

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::BillboardResult;
use crate::infrastructure::fs::LocalFs;
use crate::watcher::MtimeWatcher;

use super::entry::CacheEntry;

/// Refresh controller for the marquee text
#[derive(Debug)]
pub struct MarqueeMessage<F = LocalFs> {
    fs: F,
    watcher: MtimeWatcher,
    entry: Option<CacheEntry>,
}

impl<F: FileSystem> MarqueeMessage<F> {
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            watcher: MtimeWatcher::new(path),
            entry: None,
        }
    }

    pub fn path(&self) -> &Path {
        self.watcher.path()
    }

    /// Current marquee text, re-read only when the file's mtime moved.
    ///
    /// On failure the previously cached text is kept for the next call.
    pub fn get(&mut self) -> BillboardResult<&str> {
        if self.watcher.has_changed(&self.fs)? {
            let text = match self.fs.read(self.watcher.path()) {
                Ok(text) => text,
                Err(e) => {
                    // Retry the read on the next poll even if the mtime stays put
                    self.watcher.reset();
                    return Err(e.into());
                }
            };
            tracing::info!(path = %self.path().display(), bytes = text.len(), "marquee reloaded");
            self.entry = Some(CacheEntry::new(
                text.clone(),
                text,
                self.watcher.last_seen(),
            ));
        }
        Ok(self.entry.as_ref().map(CacheEntry::rendered).unwrap_or_default())
    }

    /// Cached entry without touching the filesystem
    pub fn cached(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }
}
