//! Carousel document: one markup file rendered to a single page

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Refresh;
use crate::error::BillboardResult;
use crate::infrastructure::fs::LocalFs;
use crate::markup;
use crate::watcher::MtimeWatcher;

use super::entry::CacheEntry;

/// Refresh controller for a single carousel document
#[derive(Debug)]
pub struct CarouselDocument<F = LocalFs> {
    fs: F,
    watcher: MtimeWatcher,
    entry: Option<CacheEntry>,
}

impl<F: FileSystem> CarouselDocument<F> {
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

    /// Rendered document if it changed since the last call (or `force`),
    /// otherwise [`Refresh::Unchanged`].
    ///
    /// The watcher is consulted on every call, so a forced call also
    /// absorbs a pending change.
    pub fn get(&mut self, force: bool) -> BillboardResult<Refresh<String>> {
        let changed = self.watcher.has_changed(&self.fs)?;
        if !changed && !force {
            return Ok(Refresh::Unchanged);
        }

        let source = match self.fs.read(self.watcher.path()) {
            Ok(source) => source,
            Err(e) => {
                if changed {
                    self.watcher.reset();
                }
                return Err(e.into());
            }
        };
        let rendered = markup::render(&source);
        tracing::debug!(path = %self.path().display(), changed, force, "carousel document rendered");
        self.entry = Some(CacheEntry::new(
            source,
            rendered.clone(),
            self.watcher.last_seen(),
        ));
        Ok(Refresh::Rendered(rendered))
    }

    pub fn cached(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }
}
