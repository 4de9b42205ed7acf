//! Carousel pages: every `carousel.<n>.<ext>` file in a directory

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PageName, Refresh};
use crate::error::BillboardResult;
use crate::infrastructure::fs::LocalFs;
use crate::markup;
use crate::watcher::MtimeWatcher;

use super::entry::CacheEntry;

/// One page file with its own watcher
#[derive(Debug)]
struct Page {
    name: PageName,
    watcher: MtimeWatcher,
    entry: Option<CacheEntry>,
    failing: bool,
}

impl Page {
    fn new(name: PageName, path: &Path) -> Self {
        Self {
            name,
            watcher: MtimeWatcher::new(path),
            entry: None,
            failing: false,
        }
    }

    /// Mark the page failing. `true` only for the first failure in a row.
    fn record_failure(&mut self) -> bool {
        !std::mem::replace(&mut self.failing, true)
    }

    /// Re-read and re-render when the mtime moved. `Ok(true)` on a new rendering.
    fn refresh<F: FileSystem>(&mut self, fs: &F) -> BillboardResult<bool> {
        if !self.watcher.has_changed(fs)? {
            return Ok(false);
        }
        let source = match fs.read(self.watcher.path()) {
            Ok(source) => source,
            Err(e) => {
                self.watcher.reset();
                return Err(e.into());
            }
        };
        self.failing = false;
        let rendered = markup::render(&source);
        self.entry = Some(CacheEntry::new(source, rendered, self.watcher.last_seen()));
        Ok(true)
    }
}

/// Refresh controller for a directory of carousel pages
///
/// Pages are ordered by page number. Pages whose file disappears are
/// dropped on the next scan. A page that fails to read keeps its last
/// rendering, or is left out if it never rendered.
#[derive(Debug)]
pub struct PageCollection<F = LocalFs> {
    fs: F,
    dir: PathBuf,
    extension: String,
    pages: HashMap<PathBuf, Page>,
    primed: bool,
}

impl<F: FileSystem> PageCollection<F> {
    pub fn new(fs: F, dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            fs,
            dir: dir.into(),
            extension: extension.into(),
            pages: HashMap::new(),
            primed: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Rendered output of every current page, in page order
    pub fn pages(&mut self) -> BillboardResult<Vec<String>> {
        self.scan()?;
        Ok(self.rendered())
    }

    /// Like [`pages`](Self::pages) but returns `Unchanged` when no page was
    /// added, changed or removed. The first call always renders.
    pub fn refresh(&mut self, force: bool) -> BillboardResult<Refresh<Vec<String>>> {
        let changed = self.scan()?;
        let first = !self.primed;
        self.primed = true;
        if changed || force || first {
            Ok(Refresh::Rendered(self.rendered()))
        } else {
            Ok(Refresh::Unchanged)
        }
    }

    /// Number of pages currently tracked (rendered or not)
    pub fn tracked(&self) -> usize {
        self.pages.len()
    }

    /// Number of tracked pages whose latest read failed
    pub fn failing(&self) -> usize {
        self.pages.values().filter(|p| p.failing).count()
    }

    /// Sync tracked pages with the directory. `Ok(true)` if output changed.
    fn scan(&mut self) -> BillboardResult<bool> {
        let listed = self.fs.list_files(&self.dir)?;
        let mut seen = HashSet::new();
        let mut changed = false;

        for path in listed {
            let Some(name) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| PageName::parse(n, &self.extension))
            else {
                continue;
            };
            let page = self
                .pages
                .entry(path.clone())
                .or_insert_with(|| Page::new(name, &path));
            match page.refresh(&self.fs) {
                Ok(true) => {
                    tracing::debug!(page = %page.name.file_name(), "carousel page rendered");
                    changed = true;
                }
                Ok(false) => {}
                Err(e) if page.record_failure() => {
                    tracing::warn!(page = %page.name.file_name(), error = %e, "skipping unreadable carousel page");
                }
                Err(e) => {
                    tracing::debug!(page = %page.name.file_name(), error = %e, "carousel page still unreadable");
                }
            }
            seen.insert(path);
        }

        let mut removed = 0usize;
        let mut removed_rendered = false;
        self.pages.retain(|path, page| {
            let keep = seen.contains(path);
            if !keep {
                removed += 1;
                removed_rendered |= page.entry.is_some();
            }
            keep
        });
        if removed > 0 {
            tracing::info!(removed, dir = %self.dir.display(), "carousel pages removed");
        }

        // A removed page only changes output if it had rendered
        Ok(changed || removed_rendered)
    }

    fn rendered(&self) -> Vec<String> {
        let mut pages: Vec<&Page> = self.pages.values().filter(|p| p.entry.is_some()).collect();
        pages.sort_by(|a, b| a.name.cmp(&b.name));
        pages
            .into_iter()
            .filter_map(|p| p.entry.as_ref().map(|e| e.rendered().to_string()))
            .collect()
    }
}
