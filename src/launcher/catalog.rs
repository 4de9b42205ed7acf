//! Shortcut catalog: a recursive scan of the shortcuts directory

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Launchable candidates keyed by their path relative to the base directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, PathBuf>,
}

impl Catalog {
    /// Walk `base` collecting symlinks and files ending in `.{extension}`.
    ///
    /// Symlinks are recorded, never followed. Keys use `/` on every platform.
    /// When a symlink and a shortcut file share a key the file wins.
    /// A missing base directory yields an empty catalog.
    pub fn scan(base: &Path, extension: &str) -> Self {
        let mut entries = BTreeMap::new();
        let mut links = BTreeMap::new();
        if !base.is_dir() {
            tracing::warn!(dir = %base.display(), "shortcuts directory not found");
            return Self { entries };
        }

        let walker = WalkBuilder::new(base)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping shortcut entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(base) else {
                continue;
            };

            if entry.path_is_symlink() {
                match std::fs::read_link(path) {
                    Ok(dest) => {
                        let target = resolve_link(path, dest);
                        links.insert(key_for(relative, None), target);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "unreadable symlink");
                    }
                }
            } else if entry.file_type().is_some_and(|t| t.is_file())
                && path.extension().is_some_and(|ext| ext == extension)
            {
                entries.insert(key_for(relative, Some(extension)), path.to_path_buf());
            }
        }

        for (key, target) in links {
            match entries.get(&key) {
                Some(file) => tracing::warn!(
                    key = %key,
                    file = %file.display(),
                    link = %target.display(),
                    "shortcut key collision, keeping the file"
                ),
                None => {
                    entries.insert(key, target);
                }
            }
        }

        tracing::debug!(dir = %base.display(), count = entries.len(), "shortcuts scanned");
        Self { entries }
    }

    pub fn entries(&self) -> &BTreeMap<String, PathBuf> {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&PathBuf> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Relative links point from the link's own directory
fn resolve_link(link: &Path, dest: PathBuf) -> PathBuf {
    if dest.is_absolute() {
        return dest;
    }
    match link.parent() {
        Some(parent) => parent.join(dest),
        None => dest,
    }
}

fn key_for(relative: &Path, strip_extension: Option<&str>) -> String {
    let mut parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if let (Some(ext), Some(last)) = (strip_extension, parts.last_mut()) {
        let suffix = format!(".{ext}");
        if let Some(stem) = last.strip_suffix(&suffix) {
            *last = stem.to_string();
        }
    }
    parts.join("/")
}
