//! Content cache entry

use std::time::SystemTime;

/// Last good read of one content unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    source: String,
    rendered: String,
    modified: Option<SystemTime>,
}

impl CacheEntry {
    pub fn new(source: String, rendered: String, modified: Option<SystemTime>) -> Self {
        Self {
            source,
            rendered,
            modified,
        }
    }

    /// Raw text as read from disk
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Display form derived from `source`
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Modification time the source was read at
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}
