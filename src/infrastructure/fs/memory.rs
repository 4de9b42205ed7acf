//! In-memory file system for unit tests
//!
//! Lets tests set mtimes explicitly, so change detection is tested without
//! sleeping on coarse filesystem timestamps.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
struct MemoryFile {
    content: Result<String, ()>,
    modified: SystemTime,
}

/// Cloneable handle to a shared in-memory tree
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<HashMap<PathBuf, MemoryFile>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp `secs` seconds after the epoch
    pub fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    pub fn write(&self, path: impl AsRef<Path>, content: &str, modified: SystemTime) {
        self.files.lock().unwrap().insert(
            path.as_ref().to_path_buf(),
            MemoryFile {
                content: Ok(content.to_string()),
                modified,
            },
        );
    }

    /// A file that stats fine but fails to decode as text
    pub fn write_binary(&self, path: impl AsRef<Path>, modified: SystemTime) {
        self.files.lock().unwrap().insert(
            path.as_ref().to_path_buf(),
            MemoryFile {
                content: Err(()),
                modified,
            },
        );
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.lock().unwrap().remove(path.as_ref());
    }
}

impl FileSystem for MemoryFs {
    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|f| f.modified)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        let files = self.files.lock().unwrap();
        let file = files
            .get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        file.content
            .clone()
            .map_err(|()| FsError::InvalidText(path.to_path_buf()))
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let files = self.files.lock().unwrap();
        let listed: Vec<PathBuf> = files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();
        let dir_known = files.keys().any(|p| p.starts_with(dir));
        if listed.is_empty() && !dir_known {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(listed)
    }
}
