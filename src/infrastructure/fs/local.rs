//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

use super::home::billboard_home_dir;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|e| FsError::from_io(e, path))
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| FsError::from_io(e, dir))? {
            let entry = entry.map_err(|e| FsError::from_io(e, dir))?;
            let path = entry.path();
            // `is_dir` follows symlinks, so a link to a directory is skipped too
            if !path.is_dir() {
                files.push(path);
            }
        }
        Ok(files)
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match billboard_home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
