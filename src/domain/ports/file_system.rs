//! FileSystem port - the reads the refresh controllers need
//!
//! Controllers only ever stat, read and list. Keeping that behind a trait
//! lets tests drive mtimes directly instead of sleeping.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors, each carrying the path involved
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// File is not valid UTF-8 text
    InvalidText(PathBuf),
    /// Any other I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Classify an I/O error for `path`
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            std::io::ErrorKind::InvalidData => FsError::InvalidText(path),
            _ => FsError::Io { path, source: err },
        }
    }

    /// The path the failed operation was about
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path)
            | FsError::PermissionDenied(path)
            | FsError::InvalidText(path)
            | FsError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::InvalidText(path) => {
                write!(f, "not valid UTF-8 text: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory, test only
pub trait FileSystem {
    /// Last modification time of `path`
    fn modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Read the whole file as UTF-8 text
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Non-directory entries directly inside `dir`, in no particular order
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        (**self).modified(path)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_files(dir)
    }
}
