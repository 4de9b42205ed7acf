//! Error types for Billboard
//!
//! Library code returns [`BillboardResult`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for Billboard operations
pub type BillboardResult<T> = Result<T, BillboardError>;

/// Main error type for Billboard operations
#[derive(Error, Debug)]
pub enum BillboardError {
    /// A watched or listed path could not be read
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error without a known path
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content or shortcut directory is missing
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Loopback listener could not bind
    #[error("cannot listen on {addr}: {message}")]
    Listen { addr: String, message: String },

    /// The OS opener failed to launch a target
    #[error("failed to open '{target}': {message}")]
    Open { target: String, message: String },
}
