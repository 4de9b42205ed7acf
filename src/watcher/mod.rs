//! Polling change detection
//!
//! Content units are re-read only when their file's mtime moves. There is
//! no event source: callers poll, and each poll stats the watched path.

mod mtime;

pub use mtime::MtimeWatcher;
