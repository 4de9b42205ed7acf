//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! - `fs/` - local (and in-memory, for tests) file systems, home resolution
//! - `opener` - platform open command

pub mod fs;
pub mod opener;

pub use fs::LocalFs;
pub use opener::SystemOpener;
#[cfg(test)]
pub use opener::RecordingOpener;
