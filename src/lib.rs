//! Billboard - file-driven content backend for kiosk windows
//!
//! Billboard watches a data directory by modification time and serves
//! three kinds of content on demand: a plain-text marquee, a carousel of
//! pages rendered from a lightweight markup, and a launcher catalog built
//! from a shortcuts directory. A loopback endpoint toggles the launcher's
//! focus.

pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod focus;
pub mod infrastructure;
pub mod launcher;
pub mod markup;
pub mod server;
pub mod watcher;

// Re-exports for convenience
pub use application::{Billboard, ServeEvent, ServeUseCase};
pub use config::Config;
pub use domain::value_objects::{CarouselMode, PageName, Refresh};
pub use error::{BillboardError, BillboardResult};
pub use markup::render;
pub use watcher::MtimeWatcher;
