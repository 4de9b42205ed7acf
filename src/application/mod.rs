//! Application Layer
//!
//! Use cases that orchestrate the content controllers, launcher and focus.
//!
//! - `Billboard` - pull API over every controller, built from config
//! - `ServeUseCase` - poll loop with NDJSON events and line commands

pub mod billboard;
pub mod serve;

pub use billboard::Billboard;
pub use serve::{LoopInput, ServeCommand, ServeEvent, ServeOptions, ServeUseCase};
