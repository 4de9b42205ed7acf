//! Domain Layer
//!
//! Value types and port traits, free of I/O.
//!
//! - `value_objects/` - Refresh outcome, carousel mode, page names
//! - `ports/` - FileSystem, Opener and FocusTarget interfaces

pub mod ports;
pub mod value_objects;
