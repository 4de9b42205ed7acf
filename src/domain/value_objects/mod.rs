//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod carousel_mode;
mod page_name;
mod refresh;

pub use carousel_mode::CarouselMode;
pub use page_name::{PageName, PAGE_PREFIX};
pub use refresh::Refresh;
