//! Content units and their refresh controllers
//!
//! Each controller owns one watcher per backing file and one cache entry
//! per content unit:
//! - [`MarqueeMessage`] - plain text, returned as-is
//! - [`CarouselDocument`] - one markup document, `Unchanged` between edits
//! - [`PageCollection`] - numbered markup pages in a directory

mod document;
mod entry;
mod marquee;
mod pages;

pub use document::CarouselDocument;
pub use entry::CacheEntry;
pub use marquee::MarqueeMessage;
pub use pages::PageCollection;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Refresh;
use crate::error::BillboardResult;
use crate::infrastructure::fs::LocalFs;

/// The carousel in whichever mode is configured
#[derive(Debug)]
pub enum Carousel<F = LocalFs> {
    Document(CarouselDocument<F>),
    Pages(PageCollection<F>),
}

impl<F: FileSystem> Carousel<F> {
    /// Pull the carousel. Document mode yields a single page.
    pub fn refresh(&mut self, force: bool) -> BillboardResult<Refresh<Vec<String>>> {
        match self {
            Carousel::Document(doc) => Ok(doc.get(force)?.map(|html| vec![html])),
            Carousel::Pages(pages) => pages.refresh(force),
        }
    }
}
