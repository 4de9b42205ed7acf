//! Carousel Mode Value Object

use serde::{Deserialize, Serialize};

/// Where carousel content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CarouselMode {
    /// A set of `carousel.<n>.<ext>` files, one page each (default)
    #[default]
    Pages,
    /// One fixed-name document
    Document,
}

impl std::str::FromStr for CarouselMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pages" => Ok(CarouselMode::Pages),
            "document" | "doc" => Ok(CarouselMode::Document),
            other => Err(format!("unknown carousel mode '{other}'")),
        }
    }
}
