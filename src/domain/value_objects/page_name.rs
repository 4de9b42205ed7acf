//! Carousel page names
//!
//! Pages are files named `carousel.<number>.<ext>`. They order by the
//! numeric value of `<number>`, so `carousel.2` precedes `carousel.10`.

use std::cmp::Ordering;

/// Fixed stem every page file starts with
pub const PAGE_PREFIX: &str = "carousel.";

/// A file name that matched the page pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageName {
    digits: String,
    file_name: String,
}

impl PageName {
    /// Match `file_name` against `carousel.<digits>.<extension>`
    pub fn parse(file_name: &str, extension: &str) -> Option<Self> {
        let rest = file_name.strip_prefix(PAGE_PREFIX)?;
        let (digits, ext) = rest.split_once('.')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || ext != extension {
            return None;
        }
        Some(Self {
            digits: digits.to_string(),
            file_name: file_name.to_string(),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Page number without leading zeros ("0" for all-zero)
    pub fn number(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

impl Ord for PageName {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric compare without parsing: shorter trimmed digit strings are smaller.
        let (a, b) = (self.number(), other.number());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

impl PartialOrd for PageName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
