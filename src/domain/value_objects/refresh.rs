//! Refresh Value Object
//!
//! Result of a pull from a polling UI: either nothing new since the last
//! pull, or freshly rendered content.

use serde::Serialize;

/// Outcome of a refresh query
///
/// `Unchanged` means "keep showing what you have". It is never content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "lowercase")]
pub enum Refresh<T> {
    /// No change since the previous pull
    Unchanged,
    /// New content to display
    Rendered(T),
}

impl<T> Refresh<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Refresh::Unchanged)
    }

    /// The rendered content, if any
    pub fn rendered(self) -> Option<T> {
        match self {
            Refresh::Unchanged => None,
            Refresh::Rendered(content) => Some(content),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Refresh<U> {
        match self {
            Refresh::Unchanged => Refresh::Unchanged,
            Refresh::Rendered(content) => Refresh::Rendered(f(content)),
        }
    }
}
