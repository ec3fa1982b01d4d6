//! Error type for SortedList operations.

use thiserror::Error;

use crate::list::types::ElementKind;

/// Failures reported by SortedList mutations and the cursor.
///
/// A failing operation never leaves the list partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortedListError {
    /// A value's kind disagrees with the list's declared kind.
    #[error("Cannot insert {actual} into a list of {expected}")]
    TypeMismatch {
        actual: ElementKind,
        expected: ElementKind,
    },

    /// An index or cursor position outside `[0, len)`.
    #[error("Index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SortedListError>;
