//! Sorted list module.
//!
//! This module contains the SortedList container and all its supporting
//! types: the element kind, the element value and the error type.

pub mod error;
pub mod sorted_list;
pub mod types;

// Re-export the main public API
pub use error::{Result, SortedListError};
pub use sorted_list::SortedList;
pub use types::{Element, ElementKind, ElementRef};
