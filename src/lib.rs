//! # Sorted List
//!
//! An ordered container restricted to a single declared element kind
//! (integers or strings). Values are kept in ascending order after every
//! mutation, and values of the wrong kind are rejected.
//!
//! ## Features
//!
//! - **Kind-checked**: the kind is fixed at construction and enforced on every insert
//! - **Always sorted**: insertion finds the sorted position, ties land after equal values
//! - **Atomic failures**: a rejected value or index leaves the list untouched
//! - **Manual cursor**: `current_value`/`advance`/`rewind` alongside standard iteration
//!
//! ## Example
//!
//! ```rust
//! use sorted_list::{ElementKind, SortedList};
//!
//! let mut list = SortedList::new(ElementKind::Integer);
//! list.insert(5).unwrap();
//! list.insert(2).unwrap();
//! list.insert(8).unwrap();
//! assert_eq!(list.to_string(), "SortedList([2, 5, 8])");
//! assert!(list.insert("five").is_err());
//! ```

pub mod list;

// Re-export the main public API from the list module
pub use list::{Element, ElementKind, ElementRef, Result, SortedList, SortedListError};
