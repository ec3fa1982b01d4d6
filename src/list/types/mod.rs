//! Type definitions for the sorted list.
//!
//! This module contains the value types stored in and declared by a
//! SortedList, organized into focused submodules.

pub mod element;
pub mod kind;

pub use element::{Element, ElementRef};
pub use kind::ElementKind;
