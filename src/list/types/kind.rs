//! Element kind declared by a list at construction.
//!
//! This module contains the ElementKind enumeration, the closed set of
//! element categories a SortedList can be restricted to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of values a list accepts.
///
/// A list picks its kind once, when it is constructed, and every element it
/// stores must match it for the rest of its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Signed integers, ordered numerically
    Integer,
    /// Text, ordered lexicographically by bytes
    String,
}

impl ElementKind {
    /// Returns the lowercase name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Integer => "integer",
            ElementKind::String => "string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
