//! Element value stored in a SortedList.
//!
//! This module contains the Element tagged union, which carries either an
//! integer or a string along with its kind.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::list::types::kind::ElementKind;

/// A single value held by a SortedList.
///
/// The variant is the value's kind. Equality never coerces across variants:
/// `Element::String("1")` is not equal to `Element::Integer(1)`.
///
/// # Ordering
///
/// Values of the same kind use their natural order (numeric for integers,
/// lexicographic for strings). A list never holds mixed kinds, but for a
/// total order integers sort before strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Integer(i64),
    String(String),
}

impl Element {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Integer(_) => ElementKind::Integer,
            Element::String(_) => ElementKind::String,
        }
    }

    /// Returns the integer if this is an integer element.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Element::Integer(value) => Some(*value),
            Element::String(_) => None,
        }
    }

    /// Returns the text if this is a string element.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Integer(_) => None,
            Element::String(value) => Some(value),
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Element::Integer(a), Element::Integer(b)) => a.cmp(b),
            (Element::String(a), Element::String(b)) => a.cmp(b),
            (Element::Integer(_), Element::String(_)) => Ordering::Less,
            (Element::String(_), Element::Integer(_)) => Ordering::Greater,
        }
    }
}

/// Raw textual form: integers in decimal, strings unquoted.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(value) => write!(f, "{}", value),
            Element::String(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Integer(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Integer(i64::from(value))
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::String(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::String(value.to_owned())
    }
}

/// A borrowed view of an element, used for queries.
///
/// Lookups compare against stored elements without building an owned
/// `Element`, so a `&str` query never allocates. Ordering and equality
/// match `Element`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementRef<'a> {
    Integer(i64),
    String(&'a str),
}

impl ElementRef<'_> {
    /// Returns the kind of the viewed value.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementRef::Integer(_) => ElementKind::Integer,
            ElementRef::String(_) => ElementKind::String,
        }
    }
}

impl Element {
    /// Borrows this element as an `ElementRef`.
    pub fn as_element_ref(&self) -> ElementRef<'_> {
        match self {
            Element::Integer(value) => ElementRef::Integer(*value),
            Element::String(value) => ElementRef::String(value),
        }
    }
}

impl fmt::Display for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Integer(value) => write!(f, "{}", value),
            ElementRef::String(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ElementRef<'_> {
    fn from(value: i64) -> Self {
        ElementRef::Integer(value)
    }
}

impl From<i32> for ElementRef<'_> {
    fn from(value: i32) -> Self {
        ElementRef::Integer(i64::from(value))
    }
}

impl<'a> From<&'a str> for ElementRef<'a> {
    fn from(value: &'a str) -> Self {
        ElementRef::String(value)
    }
}

impl<'a> From<&'a String> for ElementRef<'a> {
    fn from(value: &'a String) -> Self {
        ElementRef::String(value)
    }
}

impl<'a> From<&'a Element> for ElementRef<'a> {
    fn from(value: &'a Element) -> Self {
        value.as_element_ref()
    }
}
