//! Core SortedList implementation.
//!
//! This module contains the SortedList struct and its operations. A SortedList
//! holds values of one declared kind and keeps them in ascending order after
//! every mutation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::list::error::{Result, SortedListError};
use crate::list::types::{Element, ElementKind, ElementRef};

/// An ordered, kind-restricted sequence of values.
///
/// The list is backed by a `Vec` kept in non-decreasing order, so every
/// operation is O(n) or better. Duplicates are allowed.
///
/// # Design
///
/// - The kind is fixed at construction and checked on every insertion
/// - Insertion places a value after any existing equal values
/// - Failed operations leave the list untouched
/// - A caller-visible cursor supports manual stepping through the values
///
/// # Cursor
///
/// The cursor indexes the live sequence and is not adjusted by mutations.
/// Inserting or removing while stepping shifts which value sits under the
/// cursor; that is expected behavior, not a snapshot.
///
/// The list does no internal locking. Sharing it across threads requires
/// wrapping the whole container in a lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSortedList", into = "RawSortedList")]
pub struct SortedList {
    /// The kind every stored element must match
    kind: ElementKind,
    /// Stored values, non-decreasing in natural order
    elements: Vec<Element>,
    /// Caller-visible traversal index
    position: usize,
}

impl SortedList {
    /// Creates an empty list of the given kind.
    pub fn new(kind: ElementKind) -> Self {
        SortedList {
            kind,
            elements: Vec::new(),
            position: 0,
        }
    }

    /// Creates a list of the given kind from an unsorted collection.
    ///
    /// Every value is checked before anything is stored; the first value of
    /// the wrong kind fails the whole construction.
    ///
    /// # Arguments
    ///
    /// * `kind` - The kind the list is restricted to
    /// * `values` - Initial values, in any order
    ///
    /// # Returns
    ///
    /// * `Ok(SortedList)` - The list with the values sorted ascending
    /// * `Err(SortedListError::TypeMismatch)` - If any value has the wrong kind
    pub fn with_values<I>(kind: ElementKind, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        let mut elements = Vec::new();
        for value in values {
            let value = value.into();
            check_kind(kind, &value)?;
            elements.push(value);
        }
        elements.sort();

        debug!(%kind, len = elements.len(), "constructed sorted list");

        Ok(SortedList {
            kind,
            elements,
            position: 0,
        })
    }

    /// Returns the kind this list is restricted to.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts a value at its sorted position.
    ///
    /// The value lands in front of the first element strictly greater than
    /// it, so it follows any elements equal to it. The cursor is not moved.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The index the value was placed at
    /// * `Err(SortedListError::TypeMismatch)` - If the value has the wrong kind
    pub fn insert(&mut self, value: impl Into<Element>) -> Result<usize> {
        let value = value.into();
        check_kind(self.kind, &value)?;

        let index = self.elements.partition_point(|existing| existing <= &value);
        debug!(kind = %self.kind, index, %value, "inserted element");
        self.elements.insert(index, value);
        Ok(index)
    }

    /// Removes every element equal to `value` and returns how many were removed.
    ///
    /// A value of the other kind matches nothing and leaves the list unchanged.
    pub fn remove_all<'a>(&mut self, value: impl Into<ElementRef<'a>>) -> usize {
        let value = value.into();
        let before = self.elements.len();
        self.elements.retain(|e| e.as_element_ref() != value);

        let removed = before - self.elements.len();
        debug!(kind = %self.kind, %value, removed, "removed matching elements");
        removed
    }

    /// Removes and returns the element at `index`.
    ///
    /// Later elements shift left by one.
    ///
    /// # Returns
    ///
    /// * `Ok(Element)` - The removed element
    /// * `Err(SortedListError::IndexOutOfBounds)` - If `index >= len()`
    pub fn remove_by_index(&mut self, index: usize) -> Result<Element> {
        let len = self.elements.len();
        if index >= len {
            warn!(index, len, "rejected out of bounds removal");
            return Err(SortedListError::IndexOutOfBounds { index, len });
        }

        let removed = self.elements.remove(index);
        debug!(kind = %self.kind, index, value = %removed, "removed element by index");
        Ok(removed)
    }

    /// Returns true if an element equal to `value` is stored.
    ///
    /// Never fails: a value of the other kind is simply not contained.
    /// The query is borrowed, so string lookups do not allocate.
    pub fn contains<'a>(&self, value: impl Into<ElementRef<'a>>) -> bool {
        let value = value.into();
        if value.kind() != self.kind {
            return false;
        }
        self.elements
            .binary_search_by(|existing| existing.as_element_ref().cmp(&value))
            .is_ok()
    }

    /// Removes every element and rewinds the cursor. The kind is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.position = 0;
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// Returns the stored values in sorted order.
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    /// Consumes the list, returning its values in sorted order.
    pub fn into_vec(self) -> Vec<Element> {
        self.elements
    }

    /// Iterates over the values in sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Returns the element under the cursor.
    ///
    /// # Returns
    ///
    /// * `Ok(&Element)` - The element at `current_position()`
    /// * `Err(SortedListError::IndexOutOfBounds)` - If the cursor is past the end
    pub fn current_value(&self) -> Result<&Element> {
        self.elements
            .get(self.position)
            .ok_or(SortedListError::IndexOutOfBounds {
                index: self.position,
                len: self.elements.len(),
            })
    }

    /// Returns the cursor index.
    pub fn current_position(&self) -> usize {
        self.position
    }

    /// Moves the cursor forward by one.
    ///
    /// There is no bounds check; compare `current_position()` with `len()`
    /// to detect the end.
    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    /// Moves the cursor back to the first element.
    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

/// Validates that `value` matches the declared `kind`.
fn check_kind(kind: ElementKind, value: &Element) -> Result<()> {
    match (kind, value) {
        (ElementKind::Integer, Element::Integer(_)) | (ElementKind::String, Element::String(_)) => {
            Ok(())
        }
        (expected, value) => {
            let actual = value.kind();
            warn!(%actual, %expected, "rejected element of wrong kind");
            Err(SortedListError::TypeMismatch { actual, expected })
        }
    }
}

/// Two lists are equal when they share a kind and hold the same values.
/// The cursor is not compared.
impl PartialEq for SortedList {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.elements == other.elements
    }
}

impl Eq for SortedList {}

impl fmt::Display for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortedList([")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("])")
    }
}

impl<'a> IntoIterator for &'a SortedList {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for SortedList {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Serialized form of a SortedList. The cursor is not persisted.
#[derive(Serialize, Deserialize)]
struct RawSortedList {
    kind: ElementKind,
    elements: Vec<Element>,
}

impl TryFrom<RawSortedList> for SortedList {
    type Error = SortedListError;

    fn try_from(raw: RawSortedList) -> Result<Self> {
        SortedList::with_values(raw.kind, raw.elements)
    }
}

impl From<SortedList> for RawSortedList {
    fn from(list: SortedList) -> Self {
        RawSortedList {
            kind: list.kind,
            elements: list.elements,
        }
    }
}
