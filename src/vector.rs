//! Reference sequence container backed by a `Vec`.
//!
//! [`Vector<T>`] implements the whole protocol: every optional capability,
//! plus [`Materializable`] with `Vec<T>` as its native form. [`Strings`] is the
//! default entry point and [`Pairs`] is what `zip` produces.

use std::fmt;

use crate::{
    capability::{Enumerable, Materializable, Resettable, Rewindable},
    cursor::Cursor,
    error::Result,
    iterable::Iterable,
    pair::Pair,
};

/// A growable sequence with a traversal cursor.
///
/// Elements are cloned out on `advance` so the data survives for a later
/// rewind.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut numbers: Vector<u32> = (1..=3).collect();
/// assert_eq!(numbers.advance(), Some(1));
/// numbers.rewind();
/// assert_eq!(numbers.advance(), Some(1));
/// numbers.clear();
/// assert!(numbers.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Vector<T> {
    data: Vec<T>,
    cursor: Cursor,
}

/// The string sequence.
pub type Strings = Vector<String>;

/// The sequence `zip` produces.
pub type Pairs<A, B> = Vector<Pair<A, B>>;

impl<T> Vector<T> {
    pub fn new() -> Self {
        Vector::from_vec(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Vector::from_vec(Vec::with_capacity(capacity))
    }

    /// Wrap an existing collection; traversal starts at its first element.
    pub fn from_vec(data: Vec<T>) -> Self {
        Vector {
            data,
            cursor: Cursor::Ready,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Append without going through the protocol; no `Clone` bound needed.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
    }
}

impl Vector<String> {
    /// Build a string sequence from borrowed text.
    pub fn from_strs(items: &[&str]) -> Self {
        items.iter().map(|s| s.to_string()).collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Vector::from_vec(data)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: Clone> Iterable for Vector<T> {
    type Item = T;

    fn construct_empty(&self) -> Result<Self> {
        Ok(Vector::new())
    }

    fn append(&mut self, element: T) {
        self.push(element);
    }

    fn advance(&mut self) -> Option<T> {
        self.advance_indexed().map(|(_, element)| element)
    }

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = T>> {
        Some(self)
    }

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
        Some(self)
    }

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
        Some(self)
    }
}

impl<T: Clone> Enumerable for Vector<T> {
    fn advance_indexed(&mut self) -> Option<(usize, T)> {
        self.cursor = self.cursor.step(self.data.len());
        let index = self.cursor.position()?;
        Some((index, self.data[index].clone()))
    }
}

impl<T> Rewindable for Vector<T> {
    fn rewind(&mut self) {
        self.cursor.rewind();
    }
}

impl<T> Resettable for Vector<T> {
    fn clear(&mut self) {
        self.cursor.rewind();
        self.data = Vec::new();
    }
}

impl<T: Clone> Materializable for Vector<T> {
    type Native = Vec<T>;

    fn extract_native(&self) -> &Vec<T> {
        &self.data
    }

    fn into_native(self) -> Vec<T> {
        self.data
    }
}
