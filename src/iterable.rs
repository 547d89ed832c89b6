//! Core contract every sequence satisfies.
//!
//! This module defines [`Iterable`], the minimal protocol the combinators are
//! written against. A sequence holds elements of one type in insertion order
//! and hands them out one at a time through [`Iterable::advance`].
//!
//! # Examples
//!
//! ```rust
//! use iterable::prelude::*;
//!
//! let mut words = Strings::new();
//! words.append("left".to_string());
//! words.append("right".to_string());
//! assert_eq!(words.advance().as_deref(), Some("left"));
//! assert_eq!(words.advance().as_deref(), Some("right"));
//! assert_eq!(words.advance(), None);
//! ```

use either::Either;

use crate::{
    boxed::Boxed,
    capability::{Capabilities, Enumerable, Resettable, Rewindable},
    error::{Error, Result},
};

/// An ordered collection traversed through a single internal cursor.
///
/// Only `construct_empty`, `append` and `advance` are required. Optional
/// capabilities are advertised by overriding the matching `as_*` query, which
/// defaults to `None`.
///
/// Once `advance` returns `None` the sequence is consumed: further calls are
/// unspecified unless the sequence is rewound or cleared.
pub trait Iterable {
    /// Element type held by this sequence
    type Item;

    /// Build a fresh, empty sequence of the same kind, sharing no data with `self`.
    fn construct_empty(&self) -> Result<Self>
    where
        Self: Sized;

    /// Push an element after every element already present.
    fn append(&mut self, element: Self::Item);

    /// Emit the next element not yet visited, or `None` once exhausted.
    fn advance(&mut self) -> Option<Self::Item>;

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = Self::Item>> {
        None
    }

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
        None
    }

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
        None
    }

    /// Report which optional capabilities this sequence offers.
    fn capabilities(&mut self) -> Capabilities {
        Capabilities::of(self)
    }

    /// Erase the concrete type, keeping runtime capability discovery.
    fn boxed(self) -> Boxed<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<L, R> Iterable for Either<L, R>
where
    L: Iterable,
    R: Iterable<Item = L::Item>,
{
    type Item = L::Item;

    fn construct_empty(&self) -> Result<Self> {
        match self {
            Either::Left(l) => l.construct_empty().map(Either::Left),
            Either::Right(r) => r.construct_empty().map(Either::Right),
        }
    }

    fn append(&mut self, element: Self::Item) {
        match self {
            Either::Left(l) => l.append(element),
            Either::Right(r) => r.append(element),
        }
    }

    fn advance(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.advance(),
            Either::Right(r) => r.advance(),
        }
    }

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = Self::Item>> {
        match self {
            Either::Left(l) => l.as_enumerable(),
            Either::Right(r) => r.as_enumerable(),
        }
    }

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
        match self {
            Either::Left(l) => l.as_rewindable(),
            Either::Right(r) => r.as_rewindable(),
        }
    }

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
        match self {
            Either::Left(l) => l.as_resettable(),
            Either::Right(r) => r.as_resettable(),
        }
    }
}

impl<L, R> Enumerable for Either<L, R>
where
    L: Enumerable,
    R: Enumerable<Item = L::Item>,
{
    fn advance_indexed(&mut self) -> Option<(usize, Self::Item)> {
        match self {
            Either::Left(l) => l.advance_indexed(),
            Either::Right(r) => r.advance_indexed(),
        }
    }
}

impl<L, R> Rewindable for Either<L, R>
where
    L: Rewindable,
    R: Rewindable,
{
    fn rewind(&mut self) {
        match self {
            Either::Left(l) => l.rewind(),
            Either::Right(r) => r.rewind(),
        }
    }
}

impl<L, R> Resettable for Either<L, R>
where
    L: Resettable,
    R: Resettable,
{
    fn clear(&mut self) {
        match self {
            Either::Left(l) => l.clear(),
            Either::Right(r) => r.clear(),
        }
    }
}

/// A borrowed sequence traverses and grows the sequence it points to.
///
/// It cannot build a fresh sequence of its own kind, so `construct_empty`
/// always fails. Combinators that only read or extend their input (`chain`,
/// `zip`, `from`, `into`) accept it; the ones that construct a result from it
/// do not.
impl<S> Iterable for &mut S
where
    S: Iterable + ?Sized,
{
    type Item = S::Item;

    fn construct_empty(&self) -> Result<Self> {
        Err(Error::construction(
            "a borrowed sequence cannot construct a new one",
        ))
    }

    fn append(&mut self, element: Self::Item) {
        (**self).append(element)
    }

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = Self::Item>> {
        (**self).as_enumerable()
    }

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
        (**self).as_rewindable()
    }

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
        (**self).as_resettable()
    }
}

impl<S> Enumerable for &mut S
where
    S: Enumerable + ?Sized,
{
    fn advance_indexed(&mut self) -> Option<(usize, Self::Item)> {
        (**self).advance_indexed()
    }
}

impl<S> Rewindable for &mut S
where
    S: Rewindable + ?Sized,
{
    fn rewind(&mut self) {
        (**self).rewind()
    }
}

impl<S> Resettable for &mut S
where
    S: Resettable + ?Sized,
{
    fn clear(&mut self) {
        (**self).clear()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Client-style containers used across the test suites.

    use super::*;

    /// A sequence with no optional capability: it can be walked exactly once.
    #[derive(Debug, Default)]
    pub struct OneShot<T> {
        pending: std::collections::VecDeque<T>,
    }

    impl<T> OneShot<T> {
        pub fn new(items: impl IntoIterator<Item = T>) -> Self {
            OneShot {
                pending: items.into_iter().collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.pending.len()
        }
    }

    impl<T> Iterable for OneShot<T> {
        type Item = T;

        fn construct_empty(&self) -> Result<Self> {
            Ok(OneShot {
                pending: Default::default(),
            })
        }

        fn append(&mut self, element: T) {
            self.pending.push_back(element);
        }

        fn advance(&mut self) -> Option<T> {
            self.pending.pop_front()
        }
    }

    /// An integer container that can be rewound and cleared but not enumerated.
    #[derive(Debug, Default)]
    pub struct Ints {
        pub data: Vec<i64>,
        next: usize,
    }

    impl Ints {
        pub fn new() -> Self {
            Ints::default()
        }
    }

    impl Iterable for Ints {
        type Item = i64;

        fn construct_empty(&self) -> Result<Self> {
            Ok(Ints::new())
        }

        fn append(&mut self, element: i64) {
            self.data.push(element);
        }

        fn advance(&mut self) -> Option<i64> {
            let value = self.data.get(self.next).copied()?;
            self.next += 1;
            Some(value)
        }

        fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
            Some(self)
        }

        fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
            Some(self)
        }
    }

    impl Rewindable for Ints {
        fn rewind(&mut self) {
            self.next = 0;
        }
    }

    impl Resettable for Ints {
        fn clear(&mut self) {
            self.data.clear();
            self.next = 0;
        }
    }

    /// A container whose `construct_empty` always fails.
    #[derive(Debug, Default)]
    pub struct Unbuildable;

    impl Iterable for Unbuildable {
        type Item = u8;

        fn construct_empty(&self) -> Result<Self> {
            Err(Error::construction("no allocator"))
        }

        fn append(&mut self, _element: u8) {}

        fn advance(&mut self) -> Option<u8> {
            None
        }
    }
}
