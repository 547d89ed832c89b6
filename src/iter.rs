//! The chainable facade over a sequence.
//!
//! [`Iter<S>`] owns exactly one sequence. Combinators that produce a new
//! sequence consume the facade and return a new one wrapping the result, so a
//! drained sequence can never be reached again by accident. Combinators that
//! leave the same sequence in place (`each`, `count`, `nth`, ...) borrow it.
//!
//! # Examples
//!
//! ```rust
//! use iterable::prelude::*;
//!
//! let mut it = Iter::new(Strings::from_strs(&["abc", "bbc", "abccd", "abcdd"]))
//!     .filter(|s| s.starts_with("ab"))
//!     .or(|s| s != "abcdd", "abcde".to_string())
//!     .map(|s| format!("{s} starts from 'ab'"))
//!     .every(|i, s| format!("{i}: {s}"));
//!
//! assert_eq!(it.nth(2).as_deref(), Some("2: abcde starts from 'ab'"));
//! assert_eq!(it.count(), 3);
//! ```
//!
//! [`Drain`] bridges to the standard library:
//!
//! ```rust
//! use iterable::prelude::*;
//!
//! let mut it = Iter::new(Strings::from_strs(&["a", "bb", "ccc"]));
//! let lengths: Vec<usize> = it.drain().map(|s| s.len()).collect();
//! assert_eq!(lengths, vec![1, 2, 3]);
//! ```

use crate::{
    capability::{Capabilities, Enumerable, Materializable},
    combinators,
    iterable::Iterable,
    vector::Pairs,
};

/// Chainable handle owning one sequence.
#[derive(Debug, Clone, Default)]
pub struct Iter<S> {
    seq: S,
    // Elements walked by `advance_by` and `count` since the last rewind.
    visited: usize,
}

impl<S> Iter<S> {
    pub fn new(seq: S) -> Self {
        Iter { seq, visited: 0 }
    }

    /// Give up the facade and take back the sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }

    pub fn get_ref(&self) -> &S {
        &self.seq
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.seq
    }
}

impl<S> Iter<S>
where
    S: Iterable,
{
    pub fn capabilities(&mut self) -> Capabilities {
        self.seq.capabilities()
    }

    /// See [`combinators::filter`].
    pub fn filter<P>(mut self, predicate: P) -> Iter<S>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Iter::new(combinators::filter(&mut self.seq, predicate))
    }

    /// See [`combinators::map`].
    pub fn map<F>(mut self, transform: F) -> Iter<S>
    where
        F: FnMut(S::Item) -> S::Item,
    {
        Iter::new(combinators::map(&mut self.seq, transform))
    }

    /// See [`combinators::every`].
    pub fn every<F>(mut self, transform: F) -> Iter<S>
    where
        S: Enumerable,
        F: FnMut(usize, S::Item) -> S::Item,
    {
        Iter::new(combinators::every(&mut self.seq, transform))
    }

    /// See [`combinators::or`].
    pub fn or<P>(mut self, predicate: P, default: S::Item) -> Iter<S>
    where
        S::Item: Clone,
        P: FnMut(&S::Item) -> bool,
    {
        Iter::new(combinators::or(&mut self.seq, predicate, default))
    }

    /// Append every element of `other` after this sequence's elements.
    pub fn chain<O>(mut self, mut other: O) -> Iter<S>
    where
        O: Iterable<Item = S::Item>,
    {
        Iter::new(combinators::chain(&mut self.seq, &mut other))
    }

    /// Pair elements with those of `other`; see [`combinators::zip`].
    ///
    /// ```rust
    /// use iterable::prelude::*;
    ///
    /// let numbers: Vector<i32> = vec![10, 20].into();
    /// let pairs = Iter::new(Strings::from_strs(&["a", "b", "c"]))
    ///     .zip(numbers)
    ///     .collect();
    /// assert_eq!(pairs.len(), 2);
    /// assert_eq!(pairs[1], Pair::new("b".to_string(), 20));
    /// ```
    pub fn zip<O>(mut self, mut other: O) -> Iter<Pairs<S::Item, O::Item>>
    where
        O: Iterable,
    {
        Iter::new(combinators::zip(&mut self.seq, &mut other))
    }

    /// Convert into `target`, which decides the new element type.
    ///
    /// ```rust
    /// use iterable::prelude::*;
    ///
    /// let ints = Iter::new(Strings::from_strs(&["1", "2", "3"]))
    ///     .into(Vector::<i64>::new(), |s| s.parse().ok())
    ///     .collect();
    /// assert_eq!(ints, vec![1, 2, 3]);
    /// ```
    pub fn into<D, F>(mut self, target: D, convert: F) -> Iter<D>
    where
        D: Iterable,
        F: FnMut(S::Item) -> Option<D::Item>,
    {
        Iter::new(combinators::into(&mut self.seq, target, convert))
    }

    /// Refill this sequence from `other`; see [`combinators::from`].
    pub fn from<O, F>(self, mut other: O, convert: F) -> Iter<S>
    where
        O: Iterable,
        F: FnMut(O::Item) -> Option<S::Item>,
    {
        Iter::new(combinators::from(&mut other, self.seq, convert))
    }

    /// See [`combinators::each`].
    pub fn each<F>(&mut self, mut action: F)
    where
        F: FnMut(S::Item),
    {
        let rewindable = self.seq.as_rewindable().is_some();
        let mut drained = 0usize;
        combinators::each(&mut self.seq, |element| {
            drained += 1;
            action(element)
        });
        self.visited = if rewindable { 0 } else { self.visited + drained };
    }

    /// Total number of elements.
    ///
    /// A rewindable sequence is counted from its start. For any other sequence
    /// the elements already passed by this facade are added to what remains.
    pub fn count(&mut self) -> usize {
        if self.seq.as_rewindable().is_some() {
            self.visited = 0;
            return combinators::count(&mut self.seq);
        }
        self.visited += combinators::count(&mut self.seq);
        self.visited
    }

    /// Advance up to `n` elements.
    ///
    /// The returned index counts from the last rewind, so successive calls
    /// continue where the previous one stopped.
    ///
    /// ```rust
    /// use iterable::prelude::*;
    ///
    /// let mut it = Iter::new(Strings::from_strs(&["a", "b", "c", "d"]));
    /// assert_eq!(it.advance_by(2), (1, true));
    /// assert_eq!(it.advance_by(1), (2, true));
    /// assert_eq!(it.advance_by(5), (3, false));
    /// ```
    pub fn advance_by(&mut self, n: usize) -> (usize, bool) {
        let walk = combinators::walk(&mut self.seq, n);
        self.visited = match walk.last_index {
            Some(index) => index + 1,
            None => self.visited + walk.steps,
        };
        (self.visited.saturating_sub(1), walk.more)
    }

    /// See [`combinators::nth`].
    pub fn nth(&mut self, n: usize) -> Option<S::Item> {
        if combinators::rewind(&mut self.seq) {
            self.visited = 0;
        }
        let (found, consumed) = combinators::seek(&mut self.seq, n);
        if combinators::rewind(&mut self.seq) {
            self.visited = 0;
        } else {
            self.visited += consumed;
        }
        found
    }

    /// See [`combinators::first`].
    pub fn first<P>(&mut self, predicate: P) -> Option<(usize, S::Item)>
    where
        S: Enumerable,
        P: FnMut(&S::Item) -> bool,
    {
        let found = combinators::first(&mut self.seq, predicate);
        if let Some((index, _)) = &found {
            self.visited = index + 1;
        }
        found
    }

    /// See [`combinators::last`].
    pub fn last<P>(&mut self, predicate: P) -> Option<(usize, S::Item)>
    where
        S: Enumerable,
        P: FnMut(&S::Item) -> bool,
    {
        combinators::last(&mut self.seq, predicate)
    }

    /// Finish the pipeline and hand back the native collection.
    pub fn collect(self) -> S::Native
    where
        S: Materializable,
    {
        self.seq.into_native()
    }

    /// Borrow the native collection without finishing the pipeline.
    pub fn native(&self) -> &S::Native
    where
        S: Materializable,
    {
        combinators::collect(&self.seq)
    }

    /// Drain the remaining elements into a `Vec`, for sequences with no native
    /// form of their own.
    pub fn collect_vec(mut self) -> Vec<S::Item> {
        self.drain().collect()
    }

    /// Borrow the sequence as a standard [`Iterator`] over its remaining elements.
    pub fn drain(&mut self) -> Drain<'_, S> {
        Drain {
            seq: &mut self.seq,
        }
    }
}

/// Standard-library [`Iterator`] over what is left of a sequence.
///
/// Each `next` is one `advance`; nothing is rewound when the drain ends.
pub struct Drain<'a, S> {
    seq: &'a mut S,
}

impl<S> Iterator for Drain<'_, S>
where
    S: Iterable,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.advance()
    }
}
