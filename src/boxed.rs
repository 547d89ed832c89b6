//! Type-erased sequences.
//!
//! A [`Boxed<T>`] lets the concrete container be chosen at run time. Optional
//! capabilities are still discovered through the `as_*` queries, and
//! [`Enumerable`] is checked when it is used: enumerating a boxed sequence
//! whose inner container cannot enumerate is a contract violation and panics.
//!
//! ```rust
//! use iterable::prelude::*;
//!
//! let seq: Boxed<String> = Strings::from_strs(&["a", "b"]).boxed();
//! let out = Iter::new(seq).every(|i, s| format!("{i}{s}")).collect_vec();
//! assert_eq!(out, vec!["0a", "1b"]);
//! ```

use crate::{
    capability::{Capability, Enumerable, Resettable, Rewindable},
    error::{fatal, Result},
    iterable::Iterable,
};

/// Object-safe view of [`Iterable`], implemented for every `'static` sequence.
pub trait DynIterable {
    type Item;

    fn construct_boxed(&self) -> Result<Boxed<Self::Item>>;

    fn append(&mut self, element: Self::Item);

    fn advance(&mut self) -> Option<Self::Item>;

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = Self::Item>>;

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable>;

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable>;
}

/// A sequence whose container type is only known at run time.
pub type Boxed<T> = Box<dyn DynIterable<Item = T>>;

impl<S> DynIterable for S
where
    S: Iterable + 'static,
{
    type Item = S::Item;

    fn construct_boxed(&self) -> Result<Boxed<S::Item>> {
        Ok(Box::new(Iterable::construct_empty(self)?))
    }

    fn append(&mut self, element: S::Item) {
        Iterable::append(self, element)
    }

    fn advance(&mut self) -> Option<S::Item> {
        Iterable::advance(self)
    }

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = S::Item>> {
        Iterable::as_enumerable(self)
    }

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
        Iterable::as_rewindable(self)
    }

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
        Iterable::as_resettable(self)
    }
}

impl<T> Iterable for Boxed<T> {
    type Item = T;

    fn construct_empty(&self) -> Result<Self> {
        (**self).construct_boxed()
    }

    fn append(&mut self, element: T) {
        (**self).append(element)
    }

    fn advance(&mut self) -> Option<T> {
        (**self).advance()
    }

    fn as_enumerable(&mut self) -> Option<&mut dyn Enumerable<Item = T>> {
        (**self).as_enumerable()
    }

    fn as_rewindable(&mut self) -> Option<&mut dyn Rewindable> {
        (**self).as_rewindable()
    }

    fn as_resettable(&mut self) -> Option<&mut dyn Resettable> {
        (**self).as_resettable()
    }
}

impl<T> Enumerable for Boxed<T> {
    fn advance_indexed(&mut self) -> Option<(usize, T)> {
        if let Err(err) = self
            .capabilities()
            .require(Capability::Enumerable, "advance_indexed")
        {
            fatal(err)
        }
        (**self).as_enumerable()?.advance_indexed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        iterable::testing::{Ints, OneShot},
        vector::Strings,
    };

    #[test]
    fn test_boxed_keeps_capabilities_of_inner() {
        let mut seq = Strings::from_strs(&["a"]).boxed();
        let caps = seq.capabilities();
        assert!(caps.enumerable && caps.rewindable && caps.resettable);

        let mut ints = Ints::new().boxed();
        let caps = ints.capabilities();
        assert!(!caps.enumerable && caps.rewindable && caps.resettable);
    }

    #[test]
    fn test_boxed_construct_empty_builds_same_container() {
        let seq = Strings::from_strs(&["a"]).boxed();
        let mut fresh = Iterable::construct_empty(&seq).unwrap();
        assert_eq!(Iterable::advance(&mut fresh), None);
        assert!(fresh.capabilities().enumerable);
    }

    #[test]
    fn test_boxed_enumerates_through_inner() {
        let mut seq = Strings::from_strs(&["a", "b"]).boxed();
        assert_eq!(seq.advance_indexed(), Some((0, "a".to_string())));
        assert_eq!(seq.advance_indexed(), Some((1, "b".to_string())));
        assert_eq!(seq.advance_indexed(), None);
    }

    #[test]
    fn test_boxed_enumeration_check_names_operation() {
        let mut seq = Ints::new().boxed();
        let err = seq
            .capabilities()
            .require(Capability::Enumerable, "advance_indexed")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "`advance_indexed` requires the enumerable capability"
        );
    }

    #[test]
    #[should_panic(expected = "`advance_indexed` requires the enumerable capability")]
    fn test_boxed_enumerate_without_capability_panics() {
        let mut seq = OneShot::new([1, 2, 3]).boxed();
        seq.advance_indexed();
    }
}
