//! Optional capabilities a sequence may provide on top of [`Iterable`].
//!
//! Combinators that cannot work without a capability take it as a trait
//! bound (`every`, `first`, `last` need [`Enumerable`]; `collect` needs
//! [`Materializable`]). Combinators that merely *use* a capability when present
//! (`each`, `count`, `nth` rewind; `into`, `from` clear) discover it through the
//! `as_*` queries on [`Iterable`].

use std::fmt;

use crate::{
    error::{Error, Result},
    iterable::Iterable,
};

/// Traversal that also reports the zero-based position of each element.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut words = Strings::from_strs(&["a", "b"]);
/// assert_eq!(words.advance_indexed(), Some((0, "a".to_string())));
/// assert_eq!(words.advance_indexed(), Some((1, "b".to_string())));
/// assert_eq!(words.advance_indexed(), None);
/// ```
pub trait Enumerable: Iterable {
    /// Like [`Iterable::advance`], paired with the element's index.
    fn advance_indexed(&mut self) -> Option<(usize, Self::Item)>;
}

/// Traversal can restart from the beginning without losing data.
pub trait Rewindable {
    fn rewind(&mut self);
}

/// Data can be discarded, leaving an empty sequence ready for traversal.
pub trait Resettable {
    fn clear(&mut self);
}

/// Exposes the collection backing a sequence.
pub trait Materializable: Iterable {
    type Native;

    /// Borrow the backing collection.
    fn extract_native(&self) -> &Self::Native;

    /// Give up the sequence and hand back its backing collection.
    fn into_native(self) -> Self::Native
    where
        Self: Sized;
}

/// Name of an optional capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Enumerable,
    Rewindable,
    Resettable,
    Materializable,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Enumerable => "enumerable",
            Capability::Rewindable => "rewindable",
            Capability::Resettable => "resettable",
            Capability::Materializable => "materializable",
        };
        f.write_str(name)
    }
}

/// The capabilities a sequence reports at run time.
///
/// `Materializable` is only ever a static bound and is never reported here.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut words = Strings::new();
/// let caps = words.capabilities();
/// assert!(caps.contains(Capability::Rewindable));
/// assert!(caps.require(Capability::Enumerable, "every").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub enumerable: bool,
    pub rewindable: bool,
    pub resettable: bool,
}

impl Capabilities {
    /// Query `seq` for each runtime capability.
    pub fn of<S>(seq: &mut S) -> Self
    where
        S: Iterable + ?Sized,
    {
        Capabilities {
            enumerable: seq.as_enumerable().is_some(),
            rewindable: seq.as_rewindable().is_some(),
            resettable: seq.as_resettable().is_some(),
        }
    }

    pub fn contains(&self, capability: Capability) -> bool {
        match capability {
            Capability::Enumerable => self.enumerable,
            Capability::Rewindable => self.rewindable,
            Capability::Resettable => self.resettable,
            Capability::Materializable => false,
        }
    }

    /// Fail with [`Error::MissingCapability`] unless `capability` is present.
    pub fn require(&self, capability: Capability, operation: &'static str) -> Result<()> {
        if self.contains(capability) {
            Ok(())
        } else {
            Err(Error::MissingCapability {
                capability,
                operation,
            })
        }
    }
}
