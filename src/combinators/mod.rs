//! The adapter engine.
//!
//! Every combinator is an eager, stateless function over the [`Iterable`]
//! protocol: it drains its source sequences during the call and returns a
//! freshly built sequence (or a summary value). Sources are borrowed mutably
//! because draining moves their cursors.

mod chain;
mod convert;
mod filter;
mod map;
mod search;
mod traverse;
mod zip;

pub use chain::*;
pub use convert::*;
pub use filter::*;
pub use map::*;
pub use search::*;
pub use traverse::*;
pub use zip::*;

pub(crate) use traverse::{rewind, seek, walk};

use crate::{error::fatal, iterable::Iterable};

pub(crate) const TARGET: &str = "iterable::combinators";

/// A fresh, empty sequence of the same kind as `source`.
///
/// Construction failure is a precondition violation and aborts the combinator.
#[track_caller]
pub(crate) fn empty_like<S: Iterable>(source: &S) -> S {
    match source.construct_empty() {
        Ok(empty) => empty,
        Err(err) => fatal(err),
    }
}
