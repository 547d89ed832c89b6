//! # Iterable: Capability-Based Sequence Adapters
//!
//! Traverse, transform and recombine ordered collections without committing to
//! one container type. Any container that implements the small [`Iterable`]
//! protocol can be filtered, mapped, chained, zipped and converted into any
//! other container.
//!
//! ## Core Traits
//!
//! - **[`Iterable`]**: append elements, hand them out in insertion order
//! - **[`Enumerable`]**: also report each element's index
//! - **[`Rewindable`]**: restart traversal without losing data
//! - **[`Resettable`]**: discard all data
//! - **[`Materializable`]**: expose the backing collection
//!
//! ## Key Features
//!
//! - **Eager**: every combinator drains its inputs before returning
//! - **Owned**: [`Iter`] consumes itself on each transforming call
//! - **Negotiated**: combinators that need a capability require it in their
//!   bounds; those that can use one discover it at run time
//!
//! ## Example
//!
//! ```
//! use iterable::prelude::*;
//!
//! let mut it = Iter::new(Strings::from_strs(&["a", "1", "b", "2"]));
//! let is_numeric = |s: &String| s.parse::<u32>().is_ok();
//! assert_eq!(it.first(is_numeric), Some((1, "1".to_string())));
//!
//! let numbers = Iter::new(Strings::from_strs(&["1", "2", "3"]))
//!     .into(Vector::<u32>::new(), |s| s.parse().ok())
//!     .collect();
//! assert_eq!(numbers, vec![1, 2, 3]);
//! ```
//!
//! ## Combinators
//!
//! **Transforming** (return a new [`Iter`]):
//! - [`filter`](Iter::filter), [`map`](Iter::map), [`every`](Iter::every), [`or`](Iter::or)
//! - [`chain`](Iter::chain), [`zip`](Iter::zip)
//! - [`into`](Iter::into), [`from`](Iter::from)
//!
//! **Walking** (leave the sequence in place):
//! - [`each`](Iter::each), [`count`](Iter::count), [`advance_by`](Iter::advance_by), [`nth`](Iter::nth)
//! - [`first`](Iter::first), [`last`](Iter::last)
//!
//! **Terminal**: [`collect`](Iter::collect)
//!
//! A sequence is owned by one caller at a time and is not synchronized; share
//! it across threads only by moving it.

pub mod boxed;
mod capability;
pub mod combinators;
mod cursor;
mod error;
mod iter;
mod iterable;
mod pair;
pub mod prelude;
mod vector;

pub use boxed::Boxed;
pub use capability::*;
pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use iterable::*;
pub use pair::*;
pub use vector::*;
