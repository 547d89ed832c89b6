//! Conversions between sequences of different element types.
//!
//! A converter returns `None` for an element it cannot translate; that element
//! is skipped without failing the conversion.

use tracing::trace;

use super::{empty_like, TARGET};
use crate::{capability::Materializable, iterable::Iterable};

/// Drain `source` into `target`, converting each element on the way.
///
/// A resettable `target` is cleared first; otherwise elements are appended
/// after whatever it already holds.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut text = Strings::from_strs(&["1", "x", "3"]);
/// let numbers = combinators::into(&mut text, Vector::<i32>::new(), |s| s.parse().ok());
/// assert_eq!(numbers.extract_native(), &[1, 3]);
/// ```
pub fn into<S, D, F>(source: &mut S, mut target: D, convert: F) -> D
where
    S: Iterable,
    D: Iterable,
    F: FnMut(S::Item) -> Option<D::Item>,
{
    if let Some(resettable) = target.as_resettable() {
        resettable.clear();
    }
    drain_converted(source, &mut target, convert, "into");
    target
}

/// Refill `this` from `other`, converting each element on the way.
///
/// A resettable `this` is cleared and reused as the destination; otherwise a
/// fresh empty sequence of the same kind receives the elements and `this` is
/// dropped.
pub fn from<O, S, F>(other: &mut O, mut this: S, convert: F) -> S
where
    O: Iterable,
    S: Iterable,
    F: FnMut(O::Item) -> Option<S::Item>,
{
    let reused = match this.as_resettable() {
        Some(resettable) => {
            resettable.clear();
            true
        }
        None => false,
    };
    let mut dest = if reused { this } else { empty_like(&this) };
    drain_converted(other, &mut dest, convert, "from");
    dest
}

/// Borrow the collection backing `source`.
///
/// Nothing is consumed: whichever combinator built `source` already drained
/// its own inputs.
pub fn collect<S>(source: &S) -> &S::Native
where
    S: Materializable,
{
    source.extract_native()
}

fn drain_converted<S, D, F>(source: &mut S, dest: &mut D, mut convert: F, op: &'static str)
where
    S: Iterable,
    D: Iterable,
    F: FnMut(S::Item) -> Option<D::Item>,
{
    let (mut seen, mut skipped) = (0usize, 0usize);
    while let Some(element) = source.advance() {
        seen += 1;
        match convert(element) {
            Some(converted) => dest.append(converted),
            None => skipped += 1,
        }
    }
    trace!(target: TARGET, op, seen, skipped, "convert");
}
