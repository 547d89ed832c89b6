use tracing::trace;

use super::{empty_like, TARGET};
use crate::iterable::Iterable;

/// Drain `source` then `other` into one new sequence of `source`'s kind.
///
/// `other` may be any container holding the same element type.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut head = Strings::from_strs(&["a", "b"]);
/// let mut tail = Strings::from_strs(&["c"]);
/// let all = combinators::chain(&mut head, &mut tail);
/// assert_eq!(all.extract_native(), &["a", "b", "c"]);
/// ```
pub fn chain<S, O>(source: &mut S, other: &mut O) -> S
where
    S: Iterable,
    O: Iterable<Item = S::Item>,
{
    let mut out = empty_like(source);
    let mut left = 0usize;
    while let Some(element) = source.advance() {
        left += 1;
        out.append(element);
    }
    let mut right = 0usize;
    while let Some(element) = other.advance() {
        right += 1;
        out.append(element);
    }
    trace!(target: TARGET, left, right, "chain");
    out
}
