use tracing::trace;

use super::TARGET;
use crate::{
    iterable::Iterable,
    pair::Pair,
    vector::{Pairs, Vector},
};

/// Walk `source` and `other` in lock-step, pairing their elements.
///
/// Both sides are advanced on every step, and the walk stops on the first step
/// where either side runs out, so the result is as long as the shorter input.
/// The element the longer side yielded on that final step is dropped.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut letters = Strings::from_strs(&["a", "b", "c"]);
/// let mut numbers: Vector<i32> = vec![10, 20].into();
/// let pairs = combinators::zip(&mut letters, &mut numbers);
/// assert_eq!(
///     pairs.extract_native(),
///     &[Pair::new("a".to_string(), 10), Pair::new("b".to_string(), 20)]
/// );
/// ```
pub fn zip<S, O>(source: &mut S, other: &mut O) -> Pairs<S::Item, O::Item>
where
    S: Iterable,
    O: Iterable,
{
    let mut out = Vector::new();
    loop {
        match (source.advance(), other.advance()) {
            (Some(first), Some(second)) => out.push(Pair::new(first, second)),
            _ => break,
        }
    }
    trace!(target: TARGET, paired = out.len(), "zip");
    out
}
