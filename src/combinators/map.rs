use tracing::trace;

use super::{empty_like, TARGET};
use crate::{capability::Enumerable, iterable::Iterable};

/// Replace every element with `transform(element)`, in order.
///
/// The transform runs for every element before `map` returns.
pub fn map<S, F>(source: &mut S, mut transform: F) -> S
where
    S: Iterable,
    F: FnMut(S::Item) -> S::Item,
{
    let mut out = empty_like(source);
    let mut seen = 0usize;
    while let Some(element) = source.advance() {
        seen += 1;
        out.append(transform(element));
    }
    trace!(target: TARGET, seen, "map");
    out
}

/// Like [`map`], but the transform also receives each element's index.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut words = Strings::from_strs(&["a", "b"]);
/// let out = combinators::every(&mut words, |i, w| format!("{i}: {w}"));
/// assert_eq!(out.extract_native(), &["0: a", "1: b"]);
/// ```
pub fn every<S, F>(source: &mut S, mut transform: F) -> S
where
    S: Enumerable,
    F: FnMut(usize, S::Item) -> S::Item,
{
    let mut out = empty_like(source);
    let mut seen = 0usize;
    while let Some((index, element)) = source.advance_indexed() {
        seen += 1;
        out.append(transform(index, element));
    }
    trace!(target: TARGET, seen, "every");
    out
}
