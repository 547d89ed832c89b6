use tracing::trace;

use super::{empty_like, TARGET};
use crate::iterable::Iterable;

/// Keep the elements for which `predicate` holds, in order.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut words = Strings::from_strs(&["abc", "bbc", "abd"]);
/// let kept = combinators::filter(&mut words, |w| w.starts_with("ab"));
/// assert_eq!(kept.extract_native(), &["abc", "abd"]);
/// ```
pub fn filter<S, P>(source: &mut S, mut predicate: P) -> S
where
    S: Iterable,
    P: FnMut(&S::Item) -> bool,
{
    let mut out = empty_like(source);
    let (mut seen, mut kept) = (0usize, 0usize);
    while let Some(element) = source.advance() {
        seen += 1;
        if predicate(&element) {
            kept += 1;
            out.append(element);
        }
    }
    trace!(target: TARGET, seen, kept, "filter");
    out
}

/// Keep each element for which `predicate` holds and substitute `default`
/// for the rest. The result has the same length as the source.
pub fn or<S, P>(source: &mut S, mut predicate: P, default: S::Item) -> S
where
    S: Iterable,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut out = empty_like(source);
    let (mut seen, mut replaced) = (0usize, 0usize);
    while let Some(element) = source.advance() {
        seen += 1;
        if predicate(&element) {
            out.append(element);
        } else {
            replaced += 1;
            out.append(default.clone());
        }
    }
    trace!(target: TARGET, seen, replaced, "or");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{capability::Materializable, iterable::testing::OneShot, vector::Strings};

    #[test]
    fn test_filter_keeps_matching_in_order() {
        let mut words = Strings::from_strs(&["abc", "bbc", "abccd", "abcdd"]);
        let kept = filter(&mut words, |w| w.starts_with("ab"));
        assert_eq!(kept.extract_native(), &["abc", "abccd", "abcdd"]);
        assert!(words.cursor().is_exhausted());
    }

    #[test]
    fn test_filter_always_false_is_empty() {
        let mut words = Strings::from_strs(&["a", "b"]);
        assert!(filter(&mut words, |_| false).is_empty());
    }

    #[test]
    fn test_filter_on_one_shot_consumes_source() {
        let mut source = OneShot::new([1, 2, 3, 4]);
        let mut evens = filter(&mut source, |n| n % 2 == 0);
        assert_eq!(source.remaining(), 0);
        assert_eq!(evens.advance(), Some(2));
        assert_eq!(evens.advance(), Some(4));
        assert_eq!(evens.advance(), None);
    }

    #[test]
    fn test_or_substitutes_default() {
        let mut words = Strings::from_strs(&["abc", "abccd", "abcdd"]);
        let out = or(&mut words, |w| w != "abcdd", "abcde".to_string());
        assert_eq!(out.extract_native(), &["abc", "abccd", "abcde"]);
    }

    #[test]
    fn test_or_preserves_length() {
        let mut words = Strings::from_strs(&["x", "y", "z"]);
        let out = or(&mut words, |_| false, String::new());
        assert_eq!(out.len(), 3);
        assert!(out.extract_native().iter().all(String::is_empty));
    }
}
