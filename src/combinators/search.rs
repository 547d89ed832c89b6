use tracing::trace;

use super::TARGET;
use crate::capability::Enumerable;

/// The first element satisfying `predicate`, with its index.
///
/// Stops at the match; the source is not rewound.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut mixed = Strings::from_strs(&["a", "1", "b", "2"]);
/// let is_numeric = |s: &String| s.chars().all(|c| c.is_ascii_digit());
/// assert_eq!(combinators::first(&mut mixed, is_numeric), Some((1, "1".to_string())));
/// ```
pub fn first<S, P>(source: &mut S, mut predicate: P) -> Option<(usize, S::Item)>
where
    S: Enumerable,
    P: FnMut(&S::Item) -> bool,
{
    while let Some((index, element)) = source.advance_indexed() {
        if predicate(&element) {
            trace!(target: TARGET, index, "first");
            return Some((index, element));
        }
    }
    trace!(target: TARGET, "first: no match");
    None
}

/// The last element satisfying `predicate`, with its index.
///
/// Always drains the whole source; the source is not rewound.
pub fn last<S, P>(source: &mut S, mut predicate: P) -> Option<(usize, S::Item)>
where
    S: Enumerable,
    P: FnMut(&S::Item) -> bool,
{
    let mut found = None;
    while let Some((index, element)) = source.advance_indexed() {
        if predicate(&element) {
            found = Some((index, element));
        }
    }
    trace!(target: TARGET, index = ?found.as_ref().map(|(i, _)| *i), "last");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iterable::Iterable, vector::Strings};

    fn is_numeric(s: &String) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_first_and_last_find_numeric() {
        let mut mixed = Strings::from_strs(&["a", "1", "b", "2"]);
        assert_eq!(first(&mut mixed, is_numeric), Some((1, "1".to_string())));

        let mut mixed = Strings::from_strs(&["a", "1", "b", "2"]);
        assert_eq!(last(&mut mixed, is_numeric), Some((3, "2".to_string())));
    }

    #[test]
    fn test_first_stops_at_match() {
        let mut mixed = Strings::from_strs(&["1", "2"]);
        first(&mut mixed, is_numeric);
        assert_eq!(mixed.advance().as_deref(), Some("2"));
    }

    #[test]
    fn test_last_drains_source() {
        let mut mixed = Strings::from_strs(&["1", "x"]);
        last(&mut mixed, is_numeric);
        assert!(mixed.cursor().is_exhausted());
    }

    #[test]
    fn test_search_not_found() {
        assert_eq!(first(&mut Strings::new(), is_numeric), None);
        assert_eq!(last(&mut Strings::new(), is_numeric), None);
        let mut letters = Strings::from_strs(&["a", "b"]);
        assert_eq!(first(&mut letters, is_numeric), None);
        let mut letters = Strings::from_strs(&["a", "b"]);
        assert_eq!(last(&mut letters, is_numeric), None);
    }
}
