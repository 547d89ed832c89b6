//! Combinators that walk a sequence for side effects or position.
//!
//! `each`, `count` and `nth` rewind a [`Rewindable`](crate::Rewindable)
//! source when they finish, so the same sequence can be walked again. `count`
//! and `nth` also rewind before they start. Any other source is walked from its
//! cursor and left consumed.

use tracing::trace;

use super::TARGET;
use crate::iterable::Iterable;

/// Call `action` on every element in order, then rewind if possible.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut words = Strings::from_strs(&["a", "b"]);
/// let mut seen = String::new();
/// combinators::each(&mut words, |w| seen.push_str(&w));
/// combinators::each(&mut words, |w| seen.push_str(&w));
/// assert_eq!(seen, "abab");
/// ```
pub fn each<S, F>(source: &mut S, mut action: F)
where
    S: Iterable,
    F: FnMut(S::Item),
{
    let mut seen = 0usize;
    while let Some(element) = source.advance() {
        seen += 1;
        action(element);
    }
    let rewound = rewind(source);
    trace!(target: TARGET, seen, rewound, "each");
}

/// Number of elements in `source`.
///
/// A rewindable source is rewound before and after counting, so the result is
/// its full length wherever the cursor was. Any other source is counted from
/// its cursor and left consumed.
pub fn count<S>(source: &mut S) -> usize
where
    S: Iterable,
{
    let rewound = rewind(source);
    let mut counted = 0usize;
    while source.advance().is_some() {
        counted += 1;
    }
    rewind(source);
    trace!(target: TARGET, counted, rewound, "count");
    counted
}

/// Advance up to `n` times.
///
/// Returns the index of the last element visited (`0` when none was) and
/// whether the final advance still produced an element. The second value is
/// `false` as soon as the sequence runs out, and for `n == 0`.
///
/// An enumerable source reports its own index, so successive calls continue
/// where the previous one stopped. For any other source the index is only an
/// offset within this call; [`Iter::advance_by`](crate::Iter::advance_by)
/// keeps the running position for those.
///
/// ```rust
/// use iterable::prelude::*;
///
/// let mut words = Strings::from_strs(&["a", "b", "c", "d"]);
/// assert_eq!(combinators::advance_by(&mut words, 2), (1, true));
/// assert_eq!(combinators::advance_by(&mut words, 1), (2, true));
/// assert_eq!(combinators::advance_by(&mut Strings::new(), 3), (0, false));
/// ```
pub fn advance_by<S>(source: &mut S, n: usize) -> (usize, bool)
where
    S: Iterable,
{
    let walk = walk(source, n);
    let index = walk
        .last_index
        .unwrap_or_else(|| walk.steps.saturating_sub(1));
    (index, walk.more)
}

/// The element at position `n`, rewinding afterwards if possible.
///
/// A rewindable source is rewound first, so `n` is counted from its first
/// element. Any other source is counted from its cursor. `None` when the
/// sequence is shorter.
pub fn nth<S>(source: &mut S, n: usize) -> Option<S::Item>
where
    S: Iterable,
{
    rewind(source);
    let (found, consumed) = seek(source, n);
    let rewound = rewind(source);
    trace!(target: TARGET, n, consumed, rewound, "nth");
    found
}

/// Outcome of advancing a sequence up to `n` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Walk {
    /// Advances that produced an element
    pub steps: usize,
    /// Index of the last element visited, when the source enumerates
    pub last_index: Option<usize>,
    /// Whether the last advance produced an element
    pub more: bool,
}

/// Advance up to `n` times, through `advance_indexed` when the source offers it.
pub(crate) fn walk<S>(source: &mut S, n: usize) -> Walk
where
    S: Iterable + ?Sized,
{
    let Some(enumerable) = source.as_enumerable() else {
        let (steps, more) = step_over(source, n);
        return Walk {
            steps,
            last_index: None,
            more,
        };
    };
    let mut walk = Walk {
        steps: 0,
        last_index: None,
        more: false,
    };
    for _ in 0..n {
        match enumerable.advance_indexed() {
            Some((index, _)) => {
                walk.steps += 1;
                walk.last_index = Some(index);
                walk.more = true;
            }
            None => {
                walk.more = false;
                break;
            }
        }
    }
    walk
}

/// Rewind `source` if it supports it; reports whether it did.
pub(crate) fn rewind<S>(source: &mut S) -> bool
where
    S: Iterable + ?Sized,
{
    match source.as_rewindable() {
        Some(rewindable) => {
            rewindable.rewind();
            true
        }
        None => false,
    }
}

/// Advance up to `n` times; returns how many advances produced an element and
/// whether the last one did.
pub(crate) fn step_over<S>(source: &mut S, n: usize) -> (usize, bool)
where
    S: Iterable + ?Sized,
{
    let mut steps = 0usize;
    let mut more = false;
    for _ in 0..n {
        more = source.advance().is_some();
        if !more {
            break;
        }
        steps += 1;
    }
    (steps, more)
}

/// Skip `n` elements and take the next one, without rewinding. Also returns how
/// many elements were consumed.
pub(crate) fn seek<S>(source: &mut S, n: usize) -> (Option<S::Item>, usize)
where
    S: Iterable + ?Sized,
{
    let (steps, _) = step_over(source, n);
    if steps < n {
        return (None, steps);
    }
    match source.advance() {
        Some(element) => (Some(element), steps + 1),
        None => (None, steps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        capability::Rewindable,
        iterable::testing::{Ints, OneShot},
        vector::Strings,
    };

    #[test]
    fn test_each_leaves_one_shot_consumed() {
        let mut source = OneShot::new([1, 2, 3]);
        let mut total = 0;
        each(&mut source, |n| total += n);
        assert_eq!(total, 6);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_each_rewinds_reference_container() {
        let mut words = Strings::from_strs(&["a"]);
        each(&mut words, |_| {});
        assert!(words.cursor().is_ready());
    }

    #[test]
    fn test_count_is_repeatable_when_rewindable() {
        let mut words = Strings::from_strs(&["a", "b", "c"]);
        assert_eq!(count(&mut words), 3);
        assert_eq!(count(&mut words), 3);

        let mut ints = Ints::new();
        ints.append(1);
        assert_eq!(count(&mut ints), 1);
        assert_eq!(count(&mut ints), 1);
    }

    #[test]
    fn test_count_consumes_one_shot() {
        let mut source = OneShot::new(["x", "y"]);
        assert_eq!(count(&mut source), 2);
        assert_eq!(count(&mut source), 0);
    }

    #[test]
    fn test_advance_by_on_empty_sequence() {
        for n in 1..4 {
            assert_eq!(advance_by(&mut Strings::new(), n), (0, false));
        }
    }

    #[test]
    fn test_advance_by_past_the_end() {
        let mut words = Strings::from_strs(&["a", "b"]);
        assert_eq!(advance_by(&mut words, 5), (1, false));
    }

    #[test]
    fn test_advance_by_zero_moves_nothing() {
        let mut words = Strings::from_strs(&["a"]);
        assert_eq!(advance_by(&mut words, 0), (0, false));
        assert!(words.cursor().is_ready());
    }

    #[test]
    fn test_nth_returns_element_and_rewinds() {
        let mut words = Strings::from_strs(&["a", "b", "c"]);
        assert_eq!(nth(&mut words, 2).as_deref(), Some("c"));
        assert_eq!(nth(&mut words, 0).as_deref(), Some("a"));
        assert_eq!(nth(&mut words, 3), None);
    }

    #[test]
    fn test_count_is_full_length_mid_sequence() {
        let mut words = Strings::from_strs(&["a", "b", "c", "d"]);
        words.advance();
        words.advance();
        assert_eq!(count(&mut words), 4);
        assert_eq!(count(&mut words), 4);
    }

    #[test]
    fn test_advance_by_continues_on_enumerable() {
        let mut words = Strings::from_strs(&["a", "b", "c", "d"]);
        assert_eq!(advance_by(&mut words, 2), (1, true));
        assert_eq!(advance_by(&mut words, 1), (2, true));
        assert_eq!(advance_by(&mut words, 3), (3, false));
    }

    #[test]
    fn test_advance_by_is_call_relative_without_enumerable() {
        let mut ints = Ints::new();
        for n in [1, 2, 3] {
            ints.append(n);
        }
        assert_eq!(advance_by(&mut ints, 2), (1, true));
        assert_eq!(advance_by(&mut ints, 1), (0, true));
    }

    #[test]
    fn test_walk_reports_index_and_steps() {
        let mut words = Strings::from_strs(&["a", "b"]);
        words.advance();
        assert_eq!(
            walk(&mut words, 5),
            Walk {
                steps: 1,
                last_index: Some(1),
                more: false,
            }
        );
    }

    #[test]
    fn test_nth_counts_from_start_after_advance() {
        let mut words = Strings::from_strs(&["a", "b", "c"]);
        words.advance();
        assert_eq!(nth(&mut words, 0).as_deref(), Some("a"));
        assert!(words.cursor().is_ready());
    }

    #[test]
    fn test_nth_on_one_shot_is_relative_to_cursor() {
        let mut source = OneShot::new([10, 11, 12, 13]);
        assert_eq!(nth(&mut source, 1), Some(11));
        assert_eq!(nth(&mut source, 1), Some(13));
        assert_eq!(nth(&mut source, 0), None);
    }

    #[test]
    fn test_seek_reports_consumed() {
        let mut words = Strings::from_strs(&["a", "b"]);
        assert_eq!(seek(&mut words, 1), (Some("b".to_string()), 2));
        words.rewind();
        assert_eq!(seek(&mut words, 4), (None, 2));
    }
}
