use std::fmt;

/// Two values produced side by side by [`zip`](crate::combinators::zip).
///
/// A `Pair` is immutable once built; read it through [`Pair::first`] and
/// [`Pair::second`] or take it apart with [`Pair::into_parts`].
///
/// ```rust
/// use iterable::Pair;
///
/// let pair = Pair::new("a", 10);
/// assert_eq!(*pair.first(), "a");
/// assert_eq!(*pair.second(), 10);
/// assert_eq!(pair.to_string(), "{a, 10}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub const fn first(&self) -> &A {
        &self.first
    }

    pub const fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_parts()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_tuple_conversions() {
        let pair: Pair<&str, i32> = ("b", 20).into();
        assert_eq!(pair, Pair::new("b", 20));
        let (first, second): (&str, i32) = pair.into();
        assert_eq!((first, second), ("b", 20));
    }

    #[test]
    fn test_pair_holds_heterogeneous_types() {
        let pair = Pair::new(String::from("key"), vec![1u8, 2]);
        let (key, bytes) = pair.into_parts();
        assert_eq!(key, "key");
        assert_eq!(bytes, vec![1, 2]);
    }
}
