/// Traversal position of a sequence.
///
/// A fresh or rewound sequence is `Ready`. Each `advance` moves the cursor one
/// element forward until it passes the last element and becomes `Exhausted`.
///
/// # Examples
///
/// ```rust
/// use iterable::Cursor;
///
/// let cursor = Cursor::Ready.step(2);
/// assert_eq!(cursor, Cursor::Iterating(0));
/// assert_eq!(cursor.step(2).step(2), Cursor::Exhausted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Positioned before the first element
    #[default]
    Ready,
    /// Positioned on the element at this index
    Iterating(usize),
    /// Every element has been visited
    Exhausted,
}

impl Cursor {
    /// Returns `true` if the cursor is before the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterable::Cursor;
    ///
    /// assert!(Cursor::Ready.is_ready());
    /// assert!(!Cursor::Iterating(0).is_ready());
    /// ```
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Cursor::Ready)
    }

    /// Returns `true` if the cursor sits on an element.
    #[inline]
    pub const fn is_iterating(&self) -> bool {
        matches!(self, Cursor::Iterating(_))
    }

    /// Returns `true` if no element is left to visit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterable::Cursor;
    ///
    /// assert!(Cursor::Ready.step(0).is_exhausted());
    /// ```
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Cursor::Exhausted)
    }

    /// Index of the element the cursor sits on, if any.
    #[inline]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Cursor::Iterating(i) => Some(*i),
            Cursor::Ready | Cursor::Exhausted => None,
        }
    }

    /// Moves one element forward over a sequence holding `len` elements.
    ///
    /// `Exhausted` is terminal: only [`Cursor::rewind`] leaves it.
    #[inline]
    #[must_use]
    pub const fn step(self, len: usize) -> Cursor {
        let next = match self {
            Cursor::Ready => 0,
            Cursor::Iterating(i) => i + 1,
            Cursor::Exhausted => return Cursor::Exhausted,
        };
        if next < len {
            Cursor::Iterating(next)
        } else {
            Cursor::Exhausted
        }
    }

    /// Moves the cursor back before the first element.
    #[inline]
    pub fn rewind(&mut self) {
        *self = Cursor::Ready;
    }
}
