//! Immutable ordered pair.

use std::fmt;

/// Two values kept together, compared and hashed field by field.
///
/// ```
/// use pebbles::Pair;
///
/// let pair = Pair::new(1, "Foo");
/// assert_eq!(pair.to_string(), "(1, Foo)");
/// assert_eq!(pair.flat_map(|n, s| Pair::new(s, n)), Pair::new("Foo", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<L, R> {
    left: L,
    right: R,
}

impl<L, R> Pair<L, R> {
    /// Pair `left` with `right`.
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// The first value.
    #[must_use]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// The second value.
    #[must_use]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Split the pair into a tuple.
    #[must_use]
    pub fn into_inner(self) -> (L, R) {
        (self.left, self.right)
    }

    /// Transform each side independently.
    #[must_use]
    pub fn map<A, B>(self, on_left: impl FnOnce(L) -> A, on_right: impl FnOnce(R) -> B) -> Pair<A, B> {
        Pair::new(on_left(self.left), on_right(self.right))
    }

    /// Build a new pair from both values.
    #[must_use]
    pub fn flat_map<A, B>(self, f: impl FnOnce(L, R) -> Pair<A, B>) -> Pair<A, B> {
        f(self.left, self.right)
    }

    /// Combine both values into one.
    pub fn transform<A>(self, f: impl FnOnce(L, R) -> A) -> A {
        f(self.left, self.right)
    }

    /// Hand each value to its consumer, left first.
    pub fn for_each(self, on_left: impl FnOnce(L), on_right: impl FnOnce(R)) {
        on_left(self.left);
        on_right(self.right);
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_inner()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Pair<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
