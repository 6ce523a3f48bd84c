//! Lazy sequence helpers.

use crate::Pair;

/// Pair each element of `iterable` with its zero-based index.
///
/// The iterator is lazy: elements are pulled from `iterable` only as the
/// result is consumed.
///
/// ```
/// use pebbles::{zip_with_index, Pair};
///
/// let indexed: Vec<_> = zip_with_index(["a", "b", "c"]).collect();
/// assert_eq!(indexed, vec![Pair::new("a", 0), Pair::new("b", 1), Pair::new("c", 2)]);
/// ```
pub fn zip_with_index<I>(iterable: I) -> impl Iterator<Item = Pair<I::Item, usize>>
where
    I: IntoIterator,
{
    iterable
        .into_iter()
        .enumerate()
        .map(|(index, item)| Pair::new(item, index))
}
