//! Position-tagged elements and index-of-first-match.
//!
//! An element's original position is lost once a sequence is filtered, so
//! the position is captured first: each element is paired with its index in a
//! forward pass, the predicate is applied to the element half of the pair,
//! and the index of the first survivor is extracted.

/// Sentinel returned by [`index_of_first`] when nothing matches.
pub const NOT_FOUND: isize = -1;

/// An element paired with its zero-based position in the source sequence.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::{Indexed, indexed};
///
/// let pairs: Vec<_> = indexed(["a", "b"]).collect();
/// assert_eq!(pairs, vec![Indexed::new(0, "a"), Indexed::new(1, "b")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indexed<T> {
    /// Position in the source sequence.
    pub index: usize,
    /// The element itself.
    pub value: T,
}

impl<T> Indexed<T> {
    /// Pairs `value` with `index`.
    #[inline]
    pub const fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    /// Transforms the element, keeping its position.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, function: F) -> Indexed<U> {
        Indexed::new(self.index, function(self.value))
    }

    /// Splits the pair into `(index, value)`.
    #[inline]
    pub fn into_pair(self) -> (usize, T) {
        (self.index, self.value)
    }
}

/// Tags every element of `iterable` with its position.
pub fn indexed<I: IntoIterator>(iterable: I) -> impl Iterator<Item = Indexed<I::Item>> {
    iterable
        .into_iter()
        .enumerate()
        .map(|(index, value)| Indexed::new(index, value))
}

/// Returns the position of the first element satisfying `predicate`.
///
/// `None` and empty sequences return `None` without calling the predicate.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::position_of_first;
///
/// assert_eq!(position_of_first(Some(vec![10, 20, 30]), |value: &i32| *value > 15), Some(1));
/// assert_eq!(position_of_first(Some(vec![10, 20, 30]), |value: &i32| *value > 100), None);
/// ```
pub fn position_of_first<I, P>(sequence: Option<I>, mut predicate: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    indexed(sequence?)
        .find(|pair| predicate(&pair.value))
        .map(|pair| pair.index)
}

/// Returns the position of the first element satisfying `predicate`, or
/// [`NOT_FOUND`].
///
/// # Examples
///
/// ```rust
/// use fnkit::find::{NOT_FOUND, index_of_first};
///
/// assert_eq!(index_of_first(Some(vec![10, 20, 30]), |value: &i32| *value > 15), 1);
/// assert_eq!(index_of_first(Some(vec![10, 20, 30]), |value: &i32| *value > 100), NOT_FOUND);
/// assert_eq!(index_of_first(None::<Vec<i32>>, |_: &i32| true), NOT_FOUND);
/// ```
pub fn index_of_first<I, P>(sequence: Option<I>, predicate: P) -> isize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    position_of_first(sequence, predicate)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(NOT_FOUND)
}

/// [`index_of_first`] over a contiguous buffer.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::index_of_first_in;
///
/// let readings = [3_i64, 9, 27];
/// assert_eq!(index_of_first_in(Some(&readings[..]), |value: &i64| *value > 5), 1);
/// ```
pub fn index_of_first_in<T, P>(buffer: Option<&[T]>, mut predicate: P) -> isize
where
    P: FnMut(&T) -> bool,
{
    index_of_first(buffer, |element: &&T| predicate(*element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_index_of_first_skips_predicate_for_empty_input() {
        let calls = Cell::new(0);
        let result = index_of_first(Some(Vec::<i32>::new()), |_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(result, NOT_FOUND);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_index_of_first_reports_first_of_duplicates() {
        assert_eq!(
            index_of_first(Some([5, 7, 7, 7]), |value: &i32| *value == 7),
            1
        );
    }

    #[rstest]
    fn test_indexed_map_keeps_position() {
        let pair = Indexed::new(3, "abc").map(str::len);
        assert_eq!(pair.into_pair(), (3, 3));
    }
}
