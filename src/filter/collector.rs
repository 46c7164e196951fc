//! Filter-then-collect descriptors.

use std::fmt;

/// A predicate paired with a supplier of the collection to accumulate into.
///
/// The pair is a reusable unit meaning "keep what matches, gather it into
/// this kind of collection". Any `Extend` target works: `Vec`, `HashSet`,
/// `BTreeSet`, `String`, and so on.
///
/// # Type Parameters
///
/// * `P` - The predicate type
/// * `S` - The supplier of an empty target collection
///
/// # Examples
///
/// ```rust
/// use fnkit::filter::{FilterCollector, filter_collect};
///
/// let vowels = FilterCollector::new(|c: &char| "aeiou".contains(*c), String::new);
/// assert_eq!(filter_collect(Some("functional".chars()), &vowels), "uioa");
/// ```
#[derive(Clone)]
pub struct FilterCollector<P, S> {
    predicate: P,
    supplier: S,
}

impl<P, S> FilterCollector<P, S> {
    /// Pairs `predicate` with a `supplier` of empty target collections.
    #[inline]
    pub const fn new(predicate: P, supplier: S) -> Self {
        Self {
            predicate,
            supplier,
        }
    }
}

impl<P, T> FilterCollector<P, fn() -> Vec<T>> {
    /// Shortcut for a collector that gathers into a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::filter::{FilterCollector, filter_collect};
    ///
    /// let short = FilterCollector::into_vec(|word: &&str| word.len() < 3);
    /// assert_eq!(filter_collect(Some(["a", "abc", "ab"]), &short), vec!["a", "ab"]);
    /// ```
    #[inline]
    pub fn into_vec(predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        Self::new(predicate, Vec::new)
    }
}

impl<P, S> fmt::Debug for FilterCollector<P, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterCollector")
            .field("predicate", &"<fn>")
            .field("supplier", &"<fn>")
            .finish()
    }
}

/// Filters `sequence` with the collector's predicate and accumulates the
/// survivors into a fresh collection from its supplier.
///
/// `None` yields the supplier's empty collection.
pub fn filter_collect<I, P, S, A>(sequence: Option<I>, collector: &FilterCollector<P, S>) -> A
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool,
    S: Fn() -> A,
    A: Extend<I::Item>,
{
    let mut target = (collector.supplier)();
    if let Some(sequence) = sequence {
        target.extend(
            sequence
                .into_iter()
                .filter(|element| (collector.predicate)(element)),
        );
    }
    target
}
