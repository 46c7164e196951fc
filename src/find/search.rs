//! Sequential find-with-default queries.

use super::FindDescriptor;

/// Returns the first element, in iteration order, that satisfies the
/// descriptor's predicate, or the descriptor's default.
///
/// `None` and empty sequences return the default. The default supplier, if
/// any, is called only when nothing matches. Predicate panics propagate.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::{FindDescriptor, find_first};
///
/// let descriptor = FindDescriptor::with_default(|value: &i32| *value > 15, 0);
/// assert_eq!(find_first(Some(vec![10, 20, 30]), &descriptor), 20);
/// assert_eq!(find_first(Some(Vec::new()), &descriptor), 0);
/// assert_eq!(find_first(None::<Vec<i32>>, &descriptor), 0);
/// ```
pub fn find_first<I, P, D>(
    sequence: Option<I>,
    descriptor: &FindDescriptor<I::Item, P, D>,
) -> I::Item
where
    I: IntoIterator,
    I::Item: Clone,
    P: Fn(&I::Item) -> bool,
    D: Fn() -> I::Item,
{
    sequence
        .into_iter()
        .flatten()
        .find(|element| descriptor.matches(element))
        .unwrap_or_else(|| descriptor.default_value())
}

/// Returns any element that satisfies the descriptor's predicate, or the
/// descriptor's default.
///
/// No ordering guarantee is made. The sequential implementation returns the
/// first match; use `par_find_any` (feature `rayon`) for a parallel search.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::{FindDescriptor, find_any};
///
/// let descriptor = FindDescriptor::with_default(|word: &&str| word.len() > 3, "");
/// assert_eq!(find_any(Some(["a", "bb", "cccc"]), &descriptor), "cccc");
/// ```
pub fn find_any<I, P, D>(
    sequence: Option<I>,
    descriptor: &FindDescriptor<I::Item, P, D>,
) -> I::Item
where
    I: IntoIterator,
    I::Item: Clone,
    P: Fn(&I::Item) -> bool,
    D: Fn() -> I::Item,
{
    find_first(sequence, descriptor)
}

/// [`find_first`] over a contiguous buffer of `Copy` elements.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::{FindDescriptor, find_first_in};
///
/// let samples = [0.5_f64, 1.5, 2.5];
/// let descriptor = FindDescriptor::with_default(|value: &f64| *value > 1.0, f64::NAN);
/// assert_eq!(find_first_in(Some(&samples[..]), &descriptor), 1.5);
/// assert!(find_first_in(None, &descriptor).is_nan());
/// ```
pub fn find_first_in<T, P, D>(buffer: Option<&[T]>, descriptor: &FindDescriptor<T, P, D>) -> T
where
    T: Copy,
    P: Fn(&T) -> bool,
    D: Fn() -> T,
{
    find_first(buffer.map(|values| values.iter().copied()), descriptor)
}

/// [`find_any`] over a contiguous buffer of `Copy` elements.
pub fn find_any_in<T, P, D>(buffer: Option<&[T]>, descriptor: &FindDescriptor<T, P, D>) -> T
where
    T: Copy,
    P: Fn(&T) -> bool,
    D: Fn() -> T,
{
    find_first_in(buffer, descriptor)
}
