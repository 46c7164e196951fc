//! Rayon-backed find-with-default queries.
//!
//! The descriptor is shared by reference across worker threads, so its
//! predicate and supplier must be `Sync`.

use rayon::prelude::*;

use super::FindDescriptor;

/// Searches `buffer` in parallel for any element satisfying the descriptor.
///
/// The search short-circuits as soon as some worker finds a match. Which
/// match is returned is unspecified.
///
/// # Examples
///
/// ```rust
/// use fnkit::find::{FindDescriptor, par_find_any};
///
/// let values: Vec<u32> = (0..10_000).collect();
/// let descriptor = FindDescriptor::with_default(|value: &u32| *value % 1_000 == 999, 0);
/// assert_eq!(par_find_any(Some(&values[..]), &descriptor) % 1_000, 999);
/// ```
pub fn par_find_any<T, P, D>(buffer: Option<&[T]>, descriptor: &FindDescriptor<T, P, D>) -> T
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
    D: Fn() -> T + Sync,
{
    buffer
        .and_then(|values| {
            values
                .par_iter()
                .find_any(|element| descriptor.matches(element))
                .cloned()
        })
        .unwrap_or_else(|| descriptor.default_value())
}

/// Searches `buffer` in parallel for the first element, in buffer order,
/// satisfying the descriptor.
pub fn par_find_first<T, P, D>(buffer: Option<&[T]>, descriptor: &FindDescriptor<T, P, D>) -> T
where
    T: Clone + Send + Sync,
    P: Fn(&T) -> bool + Sync,
    D: Fn() -> T + Sync,
{
    buffer
        .and_then(|values| {
            values
                .par_iter()
                .find_first(|element| descriptor.matches(element))
                .cloned()
        })
        .unwrap_or_else(|| descriptor.default_value())
}
