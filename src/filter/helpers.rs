//! One-call filter and match wrappers.
//!
//! A `None` sequence behaves as an empty one: filters and maps yield an empty
//! `Vec`, `any_match` yields `false`, `all_match` and `none_match` yield `true`.

/// Keeps the elements that satisfy `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use fnkit::filter::filter_to_vec;
///
/// assert_eq!(filter_to_vec(Some(1..=6), |value: &i32| value % 3 == 0), vec![3, 6]);
/// assert!(filter_to_vec(None::<Vec<i32>>, |_: &i32| true).is_empty());
/// ```
pub fn filter_to_vec<I, P>(sequence: Option<I>, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().flatten().filter(predicate).collect()
}

/// Applies `mapper` to every element, in order.
///
/// # Examples
///
/// ```rust
/// use fnkit::filter::map_to_vec;
///
/// assert_eq!(map_to_vec(Some(["a", "bcd"]), str::len), vec![1, 3]);
/// ```
pub fn map_to_vec<I, F, U>(sequence: Option<I>, mapper: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    sequence.into_iter().flatten().map(mapper).collect()
}

/// Returns whether any element satisfies `predicate`.
pub fn any_match<I, P>(sequence: Option<I>, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    sequence.into_iter().flatten().any(predicate)
}

/// Returns whether every element satisfies `predicate`.
pub fn all_match<I, P>(sequence: Option<I>, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    sequence.into_iter().flatten().all(predicate)
}

/// Returns whether no element satisfies `predicate`.
pub fn none_match<I, P>(sequence: Option<I>, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    !sequence.into_iter().flatten().any(predicate)
}
