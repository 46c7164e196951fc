//! Predicate combinators.
//!
//! Every predicate here takes its argument by reference, matching what
//! `Iterator::filter` passes.

/// Negates a predicate.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::not;
///
/// let odd: Vec<i32> = (1..=5).filter(not(|value: &i32| value % 2 == 0)).collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
#[inline]
pub fn not<T: ?Sized, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Short-circuiting conjunction of two predicates.
#[inline]
pub fn and<T: ?Sized, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) && second(value)
}

/// Short-circuiting disjunction of two predicates.
#[inline]
pub fn or<T: ?Sized, P, Q>(first: P, second: Q) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value| first(value) || second(value)
}

/// Creates a predicate that tests equality with `target`.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::is_equal;
///
/// let is_admin = is_equal(String::from("admin"));
/// assert!(is_admin(&String::from("admin")));
/// assert!(!is_admin(&String::from("guest")));
/// ```
#[inline]
pub fn is_equal<T: PartialEq>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value == target
}

/// Creates a predicate that tests inequality with `target`.
#[inline]
pub fn is_not_equal<T: PartialEq>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value != target
}

/// Tests `predicate` against the result of `mapper`.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::test_mapped;
///
/// let long_word = test_mapped(|word: &&str| word.len(), |length: &usize| *length > 4);
/// let long: Vec<&str> = ["map", "filter", "fold"].into_iter().filter(long_word).collect();
/// assert_eq!(long, vec!["filter"]);
/// ```
#[inline]
pub fn test_mapped<T: ?Sized, U, M, P>(mapper: M, predicate: P) -> impl Fn(&T) -> bool
where
    M: Fn(&T) -> U,
    P: Fn(&U) -> bool,
{
    move |value| predicate(&mapper(value))
}

/// Lifts a predicate over `Option`, treating `None` as no match.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::when_some;
///
/// let positive = when_some(|value: &i32| *value > 0);
/// assert!(positive(&Some(3)));
/// assert!(!positive(&Some(-3)));
/// assert!(!positive(&None));
/// ```
#[inline]
pub fn when_some<T, P>(predicate: P) -> impl Fn(&Option<T>) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| value.as_ref().is_some_and(&predicate)
}
