//! Function shape adapters.
//!
//! - [`identity`] and [`constant`]: the I and K combinators
//! - [`flip`]: swaps the arguments of a binary function
//! - [`bind_first`] / [`bind_last`]: fix one argument of a binary function
//! - [`supply`]: fix the only argument of a unary function
//! - [`run_with`]: fix the argument of a consumer

/// Returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::identity;
///
/// assert_eq!(identity(42), 42);
/// let names: Vec<&str> = Some("fnkit").into_iter().map(identity).collect();
/// assert_eq!(names, vec!["fnkit"]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(flip(f))` behaves like `f`.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, R, F>(function: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |second, first| function(first, second)
}

/// Fixes the first argument of a binary function.
///
/// The bound value is cloned on every call.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::bind_first;
///
/// let greet = bind_first(|greeting: &str, name: &str| format!("{greeting}, {name}"), "Hello");
/// assert_eq!(greet("Ada"), "Hello, Ada");
/// ```
#[inline]
pub fn bind_first<A, B, R, F>(function: F, first: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |second| function(first.clone(), second)
}

/// Fixes the second argument of a binary function.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::bind_last;
///
/// let halve = bind_last(|numerator: f64, denominator: f64| numerator / denominator, 2.0);
/// assert!((halve(9.0) - 4.5).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn bind_last<A, B, R, F>(function: F, second: B) -> impl Fn(A) -> R
where
    B: Clone,
    F: Fn(A, B) -> R,
{
    move |first| function(first, second.clone())
}

/// Turns a unary function and its argument into a supplier.
///
/// The function runs on every call of the supplier; nothing is cached.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::supply;
///
/// let length = supply(|text: String| text.len(), String::from("fnkit"));
/// assert_eq!(length(), 5);
/// ```
#[inline]
pub fn supply<A, R, F>(function: F, argument: A) -> impl Fn() -> R
where
    A: Clone,
    F: Fn(A) -> R,
{
    move || function(argument.clone())
}

/// Turns a consumer and its argument into a runnable.
///
/// # Examples
///
/// ```rust
/// use fnkit::adapt::run_with;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let record = run_with(|line: &str| log.borrow_mut().push(line.to_owned()), "started");
/// record();
/// record();
/// assert_eq!(*log.borrow(), vec!["started", "started"]);
/// ```
#[inline]
pub fn run_with<A, C>(consumer: C, argument: A) -> impl Fn()
where
    A: Clone,
    C: Fn(A),
{
    move || consumer(argument.clone())
}
