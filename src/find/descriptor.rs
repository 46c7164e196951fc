//! Predicate-plus-default descriptors.

use std::fmt;

/// The value a find query falls back to when nothing matches.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `D` - The supplier type (defaults to `fn() -> T`)
#[derive(Clone)]
pub enum Fallback<T, D = fn() -> T> {
    /// A precomputed default, cloned on every fallback.
    Value(T),
    /// A supplier called only when a fallback is actually needed.
    Supplier(D),
}

impl<T: Clone, D: Fn() -> T> Fallback<T, D> {
    /// Produces the fallback value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::find::Fallback;
    ///
    /// let constant: Fallback<i32> = Fallback::Value(7);
    /// assert_eq!(constant.resolve(), 7);
    ///
    /// let supplied = Fallback::<i32, _>::Supplier(|| 8);
    /// assert_eq!(supplied.resolve(), 8);
    /// ```
    #[inline]
    pub fn resolve(&self) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Supplier(supplier) => supplier(),
        }
    }
}

impl<T: fmt::Debug, D> fmt::Debug for Fallback<T, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Supplier(_) => formatter.debug_tuple("Supplier").field(&"<fn>").finish(),
        }
    }
}

/// An immutable predicate paired with a default.
///
/// Descriptors are built once and reused across any number of queries. They
/// have no side effects beyond whatever the predicate or supplier performs.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `P` - The predicate type
/// * `D` - The default supplier type (defaults to `fn() -> T`)
///
/// # Examples
///
/// ```rust
/// use fnkit::find::FindDescriptor;
///
/// let positive = FindDescriptor::with_default(|value: &i64| *value > 0, 0);
/// assert!(positive.matches(&3));
/// assert_eq!(positive.default_value(), 0);
/// ```
#[derive(Clone)]
pub struct FindDescriptor<T, P, D = fn() -> T> {
    predicate: P,
    fallback: Fallback<T, D>,
}

impl<T, P: Fn(&T) -> bool> FindDescriptor<T, P> {
    /// Creates a descriptor with a precomputed default.
    #[inline]
    pub const fn with_default(predicate: P, default: T) -> Self {
        Self {
            predicate,
            fallback: Fallback::Value(default),
        }
    }
}

impl<T, P: Fn(&T) -> bool, D: Fn() -> T> FindDescriptor<T, P, D> {
    /// Creates a descriptor whose default is computed only when needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::find::{FindDescriptor, find_first};
    /// use std::cell::Cell;
    ///
    /// let supplier_calls = Cell::new(0);
    /// let descriptor = FindDescriptor::with_default_supplier(
    ///     |value: &i32| *value % 2 == 0,
    ///     || {
    ///         supplier_calls.set(supplier_calls.get() + 1);
    ///         -1
    ///     },
    /// );
    ///
    /// assert_eq!(find_first(Some(vec![1, 2]), &descriptor), 2);
    /// assert_eq!(supplier_calls.get(), 0);
    /// assert_eq!(find_first(Some(vec![1, 3]), &descriptor), -1);
    /// assert_eq!(supplier_calls.get(), 1);
    /// ```
    #[inline]
    pub const fn with_default_supplier(predicate: P, supplier: D) -> Self {
        Self {
            predicate,
            fallback: Fallback::Supplier(supplier),
        }
    }

    /// Applies the predicate to `element`.
    #[inline]
    pub fn matches(&self, element: &T) -> bool {
        (self.predicate)(element)
    }

    /// Returns the fallback half of the descriptor.
    #[inline]
    pub const fn fallback(&self) -> &Fallback<T, D> {
        &self.fallback
    }
}

impl<T: Clone, P, D: Fn() -> T> FindDescriptor<T, P, D> {
    /// Produces the default value, calling the supplier if there is one.
    #[inline]
    pub fn default_value(&self) -> T {
        self.fallback.resolve()
    }
}

impl<T: fmt::Debug, P, D> fmt::Debug for FindDescriptor<T, P, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FindDescriptor")
            .field("predicate", &"<fn>")
            .field("fallback", &self.fallback)
            .finish()
    }
}
