//! Single-threaded memoizing holder.
//!
//! [`Memoized<T, F>`] defers a producer call until the value is first
//! requested and caches the result for every later request.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::memo::Memoized;
//!
//! let holder = Memoized::new(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // Nothing printed yet
//! assert!(!holder.is_resolved());
//!
//! // Now "Computing..." is printed
//! assert_eq!(*holder.get(), 42);
//!
//! // No recomputation
//! assert_eq!(*holder.get(), 42);
//! ```

use std::cell::{OnceCell, RefCell};
use std::fmt;

use super::Memo;

/// A lazily computed, cached value.
///
/// The producer is a `FnMut() -> T`. It is invoked at most once per
/// resolution: after the first successful [`get`](Self::get) the cached value
/// is returned unconditionally, even if the producer would now return
/// something different.
///
/// Occupancy of the internal slot is the single source of truth for
/// "resolved". A producer returning `None`, `0` or an empty string is cached
/// like any other value.
///
/// # Type Parameters
///
/// * `T` - The type of the cached value
/// * `F` - The type of the producer (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Use `ConcurrentMemoized` (feature
/// `concurrent`) to share a holder between threads.
///
/// # Failure Policy
///
/// If the producer panics, the holder stays unresolved and the next
/// [`get`](Self::get) calls the producer again.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::Memoized;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let holder = Memoized::new(|| {
///     call_count.set(call_count.get() + 1);
///     "value"
/// });
///
/// assert_eq!(call_count.get(), 0);
/// let _ = holder.get();
/// let _ = holder.get();
/// assert_eq!(call_count.get(), 1);
/// ```
pub struct Memoized<T, F = fn() -> T> {
    slot: OnceCell<T>,
    producer: RefCell<F>,
}

/// Wraps `producer` in a [`Memoized`] holder.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::memoize;
///
/// let holder = memoize(|| vec![1, 2, 3]);
/// assert_eq!(holder.get().len(), 3);
/// ```
#[inline]
pub const fn memoize<T, F: FnMut() -> T>(producer: F) -> Memoized<T, F> {
    Memoized::new(producer)
}

impl<T, F: FnMut() -> T> Memoized<T, F> {
    /// Creates an unresolved holder. The producer is not called.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            slot: OnceCell::new(),
            producer: RefCell::new(producer),
        }
    }

    /// Returns the cached value, calling the producer on first access.
    ///
    /// # Panics
    ///
    /// - Propagates a panic raised by the producer. The holder stays
    ///   unresolved in that case.
    /// - Panics if called from inside its own producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::Memoized;
    ///
    /// let holder = Memoized::new(|| 42);
    /// assert_eq!(*holder.get(), 42);
    /// ```
    pub fn get(&self) -> &T {
        if let Some(value) = self.slot.get() {
            return value;
        }
        let value = self.produce();
        self.slot.get_or_init(|| value)
    }

    fn produce(&self) -> T {
        let Ok(mut producer) = self.producer.try_borrow_mut() else {
            panic!("Memoized::get called re-entrantly from its own producer");
        };
        let value = producer();
        tracing::trace!(target: "fnkit::memo", "memoized value resolved");
        value
    }

    /// Consumes the holder and returns the value, resolving it if needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::Memoized;
    ///
    /// let holder = Memoized::new(|| "owned".to_string());
    /// assert_eq!(holder.into_inner(), "owned");
    /// ```
    pub fn into_inner(self) -> T {
        if let Some(value) = self.slot.into_inner() {
            value
        } else {
            let mut producer = self.producer.into_inner();
            producer()
        }
    }

    /// Returns a new holder whose value is `function` applied to this one.
    ///
    /// Neither holder is resolved until the returned one is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::Memoized;
    ///
    /// let holder = Memoized::new(|| 21);
    /// let doubled = holder.map(|value| value * 2);
    /// assert_eq!(*doubled.get(), 42);
    /// ```
    pub fn map<U, G>(self, function: G) -> Memoized<U, impl FnMut() -> U>
    where
        G: Fn(&T) -> U,
    {
        Memoized::new(move || function(self.get()))
    }
}

fn spent<T>() -> T {
    panic!("Memoized::resolved holder has no producer to run after take()")
}

impl<T> Memoized<T, fn() -> T> {
    /// Creates a holder that is already resolved to `value`.
    ///
    /// # Panics
    ///
    /// The holder carries no producer. Calling [`get`](Self::get) or
    /// [`into_inner`](Self::into_inner) after [`take`](Self::take) panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::Memoized;
    ///
    /// let holder = Memoized::resolved(42);
    /// assert!(holder.is_resolved());
    /// ```
    #[inline]
    pub fn resolved(value: T) -> Self {
        Self {
            slot: OnceCell::from(value),
            producer: RefCell::new(spent::<T>),
        }
    }
}

impl<T, F> Memoized<T, F> {
    /// Returns the cached value without resolving.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::Memoized;
    ///
    /// let holder = Memoized::new(|| 42);
    /// assert!(holder.peek().is_none());
    /// holder.get();
    /// assert_eq!(holder.peek(), Some(&42));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Clears the cache and returns the previously cached value.
    ///
    /// The next [`get`](Self::get) calls the producer again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::Memoized;
    ///
    /// let mut next = 0;
    /// let mut holder = Memoized::new(move || {
    ///     next += 1;
    ///     next
    /// });
    ///
    /// assert_eq!(*holder.get(), 1);
    /// assert_eq!(holder.take(), Some(1));
    /// assert_eq!(*holder.get(), 2);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T, F: FnMut() -> T> Memo<T> for Memoized<T, F> {
    fn get(&self) -> &T {
        Self::get(self)
    }

    fn is_resolved(&self) -> bool {
        Self::is_resolved(self)
    }
}

impl<T: Default> Default for Memoized<T> {
    /// Creates a holder that computes `T::default()`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Memoized<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => formatter.debug_tuple("Memoized").field(value).finish(),
            None => formatter
                .debug_tuple("Memoized")
                .field(&"<unresolved>")
                .finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Memoized<i32>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_memoized_starts_unresolved() {
        let holder = Memoized::new(|| 42);
        assert!(!holder.is_resolved());
        assert!(holder.peek().is_none());
    }

    #[rstest]
    fn test_memoized_counter_producer_returns_first_value() {
        let counter = Cell::new(0);
        let holder = Memoized::new(|| {
            let current = counter.get();
            counter.set(current + 1);
            current
        });

        assert_eq!(*holder.get(), 0);
        assert_eq!(*holder.get(), 0);
        assert_eq!(*holder.get(), 0);
        assert_eq!(counter.get(), 1);
    }

    #[rstest]
    fn test_memoized_caches_none() {
        let calls = Cell::new(0);
        let holder = Memoized::new(|| {
            calls.set(calls.get() + 1);
            None::<i32>
        });

        assert_eq!(*holder.get(), None);
        assert_eq!(*holder.get(), None);
        assert!(holder.is_resolved());
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_memoized_retries_after_panic() {
        let attempts = Cell::new(0);
        let holder = Memoized::new(|| {
            attempts.set(attempts.get() + 1);
            assert!(attempts.get() > 1, "first attempt fails");
            "ready"
        });

        let first = catch_unwind(AssertUnwindSafe(|| *holder.get()));
        assert!(first.is_err());
        assert!(!holder.is_resolved());

        assert_eq!(*holder.get(), "ready");
        assert_eq!(attempts.get(), 2);
    }

    #[rstest]
    fn test_memoized_take_clears_cache() {
        let mut next = 10;
        let mut holder = Memoized::new(move || {
            next += 1;
            next
        });

        assert_eq!(*holder.get(), 11);
        assert_eq!(holder.take(), Some(11));
        assert!(!holder.is_resolved());
        assert_eq!(*holder.get(), 12);
    }

    #[rstest]
    fn test_memoized_debug() {
        let holder = Memoized::new(|| 7);
        assert_eq!(format!("{holder:?}"), "Memoized(\"<unresolved>\")");
        holder.get();
        assert_eq!(format!("{holder:?}"), "Memoized(7)");
    }

    #[rstest]
    fn test_memoized_default() {
        let holder: Memoized<String> = Memoized::default();
        assert_eq!(holder.get(), "");
    }

    #[rstest]
    fn test_resolved_take_then_get_panics() {
        let mut holder = Memoized::resolved(5);
        assert_eq!(holder.take(), Some(5));
        let result = catch_unwind(AssertUnwindSafe(|| *holder.get()));
        assert!(result.is_err());
    }
}
