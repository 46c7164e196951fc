//! Memoizing holder for fallible producers.

use std::cell::{OnceCell, RefCell};
use std::fmt;

/// A lazily computed, cached value whose producer may fail.
///
/// Only `Ok` results are cached. An `Err` is handed back to the caller
/// untouched and the next [`get`](Self::get) calls the producer again.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::TryMemoized;
/// use std::cell::Cell;
///
/// let attempts = Cell::new(0);
/// let holder = TryMemoized::new(|| {
///     attempts.set(attempts.get() + 1);
///     if attempts.get() < 3 { Err("not yet") } else { Ok(attempts.get()) }
/// });
///
/// assert_eq!(holder.get(), Err("not yet"));
/// assert_eq!(holder.get(), Err("not yet"));
/// assert_eq!(holder.get(), Ok(&3));
/// assert_eq!(holder.get(), Ok(&3));
/// assert_eq!(attempts.get(), 3);
/// ```
pub struct TryMemoized<T, E, F = fn() -> Result<T, E>> {
    slot: OnceCell<T>,
    producer: RefCell<F>,
    _error: std::marker::PhantomData<fn() -> E>,
}

impl<T, E, F: FnMut() -> Result<T, E>> TryMemoized<T, E, F> {
    /// Creates an unresolved holder. The producer is not called.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            slot: OnceCell::new(),
            producer: RefCell::new(producer),
            _error: std::marker::PhantomData,
        }
    }

    /// Returns the cached value, calling the producer while unresolved.
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged. Errors are not cached.
    ///
    /// # Panics
    ///
    /// Panics if called from inside its own producer.
    pub fn get(&self) -> Result<&T, E> {
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }
        let Ok(mut producer) = self.producer.try_borrow_mut() else {
            panic!("TryMemoized::get called re-entrantly from its own producer");
        };
        let outcome = producer();
        drop(producer);
        match outcome {
            Ok(value) => {
                tracing::trace!(target: "fnkit::memo", "fallible memoized value resolved");
                Ok(self.slot.get_or_init(|| value))
            }
            Err(error) => {
                tracing::debug!(
                    target: "fnkit::memo",
                    "fallible producer failed; holder stays unresolved"
                );
                Err(error)
            }
        }
    }

    /// Consumes the holder and returns the value, resolving it if needed.
    ///
    /// # Errors
    ///
    /// Returns the producer's error if the holder was unresolved and the
    /// producer fails.
    pub fn into_inner(self) -> Result<T, E> {
        if let Some(value) = self.slot.into_inner() {
            Ok(value)
        } else {
            let mut producer = self.producer.into_inner();
            producer()
        }
    }
}

impl<T, E, F> TryMemoized<T, E, F> {
    /// Returns the cached value without resolving.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns whether a value has been cached.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Clears the cache and returns the previously cached value.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T: fmt::Debug, E, F> fmt::Debug for TryMemoized<T, E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => formatter.debug_tuple("TryMemoized").field(value).finish(),
            None => formatter
                .debug_tuple("TryMemoized")
                .field(&"<unresolved>")
                .finish(),
        }
    }
}
