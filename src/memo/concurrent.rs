//! Thread-safe memoizing holder.
//!
//! [`ConcurrentMemoized<T, F>`] has the same contract as
//! [`Memoized`](super::Memoized) but can be shared between threads.
//!
//! # Synchronization
//!
//! Resolved reads go through a `OnceLock` and take no lock. While the holder
//! is unresolved, callers serialize on a `parking_lot::Mutex` around the
//! producer, so concurrent first calls run the producer exactly once and the
//! others block until the value is published.
//!
//! # Re-entry Warning
//!
//! Calling [`get`](ConcurrentMemoized::get) from inside the producer on the
//! same thread deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::memo::ConcurrentMemoized;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let holder = Arc::new(ConcurrentMemoized::new(|| {
//!     println!("Computing...");
//!     42
//! }));
//!
//! let handles: Vec<_> = (0..10).map(|_| {
//!     let holder = Arc::clone(&holder);
//!     thread::spawn(move || *holder.get())
//! }).collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 42);
//! }
//! ```

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

use super::Memo;

/// A thread-safe lazily computed, cached value.
///
/// # Thread Safety
///
/// `Send + Sync` when `T: Send + Sync` and `F: Send`.
///
/// # Failure Policy
///
/// A panicking producer releases the lock and leaves the holder unresolved;
/// the next [`get`](Self::get) on any thread calls the producer again.
pub struct ConcurrentMemoized<T, F = fn() -> T> {
    slot: OnceLock<T>,
    producer: Mutex<F>,
}

/// Wraps `producer` in a [`ConcurrentMemoized`] holder.
#[inline]
pub const fn memoize_concurrent<T, F: FnMut() -> T>(producer: F) -> ConcurrentMemoized<T, F> {
    ConcurrentMemoized::new(producer)
}

impl<T, F: FnMut() -> T> ConcurrentMemoized<T, F> {
    /// Creates an unresolved holder. The producer is not called.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            slot: OnceLock::new(),
            producer: Mutex::new(producer),
        }
    }

    /// Returns the cached value, calling the producer on first access.
    ///
    /// If several threads call this concurrently on an unresolved holder,
    /// exactly one runs the producer.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the producer. The holder stays unresolved.
    pub fn get(&self) -> &T {
        if let Some(value) = self.slot.get() {
            return value;
        }

        let mut producer = self.producer.lock();
        // Another thread may have resolved while this one waited for the lock.
        if let Some(value) = self.slot.get() {
            return value;
        }

        let value = producer();
        let value = self.slot.get_or_init(|| value);
        drop(producer);
        tracing::trace!(target: "fnkit::memo", "concurrent memoized value resolved");
        value
    }

    /// Consumes the holder and returns the value, resolving it if needed.
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
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::memo::ConcurrentMemoized;
    ///
    /// let holder = ConcurrentMemoized::new(|| 21);
    /// let doubled = holder.map(|value| value * 2);
    /// assert_eq!(*doubled.get(), 42);
    /// ```
    pub fn map<U, G>(self, function: G) -> ConcurrentMemoized<U, impl FnMut() -> U>
    where
        G: Fn(&T) -> U,
    {
        ConcurrentMemoized::new(move || function(self.get()))
    }
}

fn spent<T>() -> T {
    panic!("ConcurrentMemoized::resolved holder has no producer to run after take()")
}

impl<T> ConcurrentMemoized<T, fn() -> T> {
    /// Creates a holder that is already resolved to `value`.
    ///
    /// # Panics
    ///
    /// The holder carries no producer. Calling [`get`](Self::get) or
    /// [`into_inner`](Self::into_inner) after [`take`](Self::take) panics.
    #[inline]
    pub fn resolved(value: T) -> Self {
        Self {
            slot: OnceLock::from(value),
            producer: Mutex::new(spent::<T>),
        }
    }
}

impl<T, F> ConcurrentMemoized<T, F> {
    /// Returns the cached value without resolving.
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
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T, F: FnMut() -> T> Memo<T> for ConcurrentMemoized<T, F> {
    fn get(&self) -> &T {
        Self::get(self)
    }

    fn is_resolved(&self) -> bool {
        Self::is_resolved(self)
    }
}

impl<T: Default> Default for ConcurrentMemoized<T> {
    /// Creates a holder that computes `T::default()`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ConcurrentMemoized<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => formatter
                .debug_tuple("ConcurrentMemoized")
                .field(value)
                .finish(),
            None => formatter
                .debug_tuple("ConcurrentMemoized")
                .field(&"<unresolved>")
                .finish(),
        }
    }
}

static_assertions::assert_impl_all!(ConcurrentMemoized<i32>: Send, Sync);
static_assertions::assert_impl_all!(
    ConcurrentMemoized<String, Box<dyn FnMut() -> String + Send>>: Send, Sync
);
