//! Memoizing value holders.
//!
//! This module provides single-slot caches that compute a value at most once
//! from a zero-argument producer:
//!
//! - [`Memoized`]: single-threaded holder
//! - [`TryMemoized`]: single-threaded holder for fallible producers
//! - `ConcurrentMemoized`: thread-safe holder (requires the `concurrent` feature)
//!
//! Choosing between `Memoized` and `ConcurrentMemoized` is the thread-safety
//! toggle. Code that does not care which one it receives can accept the
//! [`Memo`] trait.
//!
//! # Failure Policy
//!
//! A producer that panics, or a fallible producer that returns `Err`, leaves
//! the holder unresolved. The next access calls the producer again.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::memo::Memoized;
//! use std::cell::Cell;
//!
//! let counter = Cell::new(0);
//! let holder = Memoized::new(|| {
//!     let current = counter.get();
//!     counter.set(current + 1);
//!     current
//! });
//!
//! assert_eq!(*holder.get(), 0);
//! assert_eq!(*holder.get(), 0);
//! assert_eq!(counter.get(), 1);
//! ```

#[cfg(feature = "concurrent")]
mod concurrent;
mod memoized;
mod try_memoized;

#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentMemoized, memoize_concurrent};
pub use memoized::{Memoized, memoize};
pub use try_memoized::TryMemoized;

/// A value holder that resolves at most once.
///
/// Implemented by [`Memoized`] and `ConcurrentMemoized`, so generic code can
/// stay agnostic of the synchronization flavour.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::{Memo, Memoized};
///
/// fn twice<M: Memo<String>>(holder: &M) -> usize {
///     holder.get().len() + holder.get().len()
/// }
///
/// let holder = Memoized::new(|| "abc".to_string());
/// assert_eq!(twice(&holder), 6);
/// assert!(holder.is_resolved());
/// ```
pub trait Memo<T> {
    /// Returns the cached value, computing it on first access.
    fn get(&self) -> &T;

    /// Returns whether the value has been computed.
    fn is_resolved(&self) -> bool;
}
