//! Distinct-by-key predicates.
//!
//! A distinct-by-key predicate remembers every key it has accepted and
//! rejects later elements with the same key, so filtering keeps the first
//! element per key.
//!
//! # Reuse
//!
//! The seen-key set persists across filtering passes. Call `reset` before
//! reusing an instance on an unrelated sequence.

use std::fmt;
use std::hash::Hash;

use super::hasher::{KeySet, key_set};

/// A single-threaded distinct-by-key predicate.
///
/// # Examples
///
/// ```rust
/// use fnkit::filter::DistinctByKey;
///
/// let records = vec![(1, 'a'), (1, 'b'), (2, 'c')];
/// let mut distinct = DistinctByKey::new(|record: &(i32, char)| record.0);
///
/// let kept: Vec<_> = records
///     .into_iter()
///     .filter(|record| distinct.accept(record))
///     .collect();
/// assert_eq!(kept, vec![(1, 'a'), (2, 'c')]);
/// ```
pub struct DistinctByKey<K, F> {
    key: F,
    seen: KeySet<K>,
}

impl<K: Eq + Hash, F> DistinctByKey<K, F> {
    /// Creates a predicate that extracts keys with `key`.
    pub fn new<T>(key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            key,
            seen: key_set(),
        }
    }

    /// Returns `true` the first time the element's key is seen.
    pub fn accept<T>(&mut self, element: &T) -> bool
    where
        F: Fn(&T) -> K,
    {
        self.seen.insert((self.key)(element))
    }

    /// Forgets every key seen so far.
    pub fn reset(&mut self) {
        tracing::debug!(
            target: "fnkit::filter",
            forgotten = self.seen.len(),
            "distinct-by-key state reset"
        );
        self.seen.clear();
    }

    /// Returns the number of distinct keys accepted so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

impl<K, F> fmt::Debug for DistinctByKey<K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DistinctByKey")
            .field("seen", &self.seen.len())
            .finish_non_exhaustive()
    }
}

/// Returns a fresh distinct-by-key predicate as a closure.
///
/// # Examples
///
/// ```rust
/// use fnkit::filter::distinct_by_key;
///
/// let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
/// let first_per_letter: Vec<_> = words
///     .into_iter()
///     .filter(distinct_by_key(|word: &&str| word.chars().next()))
///     .collect();
/// assert_eq!(first_per_letter, vec!["apple", "banana", "cherry"]);
/// ```
pub fn distinct_by_key<T, K, F>(key: F) -> impl FnMut(&T) -> bool
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut state = DistinctByKey::new(key);
    move |element| state.accept(element)
}

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentDistinctByKey;

#[cfg(feature = "concurrent")]
mod concurrent {
    use std::fmt;
    use std::hash::Hash;

    use parking_lot::Mutex;

    use super::{KeySet, key_set};

    /// A distinct-by-key predicate that can be shared between threads.
    ///
    /// Each [`accept`](Self::accept) performs its membership check and
    /// insertion under one lock, so two concurrent calls never both report
    /// the same key as unseen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::filter::ConcurrentDistinctByKey;
    /// use std::sync::Arc;
    /// use std::thread;
    ///
    /// let distinct = Arc::new(ConcurrentDistinctByKey::new(|value: &u32| value % 10));
    /// let handles: Vec<_> = (0..4)
    ///     .map(|_| {
    ///         let distinct = Arc::clone(&distinct);
    ///         thread::spawn(move || (0..100).filter(|value| distinct.accept(value)).count())
    ///     })
    ///     .collect();
    ///
    /// let accepted: usize = handles.into_iter().map(|handle| handle.join().unwrap()).sum();
    /// assert_eq!(accepted, 10);
    /// ```
    pub struct ConcurrentDistinctByKey<K, F> {
        key: F,
        seen: Mutex<KeySet<K>>,
    }

    impl<K: Eq + Hash, F> ConcurrentDistinctByKey<K, F> {
        /// Creates a predicate that extracts keys with `key`.
        pub fn new<T>(key: F) -> Self
        where
            F: Fn(&T) -> K,
        {
            Self {
                key,
                seen: Mutex::new(key_set()),
            }
        }

        /// Returns `true` the first time the element's key is seen by any
        /// thread.
        pub fn accept<T>(&self, element: &T) -> bool
        where
            F: Fn(&T) -> K,
        {
            let key = (self.key)(element);
            self.seen.lock().insert(key)
        }

        /// Forgets every key seen so far.
        pub fn reset(&self) {
            let mut seen = self.seen.lock();
            tracing::debug!(
                target: "fnkit::filter",
                forgotten = seen.len(),
                "concurrent distinct-by-key state reset"
            );
            seen.clear();
        }

        /// Returns the number of distinct keys accepted so far.
        pub fn seen_count(&self) -> usize {
            self.seen.lock().len()
        }
    }

    impl<K, F> fmt::Debug for ConcurrentDistinctByKey<K, F> {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter
                .debug_struct("ConcurrentDistinctByKey")
                .field("seen", &self.seen.lock().len())
                .finish_non_exhaustive()
        }
    }

    static_assertions::assert_impl_all!(ConcurrentDistinctByKey<u64, fn(&u64) -> u64>: Send, Sync);
}

static_assertions::assert_impl_all!(DistinctByKey<u64, fn(&u64) -> u64>: Send, Sync);
