//! # fnkit
//!
//! Functional adapters, memoizing holders and null-safe collection helpers.
//!
//! ## Overview
//!
//! The library collapses the usual "iterate, filter, terminal operation with a
//! fallback" dance into single calls, and provides small adapters that reshape
//! closures. It includes:
//!
//! - **Memoization**: [`Memoized`](memo::Memoized), [`TryMemoized`](memo::TryMemoized)
//!   and a thread-safe `ConcurrentMemoized`
//! - **Find**: find-with-default descriptors and index-of-first-match
//! - **Chunk**: partition sequences and numeric buffers into fixed-size chunks
//! - **Join**: delimiter joining with optional prefix and suffix
//! - **Filter**: filter-then-collect descriptors and distinct-by-key predicates
//! - **Adapt**: function, predicate and getter/setter adapters
//!
//! Data arguments are taken as `Option<_>`: `None` is treated as an empty
//! sequence, never as an error.
//!
//! ## Feature Flags
//!
//! - `memo`, `find`, `chunk`, `join`, `filter`, `adapt`: the modules above
//! - `concurrent`: thread-safe memoization and distinct-by-key (`parking_lot`)
//! - `rayon`: parallel find-any
//! - `serde`: `Serialize`/`Deserialize` for plain data types
//! - `fxhash` / `ahash`: faster hashers for distinct-by-key key sets
//! - `full`: Enable all features except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let descriptor = FindDescriptor::with_default(|value: &i32| *value > 15, -1);
//! assert_eq!(find_first(Some(vec![10, 20, 30]), &descriptor), 20);
//! assert_eq!(find_first(None::<Vec<i32>>, &descriptor), -1);
//!
//! let chunks = partition(Some(vec![1, 2, 3, 4, 5, 6]), 4).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2, 3, 4], vec![5, 6]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "memo")]
    pub use crate::memo::*;

    #[cfg(feature = "find")]
    pub use crate::find::*;

    #[cfg(feature = "chunk")]
    pub use crate::chunk::*;

    #[cfg(feature = "join")]
    pub use crate::join::*;

    #[cfg(feature = "filter")]
    pub use crate::filter::*;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;
}

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "find")]
pub mod find;

#[cfg(feature = "chunk")]
pub mod chunk;

#[cfg(feature = "join")]
pub mod join;

#[cfg(feature = "filter")]
pub mod filter;

#[cfg(feature = "adapt")]
pub mod adapt;
