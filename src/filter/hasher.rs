//! Hasher selection for seen-key sets.
//!
//! The `fxhash` and `ahash` features swap the default SipHash-based hasher
//! for a faster one. `fxhash` wins if both are enabled.

use std::collections::HashSet;

/// The `BuildHasher` used by distinct-by-key predicates.
#[cfg(feature = "fxhash")]
pub type KeyHashBuilder = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by distinct-by-key predicates.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHashBuilder = ahash::RandomState;

/// The `BuildHasher` used by distinct-by-key predicates.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHashBuilder = std::collections::hash_map::RandomState;

pub(super) type KeySet<K> = HashSet<K, KeyHashBuilder>;

pub(super) fn key_set<K>() -> KeySet<K> {
    HashSet::with_hasher(KeyHashBuilder::default())
}
