//! Null-safe filtering helpers.
//!
//! - [`FilterCollector`]: a predicate paired with a target-collection supplier,
//!   consumed by [`filter_collect`]
//! - [`filter_to_vec`], [`map_to_vec`], [`any_match`], [`all_match`],
//!   [`none_match`]: one-call wrappers that accept `None` as an empty sequence
//! - [`DistinctByKey`] and `ConcurrentDistinctByKey`: stateful predicates that
//!   keep the first element per key
//!
//! # Examples
//!
//! ```rust
//! use fnkit::filter::{FilterCollector, filter_collect};
//! use std::collections::BTreeSet;
//!
//! let evens = FilterCollector::new(|value: &i32| value % 2 == 0, BTreeSet::new);
//! let collected = filter_collect(Some(vec![4, 1, 2, 4]), &evens);
//! assert_eq!(collected.into_iter().collect::<Vec<_>>(), vec![2, 4]);
//! ```

mod collector;
mod distinct;
mod hasher;
mod helpers;

pub use collector::{FilterCollector, filter_collect};
#[cfg(feature = "concurrent")]
pub use distinct::ConcurrentDistinctByKey;
pub use distinct::{DistinctByKey, distinct_by_key};
pub use hasher::KeyHashBuilder;
pub use helpers::{all_match, any_match, filter_to_vec, map_to_vec, none_match};
