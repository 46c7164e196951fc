//! Find-with-default queries.
//!
//! This module collapses `filter`, `find` and "or else default" into single
//! calls parameterized by a [`FindDescriptor`]:
//!
//! - [`find_first`] / [`find_any`]: over any `IntoIterator`
//! - [`find_first_in`] / [`find_any_in`]: over contiguous `Copy` buffers
//! - [`index_of_first`] / [`position_of_first`]: position of the first match
//! - `par_find_any` / `par_find_first`: rayon-backed searches (feature `rayon`)
//!
//! Every query takes its sequence as `Option<_>`. `None` behaves exactly like
//! an empty sequence: nothing matches and the default is returned.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::find::{FindDescriptor, find_first, index_of_first};
//!
//! let descriptor = FindDescriptor::with_default_supplier(
//!     |name: &String| name.starts_with('b'),
//!     || "nobody".to_string(),
//! );
//!
//! let names = vec!["alice".to_string(), "bob".to_string()];
//! assert_eq!(find_first(Some(names.clone()), &descriptor), "bob");
//! assert_eq!(find_first(None::<Vec<String>>, &descriptor), "nobody");
//!
//! assert_eq!(index_of_first(Some(&[10, 20, 30]), |value: &&i32| **value > 15), 1);
//! ```

mod descriptor;
mod indexed;
#[cfg(feature = "rayon")]
mod parallel;
mod search;

pub use descriptor::{Fallback, FindDescriptor};
pub use indexed::{
    Indexed, NOT_FOUND, index_of_first, index_of_first_in, indexed, position_of_first,
};
#[cfg(feature = "rayon")]
pub use parallel::{par_find_any, par_find_first};
pub use search::{find_any, find_any_in, find_first, find_first_in};
