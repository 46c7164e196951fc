//! Adapters between closure shapes.
//!
//! - **Function adapters** ([`bind_first`], [`bind_last`], [`supply`],
//!   [`run_with`], [`flip`], [`constant`], [`identity`]): fix arguments or
//!   reorder them so a closure fits where a different arity is expected
//! - **Predicate combinators** ([`not`], [`and`], [`or`], [`is_equal`],
//!   [`is_not_equal`], [`test_mapped`], [`when_some`])
//! - **Accessors** ([`Accessor`]): a getter/setter pair handled as one value
//!
//! Element types are generic; there is no per-primitive duplication.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::adapt::{and, bind_last, is_not_equal};
//!
//! let halve = bind_last(|numerator: i32, denominator: i32| numerator / denominator, 2);
//! assert_eq!(halve(10), 5);
//!
//! let positive_non_seven = and(|value: &i32| *value > 0, is_not_equal(7));
//! assert!(positive_non_seven(&3));
//! assert!(!positive_non_seven(&7));
//! ```

mod accessor;
mod function;
mod predicate;

pub use accessor::Accessor;
pub use function::{bind_first, bind_last, constant, flip, identity, run_with, supply};
pub use predicate::{and, is_equal, is_not_equal, not, or, test_mapped, when_some};
