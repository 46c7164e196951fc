//! Delimiter joining.
//!
//! Each element is converted to text by a caller-supplied function and the
//! pieces are joined with a delimiter. Three call shapes are offered:
//!
//! - [`join`]: comma delimiter ([`DEFAULT_DELIMITER`])
//! - [`join_with`]: caller-chosen delimiter
//! - [`Joining`]: delimiter plus prefix and suffix around the whole result
//!
//! A `None` sequence always yields the empty string.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::join::{Joining, join, join_with};
//!
//! assert_eq!(join(Some([1, 2, 3]), |value| value.to_string()), "1,2,3");
//! assert_eq!(join_with(Some(["a", "b"]), |text| text, " | "), "a | b");
//! assert_eq!(join(None::<Vec<i32>>, |value| value.to_string()), "");
//!
//! let bracketed = Joining::new(", ").with_prefix("[").with_suffix("]");
//! assert_eq!(bracketed.join(Some(vec!['x', 'y']), |c| c.to_string()), "[x, y]");
//! ```

mod joining;

pub use joining::{DEFAULT_DELIMITER, Joining, join, join_display, join_with};
