//! The joining reducer and its shortcuts.

use std::fmt::Display;

/// Delimiter used by [`join`] and [`Joining::default`].
pub const DEFAULT_DELIMITER: &str = ",";

/// A reusable joining reducer: delimiter, prefix and suffix.
///
/// # Null Safety
///
/// - `None` input yields `""`, regardless of prefix and suffix
/// - an empty input yields `prefix + suffix`
///
/// # Examples
///
/// ```rust
/// use fnkit::join::Joining;
///
/// let braces = Joining::new("; ").with_prefix("{").with_suffix("}");
/// assert_eq!(braces.join(Some(vec![1, 2]), |value| value.to_string()), "{1; 2}");
/// assert_eq!(braces.join(Some(Vec::<i32>::new()), |value| value.to_string()), "{}");
/// assert_eq!(braces.join(None::<Vec<i32>>, |value| value.to_string()), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Joining {
    delimiter: String,
    prefix: String,
    suffix: String,
}

impl Joining {
    /// Creates a reducer with the given delimiter and no prefix or suffix.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Sets the text placed before the joined elements.
    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    /// Sets the text placed after the joined elements.
    #[must_use]
    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..self
        }
    }

    /// Returns the delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Converts every element with `to_text` and joins the results.
    pub fn join<I, F, S>(&self, sequence: Option<I>, mut to_text: F) -> String
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> S,
        S: AsRef<str>,
    {
        let Some(sequence) = sequence else {
            return String::new();
        };

        let mut joined = self.prefix.clone();
        for (position, element) in sequence.into_iter().enumerate() {
            if position > 0 {
                joined.push_str(&self.delimiter);
            }
            joined.push_str(to_text(element).as_ref());
        }
        joined.push_str(&self.suffix);
        joined
    }
}

impl Default for Joining {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

/// Joins with the comma delimiter.
pub fn join<I, F, S>(sequence: Option<I>, to_text: F) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    Joining::default().join(sequence, to_text)
}

/// Joins with a caller-chosen delimiter.
pub fn join_with<I, F, S>(sequence: Option<I>, to_text: F, delimiter: &str) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: AsRef<str>,
{
    Joining::new(delimiter).join(sequence, to_text)
}

/// Joins the `Display` form of each element with the comma delimiter.
///
/// # Examples
///
/// ```rust
/// use fnkit::join::join_display;
///
/// assert_eq!(join_display(Some([1.5, 2.0])), "1.5,2");
/// ```
pub fn join_display<I>(sequence: Option<I>) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join(sequence, |element| element.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], "")]
    #[case(vec!["a"], "a")]
    #[case(vec!["a", "b", "c"], "a,b,c")]
    fn test_join_default_delimiter(#[case] input: Vec<&str>, #[case] expected: &str) {
        assert_eq!(join(Some(input), |text| text), expected);
    }

    #[rstest]
    fn test_join_applies_to_text_in_order() {
        let joined = join(Some(vec![3, 1, 2]), |value| format!("<{value}>"));
        assert_eq!(joined, "<3>,<1>,<2>");
    }

    #[rstest]
    fn test_join_with_empty_delimiter() {
        assert_eq!(join_with(Some(["x", "y", "z"]), |text| text, ""), "xyz");
    }

    #[rstest]
    fn test_joining_accessors() {
        let joining = Joining::new("-").with_prefix("(").with_suffix(")");
        assert_eq!(joining.delimiter(), "-");
        assert_eq!(joining.prefix(), "(");
        assert_eq!(joining.suffix(), ")");
    }

    #[rstest]
    fn test_joining_none_ignores_prefix_and_suffix() {
        let joining = Joining::default().with_prefix("[").with_suffix("]");
        assert_eq!(joining.join(None::<Vec<&str>>, |text| text), "");
    }
}
