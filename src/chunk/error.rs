//! Error types for partitioning.

/// Returned when a partition is requested with a chunk size of zero.
///
/// # Examples
///
/// ```rust
/// use fnkit::chunk::{ZeroChunkSizeError, partition};
///
/// let error = partition(Some(vec![1, 2, 3]), 0).unwrap_err();
/// assert_eq!(error, ZeroChunkSizeError);
/// assert_eq!(error.to_string(), "chunk size must be greater than zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("chunk size must be greater than zero")]
pub struct ZeroChunkSizeError;

/// Rejects a zero chunk size.
pub(super) const fn validate(size: usize) -> Result<usize, ZeroChunkSizeError> {
    if size == 0 {
        Err(ZeroChunkSizeError)
    } else {
        Ok(size)
    }
}
