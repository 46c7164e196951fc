//! Zero-copy partitioning of contiguous buffers.

use std::iter::FusedIterator;
use std::slice::Chunks;

use super::ZeroChunkSizeError;
use super::error::validate;

/// A lazy iterator over contiguous sub-slices of a buffer.
///
/// Created by [`partition_slice_lazy`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SliceChunks<'a, T> {
    inner: Option<Chunks<'a, T>>,
}

impl<'a, T> Iterator for SliceChunks<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<T> DoubleEndedIterator for SliceChunks<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<T> ExactSizeIterator for SliceChunks<'_, T> {}

impl<T> FusedIterator for SliceChunks<'_, T> {}

/// Lazily partitions `buffer` into sub-slices of at most `size` elements.
///
/// # Errors
///
/// Returns [`ZeroChunkSizeError`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use fnkit::chunk::partition_slice_lazy;
///
/// let values = [1_i32, 2, 3, 4, 5];
/// let sums: Vec<i32> = partition_slice_lazy(Some(&values[..]), 2)
///     .unwrap()
///     .map(|chunk| chunk.iter().sum())
///     .collect();
/// assert_eq!(sums, vec![3, 7, 5]);
/// ```
pub fn partition_slice_lazy<T>(
    buffer: Option<&[T]>,
    size: usize,
) -> Result<SliceChunks<'_, T>, ZeroChunkSizeError> {
    let size = validate(size)?;
    Ok(SliceChunks {
        inner: buffer.map(|values| values.chunks(size)),
    })
}

/// Eagerly partitions `buffer` into sub-slices of at most `size` elements.
///
/// # Errors
///
/// Returns [`ZeroChunkSizeError`] if `size` is zero.
pub fn partition_slice<T>(
    buffer: Option<&[T]>,
    size: usize,
) -> Result<Vec<&[T]>, ZeroChunkSizeError> {
    Ok(partition_slice_lazy(buffer, size)?.collect())
}
