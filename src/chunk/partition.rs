//! Partitioning of arbitrary iterables.

use std::iter::FusedIterator;

use super::ZeroChunkSizeError;
use super::error::validate;

/// A lazy, single-pass iterator over fixed-size chunks.
///
/// Created by [`partition_lazy`]. Chunks are materialized one at a time, so a
/// caller can stop early without paying for the rest of the source. The
/// iterator cannot be restarted.
///
/// # Examples
///
/// ```rust
/// use fnkit::chunk::partition_lazy;
///
/// let mut chunks = partition_lazy(Some(1..=5), 2).unwrap();
/// assert_eq!(chunks.next(), Some(vec![1, 2]));
/// assert_eq!(chunks.next(), Some(vec![3, 4]));
/// assert_eq!(chunks.next(), Some(vec![5]));
/// assert_eq!(chunks.next(), None);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Partitioned<I> {
    source: Option<I>,
    size: usize,
}

impl<I: Iterator> Iterator for Partitioned<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source.as_mut()?;
        let chunk: Vec<I::Item> = source.by_ref().take(self.size).collect();
        if chunk.len() < self.size {
            self.source = None;
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.as_ref().map_or((0, Some(0)), |source| {
            let (lower, upper) = source.size_hint();
            (
                lower.div_ceil(self.size),
                upper.map(|upper| upper.div_ceil(self.size)),
            )
        })
    }
}

impl<I: Iterator> FusedIterator for Partitioned<I> {}

/// Lazily partitions `sequence` into chunks of at most `size` elements.
///
/// # Errors
///
/// Returns [`ZeroChunkSizeError`] if `size` is zero.
pub fn partition_lazy<I>(
    sequence: Option<I>,
    size: usize,
) -> Result<Partitioned<I::IntoIter>, ZeroChunkSizeError>
where
    I: IntoIterator,
{
    let size = validate(size)?;
    Ok(Partitioned {
        source: sequence.map(IntoIterator::into_iter),
        size,
    })
}

/// Eagerly partitions `sequence` into chunks of at most `size` elements.
///
/// # Errors
///
/// Returns [`ZeroChunkSizeError`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use fnkit::chunk::partition;
///
/// let chunks = partition(Some(vec![1, 2, 3, 4, 5, 6]), 4).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2, 3, 4], vec![5, 6]]);
///
/// let nothing = partition(None::<Vec<i32>>, 4).unwrap();
/// assert!(nothing.is_empty());
/// ```
pub fn partition<I>(
    sequence: Option<I>,
    size: usize,
) -> Result<Vec<Vec<I::Item>>, ZeroChunkSizeError>
where
    I: IntoIterator,
{
    let chunks: Vec<_> = partition_lazy(sequence, size)?.collect();
    tracing::trace!(
        target: "fnkit::chunk",
        chunk_size = size,
        chunk_count = chunks.len(),
        "partitioned sequence"
    );
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 6], 2, vec![vec![1, 2], vec![3, 4], vec![5, 6]])]
    #[case(vec![1, 2, 3, 4, 5, 6], 4, vec![vec![1, 2, 3, 4], vec![5, 6]])]
    #[case(vec![1, 2, 3], 3, vec![vec![1, 2, 3]])]
    #[case(vec![1, 2, 3], 10, vec![vec![1, 2, 3]])]
    #[case(vec![1], 1, vec![vec![1]])]
    fn test_partition_shapes(
        #[case] input: Vec<i32>,
        #[case] size: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        assert_eq!(partition(Some(input), size).unwrap(), expected);
    }

    #[rstest]
    fn test_partition_empty_yields_no_chunks() {
        let chunks = partition(Some(Vec::<i32>::new()), 3).unwrap();
        assert!(chunks.is_empty());
    }

    #[rstest]
    fn test_partition_zero_size_is_rejected() {
        assert_eq!(partition(Some(vec![1]), 0), Err(ZeroChunkSizeError));
        assert!(partition_lazy(None::<Vec<i32>>, 0).is_err());
    }

    #[rstest]
    fn test_partition_lazy_size_hint() {
        let chunks = partition_lazy(Some(vec![1, 2, 3, 4, 5]), 2).unwrap();
        assert_eq!(chunks.size_hint(), (3, Some(3)));
    }

    #[rstest]
    fn test_partition_lazy_stops_pulling_source_early() {
        let mut pulled = 0;
        let source = (0..100).inspect(|_| pulled += 1);
        let first: Vec<Vec<i32>> = partition_lazy(Some(source), 3).unwrap().take(1).collect();
        assert_eq!(first, vec![vec![0, 1, 2]]);
        assert_eq!(pulled, 3);
    }

    #[rstest]
    fn test_partition_lazy_is_fused() {
        let mut chunks = partition_lazy(Some(vec![1, 2]), 2).unwrap();
        assert_eq!(chunks.next(), Some(vec![1, 2]));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }
}
