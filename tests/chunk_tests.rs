#![cfg(feature = "chunk")]

use fnkit::chunk::{ZeroChunkSizeError, partition, partition_lazy, partition_slice_lazy};
use rstest::rstest;

// =============================================================================
// partition
// =============================================================================

#[rstest]
#[case(2, vec![vec![1, 2], vec![3, 4], vec![5, 6]])]
#[case(4, vec![vec![1, 2, 3, 4], vec![5, 6]])]
#[case(6, vec![vec![1, 2, 3, 4, 5, 6]])]
#[case(10, vec![vec![1, 2, 3, 4, 5, 6]])]
#[case(1, vec![vec![1], vec![2], vec![3], vec![4], vec![5], vec![6]])]
fn partition_one_to_six(#[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
    assert_eq!(partition(Some(vec![1, 2, 3, 4, 5, 6]), size), Ok(expected));
}

#[rstest]
fn partition_none_and_empty_yield_no_chunks() {
    assert_eq!(partition(None::<Vec<i32>>, 3), Ok(Vec::new()));
    assert_eq!(partition(Some(Vec::<i32>::new()), 3), Ok(Vec::new()));
}

#[rstest]
fn partition_rejects_zero_size() {
    assert_eq!(partition(Some(vec![1, 2]), 0), Err(ZeroChunkSizeError));
    assert_eq!(
        ZeroChunkSizeError.to_string(),
        "chunk size must be greater than zero"
    );
}

#[rstest]
fn partition_accepts_any_iterable() {
    let chunks = partition(Some("chunked".chars()), 3).unwrap();
    let words: Vec<String> = chunks
        .into_iter()
        .map(|chunk| chunk.into_iter().collect())
        .collect();
    assert_eq!(words, vec!["chu", "nke", "d"]);
}

// =============================================================================
// Lazy forms
// =============================================================================

#[rstest]
fn partition_lazy_consumes_only_what_is_asked() {
    let mut pulled = 0;
    let source = (1..).inspect(|_| pulled += 1);
    let first_two: Vec<Vec<u32>> = partition_lazy(Some(source), 3).unwrap().take(2).collect();

    assert_eq!(first_two, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(pulled, 6);
}

#[rstest]
fn partition_lazy_is_fused() {
    let mut chunks = partition_lazy(Some(vec![1, 2, 3]), 2).unwrap();
    assert_eq!(chunks.next(), Some(vec![1, 2]));
    assert_eq!(chunks.next(), Some(vec![3]));
    assert_eq!(chunks.next(), None);
    assert_eq!(chunks.next(), None);
}

#[rstest]
fn partition_slice_lazy_is_double_ended() {
    let values = [1, 2, 3, 4, 5];
    let mut chunks = partition_slice_lazy(Some(&values[..]), 2).unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks.next_back(), Some(&[5][..]));
    assert_eq!(chunks.next(), Some(&[1, 2][..]));
    assert_eq!(chunks.next(), Some(&[3, 4][..]));
    assert_eq!(chunks.next(), None);
}

#[rstest]
fn partition_slice_lazy_none_is_empty() {
    let mut chunks = partition_slice_lazy::<u8>(None, 4).unwrap();
    assert_eq!(chunks.len(), 0);
    assert_eq!(chunks.next(), None);
}
