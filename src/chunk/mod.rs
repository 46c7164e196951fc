//! Partition sequences into fixed-size chunks.
//!
//! Given `L` elements and a chunk size `N > 0`, every partition function
//! produces `ceil(L / N)` chunks in source order. All chunks except possibly
//! the last hold exactly `N` elements. `None` and empty inputs yield no
//! chunks at all, never a single empty chunk.
//!
//! | Function                 | Input            | Output                       |
//! |--------------------------|------------------|------------------------------|
//! | [`partition`]            | any iterable     | `Vec<Vec<T>>`                |
//! | [`partition_lazy`]       | any iterable     | [`Partitioned`] iterator     |
//! | [`partition_slice`]      | contiguous slice | `Vec<&[T]>` (zero-copy)      |
//! | [`partition_slice_lazy`] | contiguous slice | [`SliceChunks`] iterator     |
//!
//! Slice partitions hand out sub-slices of the original buffer, so numeric
//! data stays contiguous and unboxed.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::chunk::{partition, partition_slice};
//!
//! let chunks = partition(Some(vec![1, 2, 3, 4, 5, 6]), 2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
//!
//! let samples = [1.0_f64, 2.0, 3.0];
//! let windows = partition_slice(Some(&samples[..]), 2).unwrap();
//! assert_eq!(windows, vec![&[1.0, 2.0][..], &[3.0][..]]);
//! ```

mod error;
mod partition;
mod slice;

pub use error::ZeroChunkSizeError;
pub use partition::{Partitioned, partition, partition_lazy};
pub use slice::{SliceChunks, partition_slice, partition_slice_lazy};
