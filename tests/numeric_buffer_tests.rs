#![cfg(all(feature = "find", feature = "chunk"))]
//! Buffer operations stamped out per element type.
//!
//! Every numeric element type runs the same suite against the generic
//! buffer functions: find-first with a default, index-of-first over a
//! buffer, and zero-copy partitioning.

use fnkit::chunk::partition_slice;
use fnkit::find::{FindDescriptor, NOT_FOUND, find_first_in, index_of_first_in};
use paste::paste;

macro_rules! numeric_buffer_suite {
    ($($element:ident => [$($value:expr),+ $(,)?], default: $default:expr);+ $(;)?) => {
        paste! {
            $(
                #[test]
                fn [<find_first_in_ $element>]() {
                    let buffer: &[$element] = &[$($value),+];
                    let threshold = buffer[1];
                    let descriptor = FindDescriptor::with_default(
                        move |value: &$element| *value >= threshold,
                        $default,
                    );

                    assert_eq!(find_first_in(Some(buffer), &descriptor), buffer[1]);
                    assert_eq!(find_first_in(Some(&buffer[..1]), &descriptor), $default);
                    assert_eq!(find_first_in(None, &descriptor), $default);
                }

                #[test]
                fn [<index_of_first_in_ $element>]() {
                    let buffer: &[$element] = &[$($value),+];
                    let last = buffer[buffer.len() - 1];

                    assert_eq!(
                        index_of_first_in(Some(buffer), |value: &$element| *value == buffer[0]),
                        0
                    );
                    assert_eq!(
                        index_of_first_in(Some(buffer), |value: &$element| *value == last),
                        isize::try_from(buffer.len() - 1).unwrap()
                    );
                    assert_eq!(
                        index_of_first_in(Some(buffer), |value: &$element| *value > last),
                        NOT_FOUND
                    );
                    assert_eq!(index_of_first_in::<$element, _>(None, |_| true), NOT_FOUND);
                }

                #[test]
                fn [<partition_slice_ $element>]() {
                    let buffer: &[$element] = &[$($value),+];
                    let chunks = partition_slice(Some(buffer), 2).unwrap();

                    assert_eq!(chunks.len(), buffer.len().div_ceil(2));
                    assert_eq!(chunks.concat(), buffer.to_vec());
                    assert!(partition_slice::<$element>(None, 2).unwrap().is_empty());
                }
            )+
        }
    };
}

numeric_buffer_suite! {
    i32 => [3, 5, 8, 13, 21], default: -1;
    i64 => [1_000_000_000_000, 2_000_000_000_000, 3_000_000_000_000], default: i64::MIN;
    u8 => [1, 2, 4, 8, 16, 32, 64], default: 0;
    f64 => [0.25, 0.5, 0.75, 1.0], default: -1.0;
}
