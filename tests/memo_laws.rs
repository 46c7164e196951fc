#![cfg(feature = "memo")]
//! Property-based tests for memoizing holder laws.
//!
//! - **Idempotence**: every `get` returns the value of the first `get`
//! - **At most once**: the producer runs once however often `get` is called
//! - **Map composition**: `map(f).map(g)` equals `map(|x| g(&f(x)))`

use fnkit::memo::Memoized;
use proptest::prelude::*;
use std::cell::Cell;

// =============================================================================
// Idempotence Law
// =============================================================================

proptest! {
    /// A stateful producer never leaks a later state through `get`.
    #[test]
    fn prop_memoized_idempotence(start in any::<i64>(), reads in 1_usize..32) {
        let mut next = start;
        let holder = Memoized::new(move || {
            let current = next;
            next = next.wrapping_add(1);
            current
        });

        for _ in 0..reads {
            prop_assert_eq!(*holder.get(), start);
        }
    }
}

proptest! {
    #[test]
    fn prop_memoized_idempotence_string(value in ".*") {
        let expected = value.clone();
        let holder = Memoized::new(move || value.clone());

        prop_assert_eq!(holder.get(), &expected);
        prop_assert_eq!(holder.get(), &expected);
    }
}

// =============================================================================
// At-Most-Once Law
// =============================================================================

proptest! {
    #[test]
    fn prop_memoized_runs_producer_at_most_once(value in any::<i32>(), reads in 0_usize..16) {
        let calls = Cell::new(0);
        let holder = Memoized::new(|| {
            calls.set(calls.get() + 1);
            value
        });

        for _ in 0..reads {
            holder.get();
        }
        prop_assert_eq!(calls.get(), usize::from(reads > 0));
    }
}

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_memoized_map_identity(value in any::<i32>()) {
        let mapped = Memoized::new(move || value).map(|inner| *inner);
        prop_assert_eq!(*mapped.get(), value);
    }
}

proptest! {
    #[test]
    fn prop_memoized_map_composition(value in any::<i32>()) {
        let function1 = |x: &i32| x.wrapping_add(1);
        let function2 = |x: &i32| x.wrapping_mul(2);

        let chained = Memoized::new(move || value).map(function1).map(function2);
        let composed = Memoized::new(move || value).map(move |x| function2(&function1(x)));

        prop_assert_eq!(*chained.get(), *composed.get());
    }
}
