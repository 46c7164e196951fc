#![cfg(all(feature = "memo", feature = "concurrent"))]

use fnkit::memo::{ConcurrentMemoized, Memo, memoize_concurrent};
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

// =============================================================================
// Basic Construction and Evaluation
// =============================================================================

#[rstest]
fn concurrent_memoized_defers_computation() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let _holder = ConcurrentMemoized::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        42
    });

    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[rstest]
fn concurrent_memoized_counter_producer_returns_first_value() {
    let counter = AtomicUsize::new(0);
    let holder = memoize_concurrent(|| counter.fetch_add(1, Ordering::SeqCst));

    assert_eq!(*holder.get(), 0);
    assert_eq!(*holder.get(), 0);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Thread Safety
// =============================================================================

#[rstest]
#[case(2)]
#[case(16)]
fn concurrent_memoized_runs_producer_once_under_contention(#[case] thread_count: usize) {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);
    let holder = Arc::new(ConcurrentMemoized::new(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        thread::yield_now();
        String::from("shared")
    }));
    let barrier = Arc::new(Barrier::new(thread_count));

    let handles: Vec<_> = (0..thread_count)
        .map(|_| {
            let holder = Arc::clone(&holder);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                holder.get().clone()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "shared");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn concurrent_memoized_usable_through_scoped_threads() {
    let holder = ConcurrentMemoized::new(|| (1..=100).sum::<u32>());

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(*holder.get(), 5050));
        }
    });
}

// =============================================================================
// Failure Policy
// =============================================================================

#[rstest]
fn concurrent_memoized_retries_after_panic() {
    let attempts = AtomicUsize::new(0);
    let holder = ConcurrentMemoized::new(|| {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst);
        assert!(attempt > 0, "first attempt fails");
        attempt
    });

    let failed = catch_unwind(AssertUnwindSafe(|| *holder.get()));
    assert!(failed.is_err());
    assert!(!holder.is_resolved());

    assert_eq!(*holder.get(), 1);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[rstest]
fn concurrent_memoized_resolved_into_inner_after_take_panics() {
    let mut holder = ConcurrentMemoized::resolved("ready".to_string());
    assert_eq!(holder.take().as_deref(), Some("ready"));

    let outcome = catch_unwind(AssertUnwindSafe(move || holder.into_inner()));
    assert!(outcome.is_err());
}

// =============================================================================
// Memo Trait
// =============================================================================

fn read_twice<M: Memo<u64> + Sync>(holder: &M) -> u64 {
    thread::scope(|scope| {
        let first = scope.spawn(|| *holder.get());
        let second = scope.spawn(|| *holder.get());
        first.join().unwrap() + second.join().unwrap()
    })
}

#[rstest]
fn concurrent_memoized_through_memo_trait() {
    let holder = ConcurrentMemoized::new(|| 21_u64);
    assert_eq!(read_twice(&holder), 42);
}
