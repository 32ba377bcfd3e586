//! Tests for the completion tracker and slot set

use priority_worker_pool::core::{CompletionTracker, PoolError, WorkerSlots};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_wait_unblocks_after_concurrent_completions() {
    let tracker = Arc::new(CompletionTracker::new());
    tracker.add(8);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(5));
                tracker.done().unwrap();
            })
        })
        .collect();

    tracker.wait();
    assert_eq!(tracker.outstanding(), 0);
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_underflow_is_an_error() {
    let tracker = CompletionTracker::new();
    tracker.add(1);
    tracker.done().unwrap();
    assert_eq!(tracker.done(), Err(PoolError::TrackerUnderflow));
    assert_eq!(tracker.outstanding(), 0);
}

#[test]
fn test_slots_bound_concurrent_holders() {
    let slots = WorkerSlots::new(3);
    let held: Vec<_> = (0..3).map(|_| slots.acquire().unwrap()).collect();
    assert_eq!(slots.available(), 0);
    assert!(slots.try_acquire().is_none());

    let mut ids: Vec<_> = held.iter().map(|t| t.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);

    drop(held);
    assert_eq!(slots.available(), slots.capacity());
}
