//! Tests for the in-memory priority queue

use priority_worker_pool::core::{Job, JobQueue, PoolError};
use priority_worker_pool::infra::InMemoryQueue;
use rand::seq::SliceRandom;

fn job(id: u64, priority: f64) -> Job {
    Job::new(id, priority, || {})
}

#[test]
fn test_pop_returns_highest_priority() {
    let queue = InMemoryQueue::new();
    let mut priorities: Vec<f64> = (0..100).map(f64::from).collect();
    priorities.shuffle(&mut rand::rng());
    for (id, priority) in priorities.iter().enumerate() {
        queue.insert(job(id as u64, *priority));
    }

    let mut last = f64::INFINITY;
    while let Ok(next) = queue.pop() {
        assert!(next.priority() <= last);
        last = next.priority();
    }
    assert!(queue.is_empty());
}

#[test]
fn test_negative_and_infinite_priorities() {
    let queue = InMemoryQueue::new();
    queue.insert(job(1, -5.0));
    queue.insert(job(2, f64::NEG_INFINITY));
    queue.insert(job(3, f64::INFINITY));
    queue.insert(job(4, 0.0));

    let order: Vec<_> = std::iter::from_fn(|| queue.pop().ok()).map(|j| j.id()).collect();
    assert_eq!(order, vec![3, 4, 1, 2]);
}

#[test]
fn test_pop_on_empty_queue() {
    let queue = InMemoryQueue::with_capacity(4);
    assert_eq!(queue.pop().unwrap_err(), PoolError::EmptyQueue);
}

#[test]
fn test_clear_reports_removed_jobs() {
    let queue = InMemoryQueue::new();
    for id in 0..5 {
        queue.insert(job(id, 1.0));
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.clear(), 5);
    assert_eq!(queue.len(), 0);
}
