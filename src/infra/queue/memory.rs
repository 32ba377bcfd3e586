//! In-memory priority queue backed by a binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use parking_lot::Mutex;

use crate::core::{Job, JobQueue, PoolError};

/// Wrapper to make a Job orderable by priority (highest first) and FIFO within priority.
struct PriorityJob {
    job: Job,
}

impl PartialEq for PriorityJob {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityJob {}

impl PartialOrd for PriorityJob {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PriorityJob {
    /// Priority with `-0.0` folded into `0.0`; total_cmp would order them apart.
    fn key(&self) -> f64 {
        self.job.priority() + 0.0
    }
}

impl Ord for PriorityJob {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.key().total_cmp(&other.key()) {
            // FIFO within same priority: lower id wins (reversed for max-heap)
            Ordering::Equal => other.job.id().cmp(&self.job.id()),
            other => other,
        }
    }
}

/// In-memory job queue using a priority heap.
///
/// O(log n) insert and pop, O(1) len. Equal priorities leave in submission
/// (job id) order. Internally locked with a `parking_lot::Mutex`.
#[derive(Default)]
pub struct InMemoryQueue {
    jobs: Mutex<BinaryHeap<PriorityJob>>,
}

impl InMemoryQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` jobs before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jobs: Mutex::new(BinaryHeap::with_capacity(capacity)),
        }
    }
}

impl JobQueue for InMemoryQueue {
    fn insert(&self, job: Job) {
        self.jobs.lock().push(PriorityJob { job });
    }

    fn pop(&self) -> Result<Job, PoolError> {
        self.jobs
            .lock()
            .pop()
            .map(|pj| pj.job)
            .ok_or(PoolError::EmptyQueue)
    }

    fn len(&self) -> usize {
        self.jobs.lock().len()
    }

    fn clear(&self) -> usize {
        // Drop the jobs outside the lock; their captures may run arbitrary Drop code.
        let drained = std::mem::take(&mut *self.jobs.lock());
        drained.len()
    }
}

impl std::fmt::Debug for InMemoryQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryQueue")
            .field("len", &self.len())
            .finish()
    }
}
