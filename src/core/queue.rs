//! Priority container abstraction consumed by the scheduler.

use super::{Job, PoolError};

/// Ordered container yielding the highest-priority pending job on demand.
///
/// Implementations synchronize internally: the scheduler, submitting threads
/// and shutdown all call these methods concurrently through a shared
/// reference, and no outer lock is taken around them.
pub trait JobQueue: Send + Sync {
    /// Add a pending job.
    fn insert(&self, job: Job);

    /// Remove and return the job with the greatest priority.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::EmptyQueue`] when nothing is pending.
    fn pop(&self) -> Result<Job, PoolError>;

    /// Number of pending jobs.
    fn len(&self) -> usize;

    /// Whether no jobs are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard every pending job without running it, returning how many were dropped.
    fn clear(&self) -> usize;
}
