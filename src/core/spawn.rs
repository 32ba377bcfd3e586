//! Abstraction for starting a dispatched job's independent execution.

use super::{JobFn, PoolError};

/// Starts fire-and-forget executions for dispatched jobs.
///
/// The scheduler never joins what it spawns: completion is signalled by the
/// execution itself releasing its slot and decrementing the tracker.
pub trait Spawn: Send + Sync {
    /// Start `job` independently of the caller.
    ///
    /// `name` identifies the execution (pool and slot) for implementations
    /// that can label their threads.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Spawn`] if the execution could not be started; the
    /// job is dropped without running.
    fn spawn(&self, name: String, job: JobFn) -> Result<(), PoolError>;
}
