//! Error types for pool operations.

use thiserror::Error;

/// Errors produced by pool components.
///
/// Apart from construction errors, none of these reach the caller directly:
/// they are raised inside a contained boundary and forwarded to the pool's
/// failure sink.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoolError {
    /// A job was submitted after the pool was shut down.
    #[error("Pool is shut down")]
    SubmitAfterShutdown,
    /// A job was submitted with a priority that cannot be ordered.
    #[error("invalid priority: {0}")]
    InvalidPriority(f64),
    /// The queue was empty when a job was extracted.
    #[error("job queue is empty")]
    EmptyQueue,
    /// The completion tracker was decremented more times than it was incremented.
    #[error("completion tracker counter went negative")]
    TrackerUnderflow,
    /// The spawner could not start an execution.
    #[error("failed to spawn job execution: {0}")]
    Spawn(String),
    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
