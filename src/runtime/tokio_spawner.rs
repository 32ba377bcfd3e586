//! Tokio runtime spawner implementation.

use std::sync::Arc;

use crate::core::{JobFn, PoolError, Spawn};

/// Tokio-based spawner that runs jobs on a runtime's blocking thread pool.
///
/// Jobs are plain blocking closures, so they go through `spawn_blocking`
/// rather than the async worker threads.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioSpawner {
    /// Create a new `TokioSpawner` from a tokio runtime handle.
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Create a `TokioSpawner` for the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Spawn` when called outside a tokio runtime.
    pub fn current() -> Result<Self, PoolError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|e| PoolError::Spawn(e.to_string()))
    }
}

impl Spawn for TokioSpawner {
    fn spawn(&self, _name: String, job: JobFn) -> Result<(), PoolError> {
        // Detached: the JoinHandle is dropped, completion flows through the slot token.
        drop(self.handle.spawn_blocking(job));
        Ok(())
    }
}

impl std::fmt::Debug for TokioSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioSpawner").finish_non_exhaustive()
    }
}
