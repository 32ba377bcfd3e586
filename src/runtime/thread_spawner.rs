//! One dedicated OS thread per dispatched job.

use std::thread;

use crate::core::{JobFn, PoolError, Spawn};

/// Spawner that runs each job on its own named OS thread.
///
/// The thread is detached; the job's slot token bounds how many exist at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner {
    stack_size: Option<usize>,
}

impl ThreadSpawner {
    /// Create a spawner using the platform default stack size.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack_size: None }
    }

    /// Use `stack_size` bytes for every spawned thread (`None` for the default).
    #[must_use]
    pub const fn with_stack_size(mut self, stack_size: Option<usize>) -> Self {
        self.stack_size = stack_size;
        self
    }
}

impl Spawn for ThreadSpawner {
    fn spawn(&self, name: String, job: JobFn) -> Result<(), PoolError> {
        let mut builder = thread::Builder::new().name(name);
        if let Some(size) = self.stack_size {
            builder = builder.stack_size(size);
        }
        builder
            .spawn(job)
            .map(drop)
            .map_err(|e| PoolError::Spawn(e.to_string()))
    }
}
