//! Builder to construct a worker pool from configuration and pluggable parts.

use std::sync::Arc;

use crate::config::PoolConfig;
use crate::core::{FailureSink, JobQueue, PoolError, Spawn, WorkerPool};
use crate::infra::queue::InMemoryQueue;
use crate::runtime::ThreadSpawner;

/// Step-by-step construction of a [`WorkerPool`].
///
/// The failure sink is required; the queue defaults to [`InMemoryQueue`] and
/// the spawner to [`ThreadSpawner`] using the configured stack size.
pub struct PoolBuilder {
    config: PoolConfig,
    sink: Option<Arc<dyn FailureSink>>,
    queue: Option<Arc<dyn JobQueue>>,
    spawner: Option<Arc<dyn Spawn>>,
}

impl PoolBuilder {
    /// Start a builder for a pool named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(PoolConfig::new(name))
    }

    /// Start a builder from an existing configuration.
    #[must_use]
    pub fn from_config(config: PoolConfig) -> Self {
        Self {
            config,
            sink: None,
            queue: None,
            spawner: None,
        }
    }

    /// Start a builder with a generated `pool-<uuid>` name.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::from_config(PoolConfig::default())
    }

    /// Pool name being built.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Configuration being built.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Set the number of execution slots.
    #[must_use]
    pub fn worker_count(mut self, worker_count: usize) -> Self {
        self.config.worker_count = worker_count;
        self
    }

    /// Set the stack size for job threads started by the default spawner.
    #[must_use]
    pub fn thread_stack_size(mut self, bytes: usize) -> Self {
        self.config.thread_stack_size = Some(bytes);
        self
    }

    /// Set the failure sink (required).
    #[must_use]
    pub fn failure_sink<S>(mut self, sink: S) -> Self
    where
        S: FailureSink + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Replace the default in-memory queue.
    #[must_use]
    pub fn queue<Q>(mut self, queue: Q) -> Self
    where
        Q: JobQueue + 'static,
    {
        self.queue = Some(Arc::new(queue));
        self
    }

    /// Replace the default thread-per-job spawner.
    #[must_use]
    pub fn spawner<S>(mut self, spawner: S) -> Self
    where
        S: Spawn + 'static,
    {
        self.spawner = Some(Arc::new(spawner));
        self
    }

    /// Validate and start the pool.
    ///
    /// # Errors
    ///
    /// - `PoolError::InvalidConfig` if no failure sink was set or the
    ///   configuration is invalid
    /// - `PoolError::Spawn` if the scheduler thread cannot be started
    pub fn build(self) -> Result<WorkerPool, PoolError> {
        let sink = self
            .sink
            .ok_or_else(|| PoolError::InvalidConfig("failure sink is required".into()))?;
        let queue: Arc<dyn JobQueue> = match self.queue {
            Some(queue) => queue,
            None => Arc::new(InMemoryQueue::new()),
        };
        let spawner: Arc<dyn Spawn> = match self.spawner {
            Some(spawner) => spawner,
            None => Arc::new(ThreadSpawner::new().with_stack_size(self.config.thread_stack_size)),
        };

        WorkerPool::from_parts(self.config, sink, queue, spawner)
    }
}

impl std::fmt::Debug for PoolBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolBuilder")
            .field("config", &self.config)
            .field("has_sink", &self.sink.is_some())
            .field("custom_queue", &self.queue.is_some())
            .field("custom_spawner", &self.spawner.is_some())
            .finish()
    }
}
