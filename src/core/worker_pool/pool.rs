//! Pool facade: the object callers submit to, wait on, and shut down.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::scheduler::spawn_scheduler;
use super::{PoolCounters, PoolStats, Shared};
use crate::config::PoolConfig;
use crate::core::{contain, FailureSink, JobQueue, PoolError, Spawn};
use crate::infra::queue::InMemoryQueue;
use crate::runtime::ThreadSpawner;

/// Bounded-concurrency job runner that always dispatches the highest-priority
/// pending job.
///
/// # Design
///
/// - **One scheduler thread**: extracts jobs in priority order and blocks on
///   slot acquisition when all `worker_count` slots are busy
/// - **Fire-and-forget executions**: each dispatched job runs independently
///   and releases its slot when it finishes
/// - **Contained failures**: submission, scheduling and execution errors go
///   to the failure sink, never to the caller
pub struct WorkerPool {
    /// State shared with the scheduler and executions.
    shared: Arc<Shared>,

    /// Scheduler thread handle, taken by `shutdown`.
    scheduler: Mutex<Option<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Create a pool with the default in-memory queue and one OS thread per
    /// dispatched job, and start its scheduler.
    ///
    /// # Errors
    ///
    /// - `PoolError::InvalidConfig` if the configuration is invalid
    /// - `PoolError::Spawn` if the scheduler thread cannot be started
    pub fn new<S>(config: PoolConfig, sink: S) -> Result<Self, PoolError>
    where
        S: FailureSink + 'static,
    {
        let spawner = ThreadSpawner::new().with_stack_size(config.thread_stack_size);
        Self::from_parts(
            config,
            Arc::new(sink),
            Arc::new(InMemoryQueue::new()),
            Arc::new(spawner),
        )
    }

    /// Create a pool from explicit components and start its scheduler.
    ///
    /// # Errors
    ///
    /// Same as [`WorkerPool::new`].
    pub fn from_parts(
        config: PoolConfig,
        sink: Arc<dyn FailureSink>,
        queue: Arc<dyn JobQueue>,
        spawner: Arc<dyn Spawn>,
    ) -> Result<Self, PoolError> {
        config.validate().map_err(PoolError::InvalidConfig)?;

        let (shared, signals) =
            Shared::new(&config.name, config.worker_count, queue, sink, spawner);
        let scheduler = spawn_scheduler(Arc::clone(&shared), signals)
            .map_err(|e| PoolError::Spawn(e.to_string()))?;

        info!(
            pool = %config.name,
            worker_count = config.worker_count,
            "WorkerPool initialized"
        );

        Ok(Self {
            shared,
            scheduler: Mutex::new(Some(scheduler)),
        })
    }

    /// Submit a job with the given priority; larger priorities run first.
    ///
    /// Never blocks on capacity. Failures are reported to the failure sink
    /// under `"{name}-SubmitJob"` and the job is dropped:
    ///
    /// - `PoolError::SubmitAfterShutdown` once the pool has been shut down
    /// - `PoolError::InvalidPriority` for a NaN priority
    pub fn submit<F>(&self, work: F, priority: f64)
    where
        F: FnOnce() + Send + 'static,
    {
        let shared = &self.shared;
        let accepted = contain(&shared.labels.submit, shared.sink.as_ref(), || {
            shared.enqueue(work, priority)
        });
        if accepted.is_none() {
            PoolCounters::incr(&shared.counters.rejected, 1);
        }
    }

    /// Block until every submitted job has finished or been discarded.
    ///
    /// Returns immediately when nothing is outstanding, so every job must be
    /// submitted before calling this.
    pub fn wait(&self) {
        self.shared.tracker.wait();
    }

    /// Like [`WorkerPool::wait`], giving up after `timeout`.
    ///
    /// Returns `true` if every job finished in time.
    #[must_use]
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.shared.tracker.wait_timeout(timeout)
    }

    /// Stop picking up jobs.
    ///
    /// Pending jobs are discarded without running; jobs already dispatched run
    /// to completion. Blocks until the scheduler thread has exited, except when
    /// called from the scheduler thread itself (e.g. from the failure sink).
    /// Calling it again has no effect.
    pub fn shutdown(&self) {
        if !self.shared.request_shutdown() {
            return;
        }

        info!(pool = %self.shared.name, "Shutting down worker pool");

        let Some(handle) = self.scheduler.lock().take() else {
            return;
        };
        if handle.thread().id() == thread::current().id() {
            return;
        }
        if handle.join().is_err() {
            warn!(pool = %self.shared.name, "Scheduler thread panicked");
        }

        info!(pool = %self.shared.name, "Worker pool shut down complete");
    }

    /// Whether the pool still accepts jobs.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.is_active()
    }

    /// Pool name used in failure labels.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Number of jobs waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }

    /// Get current pool statistics.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.shared.stats()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Signal shutdown but don't join; pending jobs are dropped by the scheduler.
        if self.shared.request_shutdown() {
            debug!(pool = %self.shared.name, "WorkerPool dropped without explicit shutdown - scheduler detached");
        }
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("name", &self.shared.name)
            .field("active", &self.is_active())
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
