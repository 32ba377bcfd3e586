//! Priority worker pool: a fixed number of execution slots fed by a single
//! scheduler thread that always dispatches the highest-priority pending job.
//!
//! # Key Features
//!
//! - **Bounded concurrency**: at most `worker_count` jobs run at once
//! - **Priority order**: pending jobs leave the queue by descending priority
//! - **Failure isolation**: panicking jobs are reported, never propagated
//! - **No polling**: the scheduler sleeps until a submission or shutdown wakes it
//!
//! # Example
//!
//! ```rust,ignore
//! use priority_worker_pool::config::PoolConfig;
//! use priority_worker_pool::core::{Failure, WorkerPool};
//!
//! let pool = WorkerPool::new(
//!     PoolConfig::new("ingest").with_worker_count(4),
//!     |label: &str, failure: &Failure| eprintln!("{label}: {failure}"),
//! )?;
//!
//! pool.submit(|| index_document(), 10.0);
//! pool.submit(|| refresh_cache(), 1.0);
//! pool.wait();
//! ```

mod pool;
mod scheduler;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionTracker, FailureSink, Job, JobId, JobQueue, PoolError, SlotId, Spawn, WorkerSlots};

pub use pool::WorkerPool;

/// Label suffix for failures caught at the submission boundary.
pub const SUBMIT_LABEL_SUFFIX: &str = "SubmitJob";

/// Label suffix for failures caught at the scheduling boundary.
pub const SCHEDULE_LABEL_SUFFIX: &str = "JobQueue";

/// Statistics about pool utilization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Number of execution slots.
    pub worker_count: usize,
    /// Slots currently free.
    pub idle_slots: usize,
    /// Jobs waiting in the queue.
    pub queued_jobs: usize,
    /// Jobs dispatched and not yet finished.
    pub active_jobs: u64,
    /// Jobs submitted but not yet finished (the completion tracker).
    pub outstanding_jobs: usize,
    /// Jobs accepted by `submit`.
    pub submitted_jobs: u64,
    /// Jobs that ran to completion.
    pub completed_jobs: u64,
    /// Jobs that panicked or could not be started.
    pub failed_jobs: u64,
    /// Submissions refused (after shutdown or with an invalid priority).
    pub rejected_jobs: u64,
    /// Pending jobs dropped by shutdown.
    pub discarded_jobs: u64,
}

/// Internal counters for pool statistics (thread-safe).
#[derive(Debug, Default)]
pub(crate) struct PoolCounters {
    pub active: AtomicU64,
    pub submitted: AtomicU64,
    pub completed: AtomicU64,
    pub failed: AtomicU64,
    pub rejected: AtomicU64,
    pub discarded: AtomicU64,
}

impl PoolCounters {
    pub fn incr(counter: &AtomicU64, n: u64) {
        counter.fetch_add(n, Ordering::Relaxed);
    }

    pub fn decr(counter: &AtomicU64) {
        counter.fetch_sub(1, Ordering::Relaxed);
    }

    /// Get a snapshot of the counters; queue, slot and tracker figures are filled by the caller.
    pub fn snapshot(&self) -> PoolStats {
        PoolStats {
            active_jobs: self.active.load(Ordering::Relaxed),
            submitted_jobs: self.submitted.load(Ordering::Relaxed),
            completed_jobs: self.completed.load(Ordering::Relaxed),
            failed_jobs: self.failed.load(Ordering::Relaxed),
            rejected_jobs: self.rejected.load(Ordering::Relaxed),
            discarded_jobs: self.discarded.load(Ordering::Relaxed),
            ..PoolStats::default()
        }
    }
}

/// Failure-sink labels for one pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Labels {
    name: String,
    pub submit: String,
    pub schedule: String,
}

impl Labels {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            submit: format!("{name}-{SUBMIT_LABEL_SUFFIX}"),
            schedule: format!("{name}-{SCHEDULE_LABEL_SUFFIX}"),
        }
    }

    /// Label for the execution boundary of `slot`.
    pub fn slot(&self, slot: SlotId) -> String {
        format!("{}-{slot}", self.name)
    }
}

/// State shared by the facade, the scheduler thread and every execution.
pub(crate) struct Shared {
    pub name: String,
    pub labels: Labels,
    pub active: AtomicBool,
    pub queue: Arc<dyn JobQueue>,
    pub slots: WorkerSlots,
    pub tracker: Arc<CompletionTracker>,
    pub sink: Arc<dyn FailureSink>,
    pub spawner: Arc<dyn Spawn>,
    pub counters: Arc<PoolCounters>,
    wake_tx: Sender<()>,
    shutdown_tx: Sender<()>,
    next_id: AtomicU64,
}

/// Receiving ends handed to the scheduler thread.
pub(crate) struct SchedulerSignals {
    pub wake_rx: Receiver<()>,
    pub shutdown_rx: Receiver<()>,
}

impl Shared {
    pub fn new(
        name: &str,
        worker_count: usize,
        queue: Arc<dyn JobQueue>,
        sink: Arc<dyn FailureSink>,
        spawner: Arc<dyn Spawn>,
    ) -> (Arc<Self>, SchedulerSignals) {
        // Capacity 1: repeated wakes coalesce while the scheduler is busy.
        let (wake_tx, wake_rx) = bounded(1);
        let (shutdown_tx, shutdown_rx) = bounded(1);
        let shared = Arc::new(Self {
            name: name.to_string(),
            labels: Labels::new(name),
            active: AtomicBool::new(true),
            queue,
            slots: WorkerSlots::new(worker_count),
            tracker: Arc::new(CompletionTracker::new()),
            sink,
            spawner,
            counters: Arc::new(PoolCounters::default()),
            wake_tx,
            shutdown_tx,
            next_id: AtomicU64::new(0),
        });
        (shared, SchedulerSignals { wake_rx, shutdown_rx })
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Flip the liveness flag and wake the scheduler. Returns `false` if the
    /// pool was already stopped.
    pub fn request_shutdown(&self) -> bool {
        if !self.active.swap(false, Ordering::AcqRel) {
            return false;
        }
        // Full means a signal is already pending.
        let _ = self.shutdown_tx.try_send(());
        true
    }

    /// Admit one job: count it, queue it, wake the scheduler.
    pub fn enqueue<F>(&self, work: F, priority: f64) -> Result<JobId, PoolError>
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.is_active() {
            return Err(PoolError::SubmitAfterShutdown);
        }
        if priority.is_nan() {
            return Err(PoolError::InvalidPriority(priority));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        // Count before inserting so a fast execution can never decrement first.
        self.tracker.add(1);
        self.queue.insert(Job::new(id, priority, work));
        PoolCounters::incr(&self.counters.submitted, 1);

        // Shutdown landed between the liveness check and the insert; the
        // scheduler may already have drained and exited.
        if !self.is_active() {
            let discarded = self.discard_pending()?;
            debug!(pool = %self.name, job_id = id, discarded, "Job submitted during shutdown was discarded");
            return Ok(id);
        }

        // Full means a wake is already pending.
        let _ = self.wake_tx.try_send(());
        debug!(pool = %self.name, job_id = id, priority, "Job submitted");
        Ok(id)
    }

    /// Drop every queued job without running it and release its tracker count.
    ///
    /// Returns how many jobs were dropped. Safe to call from several threads:
    /// each job is cleared, and counted, exactly once.
    pub fn discard_pending(&self) -> Result<usize, PoolError> {
        let discarded = self.queue.clear();
        if discarded > 0 {
            PoolCounters::incr(&self.counters.discarded, discarded as u64);
            self.tracker.done_n(discarded)?;
        }
        Ok(discarded)
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            worker_count: self.slots.capacity(),
            idle_slots: self.slots.available(),
            queued_jobs: self.queue.len(),
            outstanding_jobs: self.tracker.outstanding(),
            ..self.counters.snapshot()
        }
    }
}
