//! Scheduler loop: extracts the highest-priority job, waits for a free slot,
//! and hands the job to the spawner without waiting for it to finish.
//!
//! The loop has two states. While RUNNING it alternates between sleeping on
//! the wake channel (queue empty) and scheduling steps (queue non-empty).
//! Once the pool's liveness flag is cleared it moves to STOPPED: every pending
//! job is discarded and the thread exits.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::select;
use tracing::{debug, info, warn};

use super::{PoolCounters, SchedulerSignals, Shared};
use crate::core::{contain, CompletionTracker, Failure, FailureSink, Job, PoolError, SlotToken};

/// Start the scheduler thread for `shared`.
pub(super) fn spawn_scheduler(
    shared: Arc<Shared>,
    signals: SchedulerSignals,
) -> io::Result<JoinHandle<()>> {
    let scheduler = Scheduler { shared, signals };
    thread::Builder::new()
        .name(format!("{}-scheduler", scheduler.shared.name))
        .spawn(move || scheduler.run())
}

pub(super) struct Scheduler {
    shared: Arc<Shared>,
    signals: SchedulerSignals,
}

impl Scheduler {
    fn run(&self) {
        debug!(pool = %self.shared.name, "Scheduler started");

        while self.shared.is_active() {
            if self.shared.queue.is_empty() {
                select! {
                    recv(self.signals.wake_rx) -> _ => {}
                    recv(self.signals.shutdown_rx) -> _ => {}
                }
                continue;
            }
            self.schedule_once();
        }

        self.stop();
    }

    /// One scheduling step inside the scheduling boundary.
    pub(super) fn schedule_once(&self) {
        let shared = &self.shared;
        contain(&shared.labels.schedule, shared.sink.as_ref(), || self.step());
    }

    fn step(&self) -> Result<(), PoolError> {
        let job = self.shared.queue.pop()?;

        // Blocks while every slot is busy; shutdown cuts the wait short.
        let Some(token) = self
            .shared
            .slots
            .acquire_or_cancel(&self.signals.shutdown_rx)
        else {
            return self.discard(job);
        };
        if !self.shared.is_active() {
            drop(token);
            return self.discard(job);
        }

        self.dispatch(token, job)
    }

    fn dispatch(&self, token: SlotToken, job: Job) -> Result<(), PoolError> {
        let shared = &self.shared;
        let slot = token.id();
        let job_id = job.id();
        let label = shared.labels.slot(slot);

        PoolCounters::incr(&shared.counters.active, 1);
        let completion = Completion {
            tracker: Arc::clone(&shared.tracker),
            sink: Arc::clone(&shared.sink),
            counters: Arc::clone(&shared.counters),
            label: label.clone(),
        };
        let sink = Arc::clone(&shared.sink);
        let counters = Arc::clone(&shared.counters);
        let work = job.into_work();

        debug!(pool = %shared.name, job_id, slot, "Dispatching job");

        let result = shared.spawner.spawn(
            format!("{}-slot-{slot}", shared.name),
            Box::new(move || {
                // Declared in this order so the slot is back before the tracker moves.
                let _completion = completion;
                let _token = token;

                let finished = contain(&label, sink.as_ref(), || {
                    work();
                    Ok(())
                });
                if finished.is_some() {
                    PoolCounters::incr(&counters.completed, 1);
                    debug!(job_id, slot, "Job completed");
                } else {
                    PoolCounters::incr(&counters.failed, 1);
                }
            }),
        );

        if result.is_err() {
            PoolCounters::incr(&shared.counters.failed, 1);
        }
        result
    }

    /// Drop a popped job that will never be dispatched.
    fn discard(&self, job: Job) -> Result<(), PoolError> {
        debug!(pool = %self.shared.name, job_id = job.id(), "Discarding job after shutdown");
        drop(job);
        PoolCounters::incr(&self.shared.counters.discarded, 1);
        self.shared.tracker.done()
    }

    /// Transition to STOPPED: clear everything still pending.
    fn stop(&self) {
        let shared = &self.shared;
        let discarded = contain(&shared.labels.schedule, shared.sink.as_ref(), || {
            shared.discard_pending()
        });
        if let Some(discarded @ 1..) = discarded {
            warn!(pool = %shared.name, discarded, "Discarded pending jobs on shutdown");
        }
        info!(pool = %shared.name, "Scheduler stopped");
    }
}

/// Marks a dispatched job finished when dropped, whether it returned,
/// panicked, or never started because spawning failed.
struct Completion {
    tracker: Arc<CompletionTracker>,
    sink: Arc<dyn FailureSink>,
    counters: Arc<PoolCounters>,
    label: String,
}

impl Drop for Completion {
    fn drop(&mut self) {
        PoolCounters::decr(&self.counters.active);
        if let Err(err) = self.tracker.done() {
            self.sink.notify(&self.label, &Failure::Error(err));
        }
    }
}
