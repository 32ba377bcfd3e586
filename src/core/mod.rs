//! Core scheduling abstractions: jobs, slots, completion tracking, failure
//! containment, and the worker pool built from them.

pub mod containment;
pub mod error;
pub mod job;
pub mod queue;
pub mod slots;
pub mod spawn;
pub mod tracker;
pub mod worker_pool;

pub use containment::{contain, Failure, FailureSink};
pub use error::{AppResult, PoolError};
pub use job::{Job, JobFn, JobId};
pub use queue::JobQueue;
pub use slots::{SlotId, SlotToken, WorkerSlots};
pub use spawn::Spawn;
pub use tracker::CompletionTracker;
pub use worker_pool::{PoolStats, WorkerPool, SCHEDULE_LABEL_SUFFIX, SUBMIT_LABEL_SUFFIX};
