//! # Priority Worker Pool
//!
//! A bounded-concurrency job runner that always dispatches the highest-priority
//! pending job.
//!
//! Programs that produce jobs faster than they can run them need a hard cap on
//! simultaneous work, priority-ordered selection among queued jobs, and
//! isolation so that one failing job cannot take down the caller or the pool.
//!
//! ## Key Features
//!
//! - **Fixed Execution Slots**: at most `worker_count` jobs run at once
//! - **Priority Scheduling**: a single scheduler thread extracts jobs by
//!   descending `f64` priority, FIFO among equal priorities
//! - **Failure Containment**: panics inside jobs, rejected submissions and
//!   scheduling errors are routed to a caller-supplied failure sink
//! - **Drain and Shutdown**: `wait` blocks until every submitted job is done;
//!   `shutdown` discards pending jobs and lets running ones finish
//!
//! ## Example
//!
//! ```rust,ignore
//! use priority_worker_pool::config::PoolConfig;
//! use priority_worker_pool::core::{Failure, WorkerPool};
//!
//! let pool = WorkerPool::new(
//!     PoolConfig::new("thumbnails").with_worker_count(8),
//!     |label: &str, failure: &Failure| eprintln!("{label}: {failure}"),
//! )?;
//!
//! for image in images {
//!     let priority = if image.is_visible() { 10.0 } else { 1.0 };
//!     pool.submit(move || render_thumbnail(image), priority);
//! }
//! pool.wait();
//! pool.shutdown();
//! ```
//!
//! Components can be swapped through [`builders::PoolBuilder`]: a custom
//! [`core::JobQueue`], or a [`runtime::TokioSpawner`] to run jobs on a tokio
//! blocking pool instead of dedicated threads.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and the worker pool.
pub mod core;
/// Configuration models for pools.
pub mod config;
/// Builders to construct pools from configuration.
pub mod builders;
/// Infrastructure adapters for queues and failure sinks.
pub mod infra;
/// Runtime adapters that start job executions.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::builders::PoolBuilder;
pub use crate::config::PoolConfig;
pub use crate::core::{Failure, FailureSink, PoolError, PoolStats, WorkerPool};
