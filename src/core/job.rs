//! Job envelope: a unit of work bound to its scheduling priority.

use std::fmt;

/// Identifier assigned to each job at submission, in submission order.
pub type JobId = u64;

/// Boxed zero-argument unit of work.
pub type JobFn = Box<dyn FnOnce() + Send + 'static>;

/// A submitted unit of work together with its priority.
///
/// Jobs are immutable once built and are consumed exactly once, either by
/// [`Job::run`] / [`Job::into_work`] or by being discarded with their queue.
pub struct Job {
    id: JobId,
    priority: f64,
    work: JobFn,
}

impl Job {
    /// Create a new job envelope.
    pub fn new<F>(id: JobId, priority: f64, work: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            id,
            priority,
            work: Box::new(work),
        }
    }

    /// Submission-order identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Scheduling priority; larger runs first.
    #[must_use]
    pub const fn priority(&self) -> f64 {
        self.priority
    }

    /// Take the work out of the envelope.
    #[must_use]
    pub fn into_work(self) -> JobFn {
        self.work
    }

    /// Run the work on the current thread.
    pub fn run(self) {
        (self.work)();
    }
}

impl fmt::Debug for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Job")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
