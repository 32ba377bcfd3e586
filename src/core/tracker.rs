//! Completion tracker: counts submitted-but-unfinished jobs and backs `wait`.

use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use super::PoolError;

/// Counter of outstanding jobs with a blocking wait-until-zero.
///
/// Uses a `parking_lot` Mutex + Condvar pair, so waiters sleep instead of
/// polling and every waiter is released when the count reaches zero.
#[derive(Debug, Default)]
pub struct CompletionTracker {
    outstanding: Mutex<usize>,
    zero: Condvar,
}

impl CompletionTracker {
    /// Create a tracker with nothing outstanding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outstanding: Mutex::new(0),
            zero: Condvar::new(),
        }
    }

    /// Record `n` newly submitted jobs.
    pub fn add(&self, n: usize) {
        *self.outstanding.lock() += n;
    }

    /// Record one finished job.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TrackerUnderflow`] if nothing was outstanding; the
    /// counter stays at zero.
    pub fn done(&self) -> Result<(), PoolError> {
        self.done_n(1)
    }

    /// Record `n` finished or discarded jobs at once.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::TrackerUnderflow`] if fewer than `n` jobs were
    /// outstanding; the counter is left unchanged.
    pub fn done_n(&self, n: usize) -> Result<(), PoolError> {
        if n == 0 {
            return Ok(());
        }
        let mut outstanding = self.outstanding.lock();
        let remaining = outstanding
            .checked_sub(n)
            .ok_or(PoolError::TrackerUnderflow)?;
        *outstanding = remaining;
        if remaining == 0 {
            self.zero.notify_all();
        }
        Ok(())
    }

    /// Current number of outstanding jobs.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        *self.outstanding.lock()
    }

    /// Block until nothing is outstanding. Returns immediately if already zero.
    pub fn wait(&self) {
        let mut outstanding = self.outstanding.lock();
        while *outstanding > 0 {
            self.zero.wait(&mut outstanding);
        }
    }

    /// Block until nothing is outstanding or `timeout` elapses.
    ///
    /// Returns `true` if the count reached zero.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut outstanding = self.outstanding.lock();
        if *outstanding == 0 {
            return true;
        }
        let result = self
            .zero
            .wait_while_for(&mut outstanding, |count| *count > 0, timeout);
        !result.timed_out() || *outstanding == 0
    }
}
