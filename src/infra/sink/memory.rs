//! In-memory failure sink for testing and dev.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{Failure, FailureSink, PoolError};
use crate::util::clock::now_ms;

/// One contained failure as seen by the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRecord {
    /// Boundary label, e.g. `"pool-SubmitJob"` or `"pool-3"`.
    pub label: String,
    /// Rendered failure message.
    pub message: String,
    /// Whether the failure was a panic.
    pub panicked: bool,
    /// The pool error, when the failure was not a panic.
    pub error: Option<PoolError>,
    /// Timestamp milliseconds.
    pub recorded_at_ms: u128,
}

#[derive(Debug)]
struct Inner {
    records: Mutex<VecDeque<FailureRecord>>,
    max_records: usize,
    total: AtomicU64,
}

/// Bounded in-memory failure sink.
///
/// Clones share the same buffer, so a clone can be handed to the pool while
/// the first handle is kept for inspection. The oldest record is evicted once
/// `max_records` is reached; [`InMemoryFailureSink::total`] still counts it.
#[derive(Debug, Clone)]
pub struct InMemoryFailureSink {
    inner: Arc<Inner>,
}

impl InMemoryFailureSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_records: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                records: Mutex::new(VecDeque::with_capacity(max_records.min(1024))),
                max_records,
                total: AtomicU64::new(0),
            }),
        }
    }

    /// Retrieve a snapshot of stored records.
    #[must_use]
    pub fn records(&self) -> Vec<FailureRecord> {
        self.inner.records.lock().iter().cloned().collect()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.records.lock().len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of failures ever reported, including evicted ones.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.inner.total.load(Ordering::Relaxed)
    }

    /// Forget all stored records.
    pub fn clear(&self) {
        self.inner.records.lock().clear();
    }
}

impl FailureSink for InMemoryFailureSink {
    fn notify(&self, label: &str, failure: &Failure) {
        let record = FailureRecord {
            label: label.to_string(),
            message: failure.message(),
            panicked: failure.is_panic(),
            error: failure.as_error().cloned(),
            recorded_at_ms: now_ms(),
        };

        self.inner.total.fetch_add(1, Ordering::Relaxed);
        if self.inner.max_records == 0 {
            return;
        }
        let mut records = self.inner.records.lock();
        if records.len() >= self.inner.max_records {
            records.pop_front();
        }
        records.push_back(record);
    }
}
