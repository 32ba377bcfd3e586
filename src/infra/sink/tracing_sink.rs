//! Failure sink that logs through `tracing`.

use tracing::error;

use crate::core::{Failure, FailureSink};

/// Logs every contained failure at `error` level with the boundary label.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFailureSink;

impl FailureSink for TracingFailureSink {
    fn notify(&self, label: &str, failure: &Failure) {
        error!(
            label = label,
            panicked = failure.is_panic(),
            failure = %failure,
            "Contained failure"
        );
    }
}
