//! Tests for utility helpers

use priority_worker_pool::util::{init_tracing, init_tracing_with, now_ms, DEFAULT_LOG_FILTER};

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(b >= a);
    assert!(a > 0);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    // Once a subscriber is installed, later installs are refused.
    assert!(!init_tracing_with(DEFAULT_LOG_FILTER));
    tracing::info!("tracing initialized twice without panicking");
}
