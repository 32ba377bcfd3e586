//! Tests for failure sinks and containment

use priority_worker_pool::core::{contain, Failure, FailureSink, PoolError};
use priority_worker_pool::infra::{InMemoryFailureSink, TracingFailureSink};

#[test]
fn test_contain_passes_through_success() {
    let sink = InMemoryFailureSink::new(4);
    assert_eq!(contain("p-1", &sink, || Ok(7)), Some(7));
    assert!(sink.is_empty());
}

#[test]
fn test_contain_reports_error_once() {
    let sink = InMemoryFailureSink::new(4);
    let out: Option<()> = contain("p-JobQueue", &sink, || Err(PoolError::EmptyQueue));
    assert!(out.is_none());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].label, "p-JobQueue");
    assert_eq!(records[0].error, Some(PoolError::EmptyQueue));
}

#[test]
fn test_contain_catches_panic() {
    let sink = InMemoryFailureSink::new(4);
    let out: Option<()> = contain("p-3", &sink, || panic!("exploded"));
    assert!(out.is_none());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].panicked);
    assert_eq!(records[0].message, "exploded");
}

#[test]
fn test_closure_is_a_sink() {
    let labels = parking_lot::Mutex::new(Vec::new());
    let sink = |label: &str, _failure: &Failure| labels.lock().push(label.to_string());
    sink.notify("a", &Failure::Error(PoolError::TrackerUnderflow));
    sink.notify("b", &Failure::Error(PoolError::TrackerUnderflow));
    assert_eq!(*labels.lock(), vec!["a", "b"]);
}

#[test]
fn test_clear_keeps_total() {
    let sink = InMemoryFailureSink::new(4);
    sink.notify("a", &Failure::Error(PoolError::EmptyQueue));
    sink.clear();
    assert!(sink.is_empty());
    assert_eq!(sink.total(), 1);
}

#[test]
fn test_tracing_sink_accepts_failures() {
    let sink = TracingFailureSink;
    sink.notify("p-SubmitJob", &Failure::Error(PoolError::SubmitAfterShutdown));
}
