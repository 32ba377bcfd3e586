//! Tests for error types

use priority_worker_pool::core::{AppResult, Failure, PoolError};

#[test]
fn test_error_display() {
    assert_eq!(PoolError::SubmitAfterShutdown.to_string(), "Pool is shut down");
    assert_eq!(PoolError::EmptyQueue.to_string(), "job queue is empty");
    assert!(PoolError::Spawn("no threads".into()).to_string().contains("no threads"));
    assert!(PoolError::InvalidConfig("bad".into()).to_string().contains("bad"));
}

#[test]
fn test_error_equality() {
    assert_eq!(PoolError::TrackerUnderflow, PoolError::TrackerUnderflow);
    assert_ne!(PoolError::EmptyQueue, PoolError::SubmitAfterShutdown);
}

#[test]
fn test_failure_from_error() {
    let failure = Failure::from(PoolError::EmptyQueue);
    assert!(!failure.is_panic());
    assert_eq!(failure.as_error(), Some(&PoolError::EmptyQueue));
    assert_eq!(failure.to_string(), "job queue is empty");
}

#[test]
fn test_failure_panic_message() {
    let owned = Failure::Panic(Box::new(String::from("owned message")));
    assert_eq!(owned.message(), "owned message");
    assert_eq!(owned.to_string(), "panic: owned message");

    let opaque = Failure::Panic(Box::new(17_u32));
    assert_eq!(opaque.message(), "non-string panic payload");
    assert!(opaque.as_error().is_none());
}

#[test]
fn test_app_result_wraps_pool_error() {
    fn start() -> AppResult<()> {
        Err(PoolError::SubmitAfterShutdown)?;
        Ok(())
    }
    let err = start().unwrap_err();
    assert_eq!(
        err.downcast_ref::<PoolError>(),
        Some(&PoolError::SubmitAfterShutdown)
    );
}
