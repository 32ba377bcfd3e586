//! Tests for the pool builder

use priority_worker_pool::builders::PoolBuilder;
use priority_worker_pool::config::PoolConfig;
use priority_worker_pool::core::PoolError;
use priority_worker_pool::infra::{InMemoryFailureSink, InMemoryQueue, TracingFailureSink};
use priority_worker_pool::runtime::ThreadSpawner;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_builder_requires_failure_sink() {
    let err = PoolBuilder::new("noSink").worker_count(2).build().unwrap_err();
    assert!(matches!(err, PoolError::InvalidConfig(msg) if msg.contains("failure sink")));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let err = PoolBuilder::new("zero")
        .worker_count(0)
        .failure_sink(TracingFailureSink)
        .build()
        .unwrap_err();
    assert!(matches!(err, PoolError::InvalidConfig(_)));
}

#[test]
fn test_builder_with_custom_parts() {
    let sink = InMemoryFailureSink::new(16);
    let pool = PoolBuilder::new("custom")
        .worker_count(2)
        .thread_stack_size(256 * 1024)
        .failure_sink(sink.clone())
        .queue(InMemoryQueue::with_capacity(64))
        .spawner(ThreadSpawner::new())
        .build()
        .unwrap();

    let ran = Arc::new(AtomicUsize::new(0));
    for i in 0..16 {
        let ran = Arc::clone(&ran);
        pool.submit(
            move || {
                ran.fetch_add(1, Ordering::SeqCst);
            },
            f64::from(i),
        );
    }
    pool.wait();

    assert_eq!(pool.name(), "custom");
    assert_eq!(ran.load(Ordering::SeqCst), 16);
    assert!(sink.is_empty());
    pool.shutdown();
}

#[test]
fn test_builder_from_config() {
    let builder = PoolBuilder::from_config(PoolConfig::new("fromConfig").with_worker_count(5));
    assert_eq!(builder.name(), "fromConfig");
    assert_eq!(builder.config().worker_count, 5);
}

#[test]
fn test_anonymous_builder_generates_name() {
    let builder = PoolBuilder::anonymous();
    assert!(builder.name().starts_with("pool-"));

    let pool = builder.failure_sink(TracingFailureSink).build().unwrap();
    assert!(pool.name().starts_with("pool-"));
    assert!(pool.is_active());
}
