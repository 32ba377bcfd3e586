//! Tests for runtime spawners

use priority_worker_pool::builders::PoolBuilder;
use priority_worker_pool::core::{PoolError, Spawn};
use priority_worker_pool::infra::InMemoryFailureSink;
use priority_worker_pool::runtime::{ThreadSpawner, TokioSpawner};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_thread_spawner_runs_job() {
    let (tx, rx) = crossbeam_channel::bounded(1);
    ThreadSpawner::new()
        .spawn("runtime-test".to_string(), Box::new(move || tx.send(42).unwrap()))
        .unwrap();
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 42);
}

#[test]
fn test_tokio_spawner_requires_runtime() {
    assert!(matches!(TokioSpawner::current(), Err(PoolError::Spawn(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_pool_on_tokio_blocking_pool() {
    let sink = InMemoryFailureSink::new(16);
    let pool = PoolBuilder::new("tokioPool")
        .worker_count(3)
        .failure_sink(sink.clone())
        .spawner(TokioSpawner::current().unwrap())
        .build()
        .unwrap();

    let ran = Arc::new(AtomicUsize::new(0));
    for i in 0..30 {
        let ran = Arc::clone(&ran);
        pool.submit(
            move || {
                std::thread::sleep(Duration::from_millis(1));
                ran.fetch_add(1, Ordering::SeqCst);
            },
            f64::from(i),
        );
    }
    pool.submit(|| panic!("tokio job failed"), 0.5);

    let pool = tokio::task::spawn_blocking(move || {
        pool.wait();
        pool
    })
    .await
    .unwrap();

    assert_eq!(ran.load(Ordering::SeqCst), 30);
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].panicked);
    assert!(records[0].label.starts_with("tokioPool-"));
    pool.shutdown();
}
