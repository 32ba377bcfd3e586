//! Tests for configuration validation

use priority_worker_pool::config::{PoolConfig, MIN_THREAD_STACK_SIZE};

#[test]
fn test_pool_config_validation() {
    let valid = PoolConfig::new("workers").with_worker_count(8);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_pool_config_invalid_worker_count() {
    let invalid = PoolConfig::new("workers").with_worker_count(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_pool_config_invalid_name() {
    let invalid = PoolConfig::new("   ").with_worker_count(2);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_pool_config_invalid_stack_size() {
    let invalid = PoolConfig::new("workers").with_thread_stack_size(MIN_THREAD_STACK_SIZE - 1);
    assert!(invalid.validate().is_err());

    let valid = PoolConfig::new("workers").with_thread_stack_size(MIN_THREAD_STACK_SIZE);
    assert!(valid.validate().is_ok());
}

#[test]
fn test_pool_config_from_json() {
    let cfg = PoolConfig::from_json_str(
        r#"{"name": "render", "worker_count": 6, "thread_stack_size": 1048576}"#,
    )
    .unwrap();
    assert_eq!(cfg.name, "render");
    assert_eq!(cfg.worker_count, 6);
    assert_eq!(cfg.thread_stack_size, Some(1_048_576));
}

#[test]
fn test_pool_config_from_json_defaults() {
    let cfg = PoolConfig::from_json_str(r#"{"name": "render"}"#).unwrap();
    assert!(cfg.worker_count >= 1);
    assert_eq!(cfg.thread_stack_size, None);
}

#[test]
fn test_pool_config_from_json_rejects_invalid() {
    let err = PoolConfig::from_json_str(r#"{"name": "render", "worker_count": 0}"#).unwrap_err();
    assert!(err.contains("worker_count"));

    let err = PoolConfig::from_json_str("{not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_pool_config_serde_round_trip() {
    let cfg = PoolConfig::new("render").with_worker_count(3);
    let json = serde_json::to_string(&cfg).unwrap();
    let back: PoolConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}
