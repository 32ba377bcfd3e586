//! Configuration models for worker pools.

pub mod pool;

pub use pool::{PoolConfig, ENV_POOL_NAME, ENV_STACK_SIZE, ENV_WORKER_COUNT, MIN_THREAD_STACK_SIZE};
