//! Pool configuration structures.

use std::env;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Environment variable holding the pool name.
pub const ENV_POOL_NAME: &str = "PRIORITY_POOL_NAME";
/// Environment variable holding the worker count.
pub const ENV_WORKER_COUNT: &str = "PRIORITY_POOL_WORKERS";
/// Environment variable holding the per-job thread stack size in bytes.
pub const ENV_STACK_SIZE: &str = "PRIORITY_POOL_STACK_SIZE";

/// Smallest thread stack size accepted by validation.
pub const MIN_THREAD_STACK_SIZE: usize = 16 * 1024;

/// Worker pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Pool name, used only to build failure labels and thread names.
    pub name: String,
    /// Number of execution slots (maximum concurrently running jobs).
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
    /// Stack size for job threads; platform default when absent.
    #[serde(default)]
    pub thread_stack_size: Option<usize>,
}

fn default_worker_count() -> usize {
    num_cpus::get()
}

/// Generated name for pools that are not given one.
#[must_use]
pub fn generated_pool_name() -> String {
    format!("pool-{}", Uuid::new_v4())
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            name: generated_pool_name(),
            worker_count: default_worker_count(),
            thread_stack_size: None,
        }
    }
}

impl PoolConfig {
    /// Configuration named `name` with one slot per CPU.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the number of execution slots.
    #[must_use]
    pub const fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the stack size for job threads.
    #[must_use]
    pub const fn with_thread_stack_size(mut self, bytes: usize) -> Self {
        self.thread_stack_size = Some(bytes);
        self
    }

    /// Validate pool configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.worker_count == 0 {
            return Err("worker_count must be greater than 0".into());
        }
        if let Some(size) = self.thread_stack_size {
            if size < MIN_THREAD_STACK_SIZE {
                return Err(format!(
                    "thread_stack_size must be at least {MIN_THREAD_STACK_SIZE} bytes"
                ));
            }
        }
        Ok(())
    }

    /// Parse pool configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the environment, after loading a `.env` file
    /// if one is present. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable that failed to parse, or a
    /// validation message.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is fine; real environment variables still apply.
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();
        if let Ok(name) = env::var(ENV_POOL_NAME) {
            cfg.name = name;
        }
        if let Ok(raw) = env::var(ENV_WORKER_COUNT) {
            cfg.worker_count = raw
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_WORKER_COUNT}: {e}"))?;
        }
        if let Ok(raw) = env::var(ENV_STACK_SIZE) {
            cfg.thread_stack_size = Some(
                raw.trim()
                    .parse()
                    .map_err(|e| format!("{ENV_STACK_SIZE}: {e}"))?,
            );
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
