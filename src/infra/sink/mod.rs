//! Failure sink implementations.

pub mod memory;
pub mod tracing_sink;

pub use memory::{FailureRecord, InMemoryFailureSink};
pub use tracing_sink::TracingFailureSink;
