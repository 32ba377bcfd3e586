//! Infrastructure adapters: queue backends and failure sinks.

pub mod queue;
pub mod sink;
pub use queue::InMemoryQueue;
pub use sink::InMemoryFailureSink;
pub use sink::TracingFailureSink;
