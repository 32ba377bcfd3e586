//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: pool lifecycle at `info`, everything
/// else at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn,priority_worker_pool=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]. Does nothing if a global subscriber already exists.
///
/// Thread names are included, so job events show the slot thread
/// (`{pool}-slot-{n}`) and scheduler events show `{pool}-scheduler`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Like [`init_tracing`], but with an explicit filter directive such as
/// `"priority_worker_pool=debug"`, ignoring `RUST_LOG`.
///
/// Returns `false` if the directive does not parse or a subscriber was
/// already installed.
pub fn init_tracing_with(directive: &str) -> bool {
    match EnvFilter::try_new(directive) {
        Ok(filter) => install(filter),
        Err(_) => false,
    }
}

fn install(filter: EnvFilter) -> bool {
    if tracing::dispatcher::has_been_set() {
        return false;
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init()
        .is_ok()
}
