//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Guard and
/// session decisions log at `debug`; pass `RUST_LOG` to widen the filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("solicred=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(true)
        .try_init();
}
