// src/logging.rs
//! Diagnostics setup. Everything goes to stderr so stdout carries only the greeting.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Verbosity follows `RUST_LOG`, falling back to `warn`. A second call is a
/// no-op: the first subscriber stays installed.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
