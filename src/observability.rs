//! Structured logging setup.
//!
//! Wires the `tracing` subscriber with an environment-overridable filter
//! and optional JSON output.

use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Initialize tracing for the process.
///
/// The default filter level is `info`, raised to `debug` when `verbose`
/// is set; `RUST_LOG` overrides both.
///
/// # Panics
///
/// Panics if a tracing subscriber has already been installed in this
/// process.
pub fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json {
        let json_layer = fmt::layer().json().with_target(true);
        Registry::default().with(env_filter).with(json_layer).init();
    } else {
        let fmt_layer = fmt::layer().with_target(true);
        Registry::default().with(env_filter).with(fmt_layer).init();
    }

    tracing::debug!("tracing initialized: verbose={}, json={}", verbose, json);
}
