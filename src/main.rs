//! l2met - Metrics relay
//!
//! Entry point: parses flags, resolves the configuration, and hands it
//! to the rest of the process.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use l2met::observability::init_tracing;
use l2met::{Cli, Config};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);

    tracing::info!("l2met v{} starting...", env!("CARGO_PKG_VERSION"));

    // Resolution is fail-open: a missing or malformed connection URL
    // yields empty connection fields and a diagnostic, never a startup
    // failure.
    let (config, diagnostic) = Config::from_cli(cli);
    if let Some(err) = diagnostic {
        tracing::warn!("store connection unavailable: {err}");
    }

    tracing::debug!(?config, "configuration resolved");

    tracing::info!(
        "{}: port={} outlet={:?} receiver={} partitions={}",
        config.app_name,
        config.port,
        config.outlet,
        config.receiver,
        config.max_partitions,
    );
}
