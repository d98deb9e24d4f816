//! CLI infrastructure for the searchlab toolkit
//!
//! This module provides the command-line interface for playing against the
//! minimax player, solving positions and finding degrees of separation.

use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;
pub mod output;
pub mod prompt;

use config::CommonConfig;

/// Install the global `tracing` subscriber, logging to stderr.
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is honoured and the
/// fallback is the config's default filter.
pub fn init_tracing(common: &CommonConfig) {
    let filter = if common.verbose {
        EnvFilter::new(common.default_log_filter())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(common.default_log_filter()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
