//! Shared configuration types for CLI commands

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Verbose output (debug logging)
    pub verbose: bool,

    /// Whether to show progress spinners
    pub progress: bool,
}

impl CommonConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "searchlab=debug" } else { "warn" }
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            progress: true,
        }
    }
}

/// Interactive game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side controlled by the human
    pub human: Player,

    /// Seed for random tie-breaking between equally good moves; `None` keeps
    /// the first best move
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            seed: None,
        }
    }
}

/// Degrees-of-separation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreesConfig {
    /// Directory holding people.csv, movies.csv and stars.csv
    pub directory: PathBuf,

    /// Names given on the command line; `None` means prompt
    pub source: Option<String>,
    pub target: Option<String>,

    /// Where to write the JSON path report
    pub export: Option<PathBuf>,
}
