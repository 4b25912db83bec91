//! Command-line interface.
//!
//! The catalog and output directory are fixed; flags only tune transport,
//! logging and report output.

use clap::Parser;

use crate::config::{FetcherConfig, MAX_TIMEOUT_SECS};

/// sound-fetcher: downloads the breakout game's sounds into ./audio
#[derive(Parser, Debug)]
#[command(name = "sound-fetcher")]
#[command(about = "Downloads the breakout game's sound effects into ./audio")]
#[command(version)]
pub struct Cli {
    /// Print the built-in sound list and exit without downloading
    #[arg(long)]
    pub list: bool,

    /// Print the run report as JSON after downloading
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds (overrides SOUND_FETCHER_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS))]
    pub timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Merges CLI overrides into a config loaded from the environment.
    pub fn apply_to(&self, mut config: FetcherConfig) -> FetcherConfig {
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config
    }
}
