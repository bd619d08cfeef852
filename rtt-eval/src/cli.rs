//! Command-line interface for rtt-eval.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rtt-eval")]
#[command(about = "Round-trip latency statistics from ping-pong measurement logs")]
#[command(version)]
pub struct Cli {
    /// Measurement log files or directories containing <bytes>Bytes.csv logs
    pub paths: Vec<PathBuf>,

    /// Cap on duration samples taken from one log
    #[arg(long)]
    pub max_samples: Option<usize>,

    /// Disable the sample cap entirely
    #[arg(long, conflicts_with = "max_samples")]
    pub no_cap: bool,

    /// Path to config file (defaults to .rtt-eval.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    /// Only non-None optional values will override the config.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(max_samples) = self.max_samples {
            config.extraction.max_samples = max_samples;
        }

        if self.no_cap {
            config.extraction.cap_enabled = false;
        }
    }
}
