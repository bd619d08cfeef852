//! Configuration loading for rtt-eval.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for rtt-eval.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for sample extraction.
    pub extraction: ExtractionConfig,
    /// Settings for report output.
    pub report: ReportConfig,
}

/// Configuration for sample extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Whether the per-log sample cap is applied.
    pub cap_enabled: bool,
    /// Maximum number of duration samples taken from one log.
    pub max_samples: usize,
}

/// Configuration for report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Name of the results file written next to the processed logs.
    pub file_name: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            cap_enabled: true,
            max_samples: 10_000,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: "results".to_string(),
        }
    }
}

impl ExtractionConfig {
    /// The effective cap handed to the extractor, `None` when disabled.
    pub fn sample_cap(&self) -> Option<usize> {
        self.cap_enabled.then_some(self.max_samples)
    }
}

/// Default configuration file name.
const DEFAULT_CONFIG_FILE: &str = ".rtt-eval.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the default file (`.rtt-eval.toml`) or use defaults.
    ///
    /// This function searches for the configuration file in the current directory.
    /// If the file doesn't exist, default configuration is returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or try default locations.
    ///
    /// If a path is provided, loads from that path.
    /// Otherwise, tries to load from `.rtt-eval.toml` or uses defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_or_default(),
        }
    }
}
