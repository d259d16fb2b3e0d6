//! CLI configuration.
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults ([`AnalysisSettings::default`]);
//! 2. an optional JSON settings file (`--config path`);
//! 3. environment variables.
//!
//! ## Environment Variables
//!
//! - `BEAM_SAMPLE_COUNT` - Uniform grid size (default: 100, min: 2, max: 100000)
//! - `BEAM_EPSILON_M` - Offset of the samples injected around point loads (default: 0.001)
//! - `BEAM_UDL_MOMENT` - `within_span` or `resultant` (default: `within_span`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::path::Path;

use anyhow::{Context, Result};
use beam_core::file_io;
use beam_core::{AnalysisSettings, UdlMomentConvention};

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from the optional settings file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read, an environment
    /// variable cannot be parsed, or the merged settings are invalid.
    pub fn load(settings_path: Option<&Path>) -> Result<Self> {
        Self::from_sources(settings_path, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`] with an explicit variable lookup.
    pub fn from_sources<F>(settings_path: Option<&Path>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut analysis = match settings_path {
            Some(path) => file_io::load_settings(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => AnalysisSettings::default(),
        };

        if let Some(raw) = var("BEAM_SAMPLE_COUNT") {
            let count = raw
                .trim()
                .parse()
                .with_context(|| format!("BEAM_SAMPLE_COUNT must be a whole number, got '{raw}'"))?;
            analysis = analysis.with_sample_count(count);
        }

        if let Some(raw) = var("BEAM_EPSILON_M") {
            let epsilon = raw
                .trim()
                .parse()
                .with_context(|| format!("BEAM_EPSILON_M must be a number, got '{raw}'"))?;
            analysis = analysis.with_epsilon_m(epsilon);
        }

        if let Some(raw) = var("BEAM_UDL_MOMENT") {
            let convention = UdlMomentConvention::from_name(raw.trim()).with_context(|| {
                format!("BEAM_UDL_MOMENT must be 'within_span' or 'resultant', got '{raw}'")
            })?;
            analysis = analysis.with_udl_moment(convention);
        }

        let config = Self {
            analysis,
            log_level: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format: var("LOG_FORMAT").unwrap_or_else(|| "text".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the analysis settings are rejected by the core
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        self.analysis
            .validate()
            .context("Invalid analysis settings")?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Sample count: {}", self.analysis.sampling.sample_count);
        tracing::debug!("  Epsilon: {} m", self.analysis.sampling.epsilon_m);
        tracing::debug!("  UDL moment convention: {}", self.analysis.udl_moment);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}
