//! # Analysis Settings
//!
//! Tunables for one analysis run. Defaults reproduce the reference behaviour:
//! 100 uniform samples, a 1 mm offset either side of each point load, and the
//! UDL moment term applied only inside the UDL interval.
//!
//! Settings serialize to JSON; missing fields fall back to their defaults.
//!
//! ```rust
//! use beam_core::settings::{AnalysisSettings, UdlMomentConvention};
//!
//! let settings: AnalysisSettings =
//!     serde_json::from_str(r#"{ "sampling": { "sample_count": 250 } }"#).unwrap();
//! assert_eq!(settings.sampling.sample_count, 250);
//! assert_eq!(settings.sampling.epsilon_m, 0.001);
//! assert_eq!(settings.udl_moment, UdlMomentConvention::WithinSpan);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Default number of uniform grid points over the span
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Largest accepted uniform grid size
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Default offset either side of a point load (m)
pub const DEFAULT_EPSILON_M: f64 = 0.001;

/// How the bending moment treats the UDL at sections past the end of the UDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UdlMomentConvention {
    /// Subtract `w (x - start)^2 / 2` only while `start <= x <= end`; no UDL
    /// term beyond `end`. This is the reference formula.
    #[default]
    WithinSpan,
    /// As `WithinSpan`, plus `W (x - centroid)` for `x > end`, so the moment
    /// closes to zero at support B for a UDL that stops short of it.
    Resultant,
}

impl UdlMomentConvention {
    /// Parse the snake_case name used in settings files and env vars
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "within_span" => Some(UdlMomentConvention::WithinSpan),
            "resultant" => Some(UdlMomentConvention::Resultant),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UdlMomentConvention::WithinSpan => "within_span",
            UdlMomentConvention::Resultant => "resultant",
        }
    }
}

impl std::fmt::Display for UdlMomentConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Controls the x-grid produced by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    /// Number of uniformly spaced points over `[0, L]`, ends included
    pub sample_count: usize,
    /// Offset either side of each point load (m)
    pub epsilon_m: f64,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        SamplingSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            epsilon_m: DEFAULT_EPSILON_M,
        }
    }
}

impl SamplingSettings {
    pub fn validate(&self) -> BeamResult<()> {
        if self.sample_count < 2 {
            return Err(BeamError::invalid_input(
                "sampling.sample_count",
                self.sample_count.to_string(),
                "At least two samples are needed to span the beam",
            ));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(BeamError::invalid_input(
                "sampling.sample_count",
                self.sample_count.to_string(),
                format!("At most {MAX_SAMPLE_COUNT} samples are supported"),
            ));
        }
        if !self.epsilon_m.is_finite() || self.epsilon_m <= 0.0 {
            return Err(BeamError::invalid_input(
                "sampling.epsilon_m",
                self.epsilon_m.to_string(),
                "Offset must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// All settings for one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub sampling: SamplingSettings,
    pub udl_moment: UdlMomentConvention,
}

impl AnalysisSettings {
    /// Set the uniform sample count and return self (builder pattern)
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sampling.sample_count = sample_count;
        self
    }

    /// Set the point-load offset and return self (builder pattern)
    pub fn with_epsilon_m(mut self, epsilon_m: f64) -> Self {
        self.sampling.epsilon_m = epsilon_m;
        self
    }

    /// Set the UDL moment convention and return self (builder pattern)
    pub fn with_udl_moment(mut self, convention: UdlMomentConvention) -> Self {
        self.udl_moment = convention;
        self
    }

    pub fn validate(&self) -> BeamResult<()> {
        self.sampling.validate()
    }
}
