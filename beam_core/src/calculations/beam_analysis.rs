//! Simply-Supported Beam Analysis
//!
//! Ties the pieces together: reactions once, sample positions once, then V and
//! M at every position in ascending order.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::beam_analysis::{analyze, analyze_with};
//! use beam_core::loads::LoadSet;
//! use beam_core::settings::AnalysisSettings;
//!
//! let loads = LoadSet::builder(10.0)
//!     .point_load(5.0, 10.0)
//!     .udl(2.0, 0.0, 10.0)
//!     .build()
//!     .unwrap();
//!
//! // Just the diagram data
//! let samples = analyze(&loads).unwrap();
//! assert_eq!(samples.first().unwrap().x_m, 0.0);
//!
//! // Reactions and extremes as well
//! let results = analyze_with(&loads, &AnalysisSettings::default()).unwrap();
//! println!("RA = {:.2} kN", results.reactions.left_kn);
//! println!("Max moment: {:.2} kNm at {:.2} m",
//!     results.summary.max_moment_knm, results.summary.max_moment_position_m);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::loads::LoadSet;
use crate::settings::AnalysisSettings;

use super::internal_forces::InternalForces;
use super::reactions::{solve_reactions, Reactions};
use super::sampling::sample_positions;

/// One evaluated section of the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Distance from the left support (m)
    pub x_m: f64,
    /// Shear force V(x) (kN)
    pub shear_kn: f64,
    /// Bending moment M(x) (kN·m)
    pub moment_knm: f64,
}

/// Extreme values read off the sampled diagrams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagramSummary {
    /// Largest shear magnitude (kN)
    pub max_shear_kn: f64,
    /// Position of the largest shear magnitude (m)
    pub max_shear_position_m: f64,
    /// Largest (most sagging) moment (kN·m)
    pub max_moment_knm: f64,
    /// Position of the largest moment (m)
    pub max_moment_position_m: f64,
    /// Smallest (most hogging) moment (kN·m)
    pub min_moment_knm: f64,
    /// Position of the smallest moment (m)
    pub min_moment_position_m: f64,
}

impl DiagramSummary {
    /// Scan samples for extremes; the first sample wins ties.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_samples(samples: &[SamplePoint]) -> Option<Self> {
        let first = samples.first()?;
        let seed = DiagramSummary {
            max_shear_kn: first.shear_kn.abs(),
            max_shear_position_m: first.x_m,
            max_moment_knm: first.moment_knm,
            max_moment_position_m: first.x_m,
            min_moment_knm: first.moment_knm,
            min_moment_position_m: first.x_m,
        };

        Some(samples.iter().skip(1).fold(seed, |mut acc, s| {
            if s.shear_kn.abs() > acc.max_shear_kn {
                acc.max_shear_kn = s.shear_kn.abs();
                acc.max_shear_position_m = s.x_m;
            }
            if s.moment_knm > acc.max_moment_knm {
                acc.max_moment_knm = s.moment_knm;
                acc.max_moment_position_m = s.x_m;
            }
            if s.moment_knm < acc.min_moment_knm {
                acc.min_moment_knm = s.moment_knm;
                acc.min_moment_position_m = s.x_m;
            }
            acc
        }))
    }
}

/// Full output of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub reactions: Reactions,
    pub summary: DiagramSummary,
    /// Diagram data, ascending in x
    pub samples: Vec<SamplePoint>,
}

/// Analyze with default settings and return the diagram samples.
pub fn analyze(load_set: &LoadSet) -> BeamResult<Vec<SamplePoint>> {
    analyze_with(load_set, &AnalysisSettings::default()).map(|results| results.samples)
}

/// Analyze with explicit settings.
///
/// Settings are validated before any computation; an error means no output at all.
pub fn analyze_with(load_set: &LoadSet, settings: &AnalysisSettings) -> BeamResult<AnalysisResults> {
    settings.validate()?;

    let reactions = solve_reactions(load_set);
    let forces = InternalForces::new(load_set, reactions, settings.udl_moment);

    let samples: Vec<SamplePoint> = sample_positions(load_set, &settings.sampling)
        .into_iter()
        .map(|x_m| SamplePoint {
            x_m,
            shear_kn: forces.shear_at(x_m),
            moment_knm: forces.moment_at(x_m),
        })
        .collect();

    let summary = DiagramSummary::from_samples(&samples).ok_or_else(|| {
        BeamError::invalid_input("sampling.sample_count", "0", "Analysis produced no samples")
    })?;

    Ok(AnalysisResults {
        reactions,
        summary,
        samples,
    })
}
