//! # Beam Calculations
//!
//! The statics pipeline for a simply supported beam:
//!
//! - [`reactions`] - RA and RB from global equilibrium
//! - [`internal_forces`] - V(x) and M(x) at any section
//! - [`sampling`] - discontinuity-aware x-grid for the diagrams
//! - [`beam_analysis`] - `analyze` / `analyze_with`, the single entry point
//!
//! Every function here is pure: input in, result out, no shared state.

pub mod beam_analysis;
pub mod internal_forces;
pub mod reactions;
pub mod sampling;

// Re-export commonly used types
pub use beam_analysis::{analyze, analyze_with, AnalysisResults, DiagramSummary, SamplePoint};
pub use internal_forces::InternalForces;
pub use reactions::{solve_reactions, Reactions};
pub use sampling::sample_positions;
