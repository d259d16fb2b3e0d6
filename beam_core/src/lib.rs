//! # beam_core - Simply Supported Beam Analysis
//!
//! `beam_core` computes support reactions, shear force V(x) and bending
//! moment M(x) for a simply supported beam (pin at x = 0, roller at x = L)
//! carrying point loads and one uniformly distributed load, and samples them
//! densely enough that the diagrams show every discontinuity.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Validated inputs**: a [`LoadSet`] cannot exist in an invalid state
//! - **JSON-First**: inputs, settings and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, LoadSet};
//!
//! let loads = LoadSet::builder(10.0)
//!     .point_load(5.0, 10.0)
//!     .build()
//!     .unwrap();
//!
//! let samples = analyze(&loads).unwrap();
//! let peak = samples.iter().map(|s| s.moment_knm).fold(f64::MIN, f64::max);
//! assert!((peak - 25.0).abs() < 0.01);
//! ```
//!
//! ## Modules
//!
//! - [`loads`] - Beam, point loads, UDL, and the validated [`LoadSet`]
//! - [`calculations`] - Reactions, internal forces, sampling, orchestration
//! - [`settings`] - Sampling and convention settings
//! - [`render`] - SVG and CSV diagram renderers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON inputs and atomic artifact writes

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod render;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, analyze_with, AnalysisResults, DiagramSummary, Reactions, SamplePoint};
pub use errors::{BeamError, BeamResult};
pub use loads::{Beam, DistributedLoad, LoadSet, PointLoad};
pub use settings::{AnalysisSettings, SamplingSettings, UdlMomentConvention};
