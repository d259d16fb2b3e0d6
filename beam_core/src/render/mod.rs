//! # Diagram Rendering
//!
//! Renderers turn the ordered samples from
//! [`analyze`](crate::calculations::analyze) into an artifact. The analysis
//! never depends on a renderer; callers pick one.
//!
//! - [`SvgRenderer`] - two-panel shear/moment plot
//! - [`CsvRenderer`] - one row per sample, for spreadsheets and plotting tools
//!
//! ```rust
//! use beam_core::calculations::analyze;
//! use beam_core::loads::LoadSet;
//! use beam_core::render::{CsvRenderer, DiagramRenderer, SvgRenderer};
//!
//! let loads = LoadSet::builder(10.0).point_load(5.0, 10.0).build().unwrap();
//! let samples = analyze(&loads).unwrap();
//!
//! let svg = SvgRenderer::default().render(&samples).unwrap();
//! assert!(svg.contains("Shear Force Diagram"));
//!
//! let csv = CsvRenderer.render(&samples).unwrap();
//! assert!(csv.starts_with("x_m,shear_kn,moment_knm"));
//! ```

pub mod csv;
pub mod svg;

pub use csv::CsvRenderer;
pub use svg::{DiagramStyle, SvgRenderer};

use crate::calculations::SamplePoint;
use crate::errors::{BeamError, BeamResult};

/// Something that can draw the sampled shear and moment diagrams.
pub trait DiagramRenderer {
    /// MIME type of the rendered output
    fn media_type(&self) -> &'static str;

    /// Render samples (ascending in x) to text
    fn render(&self, samples: &[SamplePoint]) -> BeamResult<String>;
}

/// Reject inputs no renderer can draw: an empty slice or non-finite values
fn check_samples(samples: &[SamplePoint]) -> BeamResult<()> {
    if samples.is_empty() {
        return Err(BeamError::invalid_input("samples", "[]", "Nothing to render"));
    }
    if let Some((i, bad)) = samples
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.x_m.is_finite() && s.shear_kn.is_finite() && s.moment_knm.is_finite()))
    {
        return Err(BeamError::invalid_input(
            format!("samples[{i}]"),
            format!("{bad:?}"),
            "Sample values must be finite",
        ));
    }
    Ok(())
}
