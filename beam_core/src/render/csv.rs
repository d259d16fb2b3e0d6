//! CSV export of diagram samples

use crate::calculations::SamplePoint;
use crate::errors::BeamResult;

use super::{check_samples, DiagramRenderer};

/// Header row written by [`CsvRenderer`]
pub const CSV_HEADER: &str = "x_m,shear_kn,moment_knm";

/// Writes `x_m,shear_kn,moment_knm` rows, one per sample, full precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl DiagramRenderer for CsvRenderer {
    fn media_type(&self) -> &'static str {
        "text/csv"
    }

    fn render(&self, samples: &[SamplePoint]) -> BeamResult<String> {
        check_samples(samples)?;

        let mut out = String::with_capacity(CSV_HEADER.len() + samples.len() * 32);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for s in samples {
            out.push_str(&format!("{},{},{}\n", s.x_m, s.shear_kn, s.moment_knm));
        }
        Ok(out)
    }
}
