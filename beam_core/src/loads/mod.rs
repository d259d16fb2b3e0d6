//! Beam geometry and the loads applied to it
//!
//! A [`LoadSet`] is the complete, validated input to one analysis: the
//! [`Beam`] span, zero or more [`PointLoad`]s and exactly one
//! [`DistributedLoad`]. Support A is a pin at x = 0 and support B a roller at
//! x = L.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::LoadSet;
//!
//! let loads = LoadSet::builder(10.0)
//!     .point_load(5.0, 10.0)     // 10 kN at midspan
//!     .udl(2.0, 0.0, 10.0)       // 2 kN/m over the full span
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(loads.total_vertical_load_kn(), 30.0);
//! ```
//!
//! # JSON Format
//! ```json
//! {
//!   "beam": { "length_m": 10.0 },
//!   "point_loads": [ { "position_m": 5.0, "magnitude_kn": 10.0 } ],
//!   "udl": { "intensity_kn_per_m": 2.0, "start_m": 0.0, "end_m": 10.0 }
//! }
//! ```
//! `point_loads` and `udl` may be omitted.

pub mod distributed;
pub mod point;

pub use distributed::DistributedLoad;
pub use point::PointLoad;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Most point loads a single load set may carry
pub const MAX_POINT_LOADS: usize = 1000;

/// Simply supported span. Supports sit at x = 0 and x = `length_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Span between supports (m)
    length_m: f64,
}

impl Beam {
    /// Create a beam, rejecting non-positive or non-finite lengths
    pub fn new(length_m: f64) -> BeamResult<Self> {
        let beam = Beam { length_m };
        beam.validate()?;
        Ok(beam)
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Whether `x_m` lies on the span, supports included
    pub fn contains(&self, x_m: f64) -> bool {
        (0.0..=self.length_m).contains(&x_m)
    }

    fn validate(&self) -> BeamResult<()> {
        ensure_finite("beam.length_m", self.length_m)?;
        if self.length_m <= 0.0 {
            return Err(BeamError::invalid_input(
                "beam.length_m",
                self.length_m.to_string(),
                "Beam length must be positive",
            ));
        }
        Ok(())
    }
}

/// The validated loads on one simply supported beam.
///
/// Every constructor validates, so a `LoadSet` value always satisfies:
/// positive finite length, finite magnitudes, every point load inside
/// `[0, L]`, and a UDL interval with `0 <= start <= end <= L`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLoadSet")]
pub struct LoadSet {
    beam: Beam,
    point_loads: Vec<PointLoad>,
    udl: DistributedLoad,
}

impl LoadSet {
    /// Validate and assemble a load set
    pub fn new(beam: Beam, point_loads: Vec<PointLoad>, udl: DistributedLoad) -> BeamResult<Self> {
        let load_set = LoadSet {
            beam,
            point_loads,
            udl,
        };
        load_set.validate()?;
        Ok(load_set)
    }

    /// Parse and validate a load set from JSON.
    ///
    /// Unlike going through `serde_json::from_str::<LoadSet>`, validation
    /// failures keep their structured [`BeamError`] variant.
    pub fn from_json(json: &str) -> BeamResult<Self> {
        let raw: RawLoadSet = serde_json::from_str(json)?;
        LoadSet::try_from(raw)
    }

    /// Start a builder for a beam of span `length_m`
    pub fn builder(length_m: f64) -> LoadSetBuilder {
        LoadSetBuilder::new(length_m)
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    pub fn length_m(&self) -> f64 {
        self.beam.length_m()
    }

    pub fn point_loads(&self) -> &[PointLoad] {
        &self.point_loads
    }

    pub fn udl(&self) -> &DistributedLoad {
        &self.udl
    }

    /// Sum of all point-load magnitudes (kN)
    pub fn total_point_load_kn(&self) -> f64 {
        self.point_loads.iter().map(PointLoad::magnitude_kn).sum()
    }

    /// Point loads plus the UDL resultant (kN)
    pub fn total_vertical_load_kn(&self) -> f64 {
        self.total_point_load_kn() + self.udl.resultant_kn()
    }

    /// Moment of every load about support A, the UDL taken at its centroid (kN·m)
    pub fn moment_about_left_support_knm(&self) -> f64 {
        self.point_loads
            .iter()
            .map(PointLoad::moment_about_left_support_knm)
            .fold(self.udl.moment_about_left_support_knm(), |acc, m| acc + m)
    }

    fn validate(&self) -> BeamResult<()> {
        self.beam.validate()?;
        let length_m = self.beam.length_m();

        if self.point_loads.len() > MAX_POINT_LOADS {
            return Err(BeamError::invalid_input(
                "point_loads",
                self.point_loads.len().to_string(),
                format!("At most {MAX_POINT_LOADS} point loads are supported"),
            ));
        }

        for (i, load) in self.point_loads.iter().enumerate() {
            ensure_finite(&format!("point_loads[{i}].magnitude_kn"), load.magnitude_kn())?;
            let field = format!("point_loads[{i}].position_m");
            ensure_finite(&field, load.position_m())?;
            if !self.beam.contains(load.position_m()) {
                return Err(BeamError::invalid_input(
                    field,
                    load.position_m().to_string(),
                    format!("Point load must lie on the beam [0, {length_m}]"),
                ));
            }
        }

        let udl = &self.udl;
        ensure_finite("udl.intensity_kn_per_m", udl.intensity_kn_per_m())?;
        ensure_finite("udl.start_m", udl.start_m())?;
        ensure_finite("udl.end_m", udl.end_m())?;
        if udl.start_m() > udl.end_m() {
            return Err(BeamError::DegenerateGeometry {
                start_m: udl.start_m(),
                end_m: udl.end_m(),
            });
        }
        for (field, x_m) in [("udl.start_m", udl.start_m()), ("udl.end_m", udl.end_m())] {
            if !self.beam.contains(x_m) {
                return Err(BeamError::invalid_input(
                    field,
                    x_m.to_string(),
                    format!("UDL must lie on the beam [0, {length_m}]"),
                ));
            }
        }

        // Finite inputs can still overflow once summed, which would turn the
        // reactions into inf - inf = NaN.
        let total_kn = self.total_vertical_load_kn();
        let moment_knm = self.moment_about_left_support_knm();
        ensure_total_finite("total_vertical_load_kn", total_kn)?;
        ensure_total_finite("moment_about_left_support_knm", moment_knm)?;
        ensure_total_finite("right_reaction_kn", moment_knm / length_m)?;
        Ok(())
    }
}

/// Unvalidated wire shape of a [`LoadSet`]
#[derive(Debug, Clone, Deserialize)]
struct RawLoadSet {
    beam: Beam,
    #[serde(default)]
    point_loads: Vec<PointLoad>,
    #[serde(default)]
    udl: DistributedLoad,
}

impl TryFrom<RawLoadSet> for LoadSet {
    type Error = BeamError;

    fn try_from(raw: RawLoadSet) -> BeamResult<Self> {
        LoadSet::new(raw.beam, raw.point_loads, raw.udl)
    }
}

/// Builder for [`LoadSet`]; validation runs once in [`LoadSetBuilder::build`].
#[derive(Debug, Clone)]
pub struct LoadSetBuilder {
    length_m: f64,
    point_loads: Vec<PointLoad>,
    udl: DistributedLoad,
}

impl LoadSetBuilder {
    pub fn new(length_m: f64) -> Self {
        LoadSetBuilder {
            length_m,
            point_loads: Vec::new(),
            udl: DistributedLoad::none(),
        }
    }

    /// Add a point load and return self (builder pattern)
    pub fn point_load(mut self, position_m: f64, magnitude_kn: f64) -> Self {
        self.point_loads.push(PointLoad::new(position_m, magnitude_kn));
        self
    }

    /// Set the UDL and return self (builder pattern). A later call replaces an earlier one.
    pub fn udl(mut self, intensity_kn_per_m: f64, start_m: f64, end_m: f64) -> Self {
        self.udl = DistributedLoad::new(intensity_kn_per_m, start_m, end_m);
        self
    }

    pub fn build(self) -> BeamResult<LoadSet> {
        LoadSet::new(Beam { length_m: self.length_m }, self.point_loads, self.udl)
    }
}

fn ensure_finite(field: &str, value: f64) -> BeamResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BeamError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

fn ensure_total_finite(field: &str, value: f64) -> BeamResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BeamError::invalid_input(
            field,
            value.to_string(),
            "Loads are too large to analyze: the total overflows",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_loads() {
        let loads = LoadSet::builder(8.0)
            .point_load(2.0, 5.0)
            .point_load(6.0, 3.0)
            .udl(1.5, 0.0, 4.0)
            .build()
            .unwrap();

        assert_eq!(loads.point_loads().len(), 2);
        assert_eq!(loads.total_point_load_kn(), 8.0);
        assert_eq!(loads.total_vertical_load_kn(), 14.0);
        // 5*2 + 3*6 + 6*2
        assert_eq!(loads.moment_about_left_support_knm(), 40.0);
    }

    #[test]
    fn test_empty_load_set_is_valid() {
        let loads = LoadSet::builder(5.0).build().unwrap();
        assert_eq!(loads.total_vertical_load_kn(), 0.0);
        assert_eq!(loads.moment_about_left_support_knm(), 0.0);
    }

    #[test]
    fn test_non_positive_length_rejected() {
        for length in [0.0, -3.0] {
            let err = LoadSet::builder(length).build().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
        assert!(Beam::new(0.0).is_err());
        assert!(Beam::new(f64::NAN).is_err());
    }

    #[test]
    fn test_point_load_off_beam_rejected() {
        let err = LoadSet::builder(10.0).point_load(10.5, 1.0).build().unwrap_err();
        match err {
            BeamError::InvalidInput { field, .. } => assert_eq!(field, "point_loads[0].position_m"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(LoadSet::builder(10.0).point_load(-0.1, 1.0).build().is_err());
    }

    #[test]
    fn test_point_loads_on_supports_accepted() {
        let loads = LoadSet::builder(10.0)
            .point_load(0.0, 4.0)
            .point_load(10.0, 4.0)
            .build();
        assert!(loads.is_ok());
    }

    #[test]
    fn test_reversed_udl_is_degenerate() {
        let err = LoadSet::builder(10.0).udl(2.0, 7.0, 3.0).build().unwrap_err();
        assert_eq!(err, BeamError::DegenerateGeometry { start_m: 7.0, end_m: 3.0 });
    }

    #[test]
    fn test_udl_past_support_rejected() {
        let err = LoadSet::builder(10.0).udl(2.0, 4.0, 12.0).build().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_magnitude_rejected() {
        let err = LoadSet::builder(10.0).point_load(5.0, f64::INFINITY).build().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "beam": { "length_m": 10.0 },
            "point_loads": [ { "position_m": 5.0, "magnitude_kn": 10.0 } ],
            "udl": { "intensity_kn_per_m": 2.0, "start_m": 0.0, "end_m": 10.0 }
        }"#;
        let loads: LoadSet = serde_json::from_str(json).unwrap();
        assert_eq!(loads.length_m(), 10.0);
        assert_eq!(loads.udl().resultant_kn(), 20.0);

        let bad = r#"{ "beam": { "length_m": 10.0 }, "point_loads": [ { "position_m": 11.0, "magnitude_kn": 1.0 } ] }"#;
        let err = serde_json::from_str::<LoadSet>(bad).unwrap_err();
        assert!(err.to_string().contains("point_loads[0].position_m"));
    }

    #[test]
    fn test_from_json_keeps_error_variant() {
        let err = LoadSet::from_json(
            r#"{ "beam": { "length_m": 10.0 }, "udl": { "intensity_kn_per_m": 1.0, "start_m": 8.0, "end_m": 2.0 } }"#,
        )
        .unwrap_err();
        assert_eq!(err, BeamError::DegenerateGeometry { start_m: 8.0, end_m: 2.0 });

        let err = LoadSet::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_deserialize_defaults_optional_parts() {
        let loads: LoadSet = serde_json::from_str(r#"{ "beam": { "length_m": 4.0 } }"#).unwrap();
        assert!(loads.point_loads().is_empty());
        assert!(loads.udl().is_empty());
    }

    #[test]
    fn test_overflowing_totals_rejected() {
        let err = LoadSet::builder(10.0)
            .point_load(5.0, 1e308)
            .point_load(6.0, 1e308)
            .build()
            .unwrap_err();
        match err {
            BeamError::InvalidInput { field, .. } => assert_eq!(field, "total_vertical_load_kn"),
            other => panic!("unexpected error: {other:?}"),
        }

        // Total fits, moment about A does not
        let err = LoadSet::builder(10.0).point_load(10.0, 1e308).build().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = LoadSet::builder(10.0).udl(1e307, 0.0, 10.0).point_load(9.0, 1e308).build().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_too_many_point_loads_rejected() {
        let mut builder = LoadSet::builder(10.0);
        for _ in 0..=MAX_POINT_LOADS {
            builder = builder.point_load(5.0, 1.0);
        }
        let err = builder.build().unwrap_err();
        match err {
            BeamError::InvalidInput { field, .. } => assert_eq!(field, "point_loads"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
