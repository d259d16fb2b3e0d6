//! Form-field extraction
//!
//! Accepts the fields of the beam calculator web form and turns them into a
//! validated [`LoadSet`]:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `beam_length` | span L (m) |
//! | `n_forces` | number of point loads |
//! | `position_{i}`, `magnitude_{i}` | point load i (m, kN), `i` in `0..n_forces` |
//! | `udl_magnitude` | UDL intensity (kN/m) |
//! | `udl_start`, `udl_end` | UDL interval (m) |
//!
//! Every field is required. A missing field is `MissingField`; text that is
//! not a number is `InvalidInput`.

use std::collections::HashMap;

use beam_core::loads::MAX_POINT_LOADS;
use beam_core::{Beam, BeamError, BeamResult, DistributedLoad, LoadSet, PointLoad};

/// Read access to submitted form fields
pub trait FormFields {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FormFields for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Decode an `application/x-www-form-urlencoded` body.
///
/// A repeated key keeps its last value.
pub fn parse_urlencoded(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect()
}

/// Build a load set from form fields
pub fn load_set_from_fields(fields: &impl FormFields) -> BeamResult<LoadSet> {
    let n_forces = load_count(field(fields, "n_forces")?, "n_forces")?;

    let point_loads = (0..n_forces)
        .map(|i| {
            let position_m = number(fields, &format!("position_{i}"))?;
            let magnitude_kn = number(fields, &format!("magnitude_{i}"))?;
            Ok(PointLoad::new(position_m, magnitude_kn))
        })
        .collect::<BeamResult<Vec<_>>>()?;

    let beam = Beam::new(number(fields, "beam_length")?)?;
    let udl = DistributedLoad::new(
        number(fields, "udl_magnitude")?,
        number(fields, "udl_start")?,
        number(fields, "udl_end")?,
    );

    LoadSet::new(beam, point_loads, udl)
}

/// Parse a numeric answer, reporting `name` and the raw text on failure
pub fn parse_number(raw: &str, name: &str) -> BeamResult<f64> {
    raw.trim()
        .parse()
        .map_err(|_| BeamError::invalid_input(name, raw, "Expected a number"))
}

/// Parse a point-load count, bounded by [`MAX_POINT_LOADS`]
pub fn load_count(raw: &str, name: &str) -> BeamResult<usize> {
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| BeamError::invalid_input(name, raw, "Expected a non-negative whole number"))?;
    if count > MAX_POINT_LOADS {
        return Err(BeamError::invalid_input(
            name,
            raw,
            format!("At most {MAX_POINT_LOADS} point loads are supported"),
        ));
    }
    Ok(count)
}

fn field<'a>(fields: &'a impl FormFields, name: &str) -> BeamResult<&'a str> {
    fields
        .field(name)
        .ok_or_else(|| BeamError::missing_field(name))
}

fn number(fields: &impl FormFields, name: &str) -> BeamResult<f64> {
    parse_number(field(fields, name)?, name)
}
