//! Concentrated (point) loads

use serde::{Deserialize, Serialize};

/// A concentrated load applied at a single position along the beam.
///
/// Magnitude is signed: positive acts downward, matching the UDL convention.
///
/// # Example
/// ```
/// use beam_core::loads::PointLoad;
///
/// let load = PointLoad::new(2.5, 12.0);
/// assert_eq!(load.position_m(), 2.5);
/// assert_eq!(load.moment_about_left_support_knm(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left support (m)
    position_m: f64,
    /// Load magnitude (kN), positive downward
    magnitude_kn: f64,
}

impl PointLoad {
    /// Create a point load at `position_m` with magnitude `magnitude_kn`
    pub fn new(position_m: f64, magnitude_kn: f64) -> Self {
        PointLoad {
            position_m,
            magnitude_kn,
        }
    }

    /// Distance from the left support (m)
    pub fn position_m(&self) -> f64 {
        self.position_m
    }

    /// Signed magnitude (kN)
    pub fn magnitude_kn(&self) -> f64 {
        self.magnitude_kn
    }

    /// Moment of this load about support A at x = 0 (kN·m)
    pub fn moment_about_left_support_knm(&self) -> f64 {
        self.magnitude_kn * self.position_m
    }

    /// Whether the load has been passed when scanning left to right up to `x_m`.
    ///
    /// Left-closed: a load exactly at `x_m` counts as applied.
    pub fn is_applied_at(&self, x_m: f64) -> bool {
        self.position_m <= x_m
    }
}
