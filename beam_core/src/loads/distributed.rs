//! Uniformly distributed load (UDL) segment

use serde::{Deserialize, Serialize};

/// A load of constant intensity over `[start_m, end_m]`.
///
/// Every load set carries exactly one of these. Zero intensity or a zero-length
/// interval is the ordinary way to say "no UDL" and is not an error.
///
/// # Example
/// ```
/// use beam_core::loads::DistributedLoad;
///
/// let udl = DistributedLoad::new(2.0, 1.0, 5.0);
/// assert_eq!(udl.resultant_kn(), 8.0);
/// assert_eq!(udl.centroid_m(), 3.0);
///
/// assert!(DistributedLoad::none().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Load per unit length (kN/m), positive downward
    intensity_kn_per_m: f64,
    /// Start of the loaded interval, from the left support (m)
    start_m: f64,
    /// End of the loaded interval, from the left support (m)
    end_m: f64,
}

impl DistributedLoad {
    /// Create a UDL of `intensity_kn_per_m` over `[start_m, end_m]`
    pub fn new(intensity_kn_per_m: f64, start_m: f64, end_m: f64) -> Self {
        DistributedLoad {
            intensity_kn_per_m,
            start_m,
            end_m,
        }
    }

    /// The "no UDL" placeholder: zero intensity over an empty interval at x = 0
    pub fn none() -> Self {
        Self::default()
    }

    pub fn intensity_kn_per_m(&self) -> f64 {
        self.intensity_kn_per_m
    }

    pub fn start_m(&self) -> f64 {
        self.start_m
    }

    pub fn end_m(&self) -> f64 {
        self.end_m
    }

    /// Length of the loaded interval (m)
    pub fn length_m(&self) -> f64 {
        self.end_m - self.start_m
    }

    /// Total force of the UDL, acting at its centroid (kN)
    pub fn resultant_kn(&self) -> f64 {
        self.intensity_kn_per_m * self.length_m()
    }

    /// Position of the resultant (m)
    pub fn centroid_m(&self) -> f64 {
        (self.start_m + self.end_m) / 2.0
    }

    /// Moment of the resultant about support A at x = 0 (kN·m)
    pub fn moment_about_left_support_knm(&self) -> f64 {
        self.resultant_kn() * self.centroid_m()
    }

    /// True when the UDL contributes no load at all
    pub fn is_empty(&self) -> bool {
        self.intensity_kn_per_m == 0.0 || self.length_m() == 0.0
    }

    /// Load accumulated from `start_m` up to `x_m` (kN).
    ///
    /// Zero before the interval, linear inside it, the full resultant after it.
    /// A reversed interval (`start > end`) accumulates nothing.
    pub fn accumulated_load_kn(&self, x_m: f64) -> f64 {
        let loaded = (x_m - self.start_m).min(self.length_m()).max(0.0);
        self.intensity_kn_per_m * loaded
    }

    /// Whether `x_m` lies on the loaded interval (both ends inclusive)
    pub fn covers(&self, x_m: f64) -> bool {
        self.start_m <= x_m && x_m <= self.end_m
    }
}
