//! Support reactions from global equilibrium
//!
//! Moments about support A give RB; vertical force balance then gives RA.
//! The UDL enters as a single resultant at its centroid.

use serde::{Deserialize, Serialize};

use crate::loads::LoadSet;

/// Vertical reactions at the two supports, positive upward (kN)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// RA, pin at x = 0
    pub left_kn: f64,
    /// RB, roller at x = L
    pub right_kn: f64,
}

impl Reactions {
    /// RA + RB
    pub fn total_kn(&self) -> f64 {
        self.left_kn + self.right_kn
    }

    /// Moment of the reactions about support A (only RB has a lever arm)
    pub fn moment_about_left_support_knm(&self, length_m: f64) -> f64 {
        self.right_kn * length_m
    }
}

/// Solve RA and RB for a simply supported beam.
///
/// `LoadSet` guarantees a positive span, so the division is always defined.
///
/// # Example
/// ```
/// use beam_core::calculations::reactions::solve_reactions;
/// use beam_core::loads::LoadSet;
///
/// // 10 kN at 3 m on a 10 m span
/// let loads = LoadSet::builder(10.0).point_load(3.0, 10.0).build().unwrap();
/// let r = solve_reactions(&loads);
/// assert!((r.left_kn - 7.0).abs() < 1e-12);
/// assert!((r.right_kn - 3.0).abs() < 1e-12);
/// ```
pub fn solve_reactions(load_set: &LoadSet) -> Reactions {
    let right_kn = load_set.moment_about_left_support_knm() / load_set.length_m();
    let left_kn = load_set.total_vertical_load_kn() - right_kn;
    Reactions { left_kn, right_kn }
}
