//! Shear force and bending moment at any section
//!
//! Both functions scan from support A: start from RA and subtract every load
//! met up to and including the section.
//!
//! ## Sign Convention
//! - Loads: positive downward
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on the bottom fibre)
//!
//! At a point load the section at exactly `x = position` already includes the
//! load, so V there is the post-load value. The pre-load value lives at
//! `position - epsilon`, which the sampler adds.

use crate::loads::LoadSet;
use crate::settings::UdlMomentConvention;

use super::reactions::Reactions;

/// Evaluates V(x) and M(x) for one load set and its reactions.
///
/// Holds a shared borrow of the load set and no mutable state, so any number
/// of evaluators can run side by side over the same `LoadSet`.
///
/// # Example
/// ```
/// use beam_core::calculations::internal_forces::InternalForces;
/// use beam_core::calculations::reactions::solve_reactions;
/// use beam_core::loads::LoadSet;
/// use beam_core::settings::UdlMomentConvention;
///
/// let loads = LoadSet::builder(10.0).point_load(5.0, 10.0).build().unwrap();
/// let forces = InternalForces::new(&loads, solve_reactions(&loads), UdlMomentConvention::default());
///
/// assert_eq!(forces.shear_at(0.0), 5.0);
/// assert_eq!(forces.shear_at(5.0), -5.0);
/// assert_eq!(forces.moment_at(5.0), 25.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InternalForces<'a> {
    load_set: &'a LoadSet,
    reactions: Reactions,
    udl_moment: UdlMomentConvention,
}

impl<'a> InternalForces<'a> {
    pub fn new(load_set: &'a LoadSet, reactions: Reactions, udl_moment: UdlMomentConvention) -> Self {
        InternalForces {
            load_set,
            reactions,
            udl_moment,
        }
    }

    pub fn reactions(&self) -> Reactions {
        self.reactions
    }

    /// Shear force V(x) in kN.
    ///
    /// `V(x) = RA - w * clamp(x - a, 0, b - a) - sum(F_i for p_i <= x)`
    pub fn shear_at(&self, x_m: f64) -> f64 {
        let udl_kn = self.load_set.udl().accumulated_load_kn(x_m);
        self.load_set
            .point_loads()
            .iter()
            .filter(|load| load.is_applied_at(x_m))
            .fold(self.reactions.left_kn - udl_kn, |v, load| v - load.magnitude_kn())
    }

    /// Bending moment M(x) in kN·m.
    ///
    /// `M(x) = RA x - sum(F_i (x - p_i) for p_i <= x) - [a <= x <= b] w (x - a)^2 / 2`
    ///
    /// Under [`UdlMomentConvention::Resultant`], sections past the UDL also
    /// subtract `W (x - centroid)`.
    pub fn moment_at(&self, x_m: f64) -> f64 {
        let point_loads_knm = self
            .load_set
            .point_loads()
            .iter()
            .filter(|load| load.is_applied_at(x_m))
            .map(|load| load.magnitude_kn() * (x_m - load.position_m()))
            .sum::<f64>();

        self.reactions.left_kn * x_m - point_loads_knm - self.udl_moment_knm(x_m)
    }

    fn udl_moment_knm(&self, x_m: f64) -> f64 {
        let udl = self.load_set.udl();
        if udl.covers(x_m) {
            let loaded = x_m - udl.start_m();
            udl.intensity_kn_per_m() * loaded * loaded / 2.0
        } else if x_m > udl.end_m() && self.udl_moment == UdlMomentConvention::Resultant {
            udl.resultant_kn() * (x_m - udl.centroid_m())
        } else {
            0.0
        }
    }
}
