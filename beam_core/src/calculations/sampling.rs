//! x-grid for diagram sampling
//!
//! A uniform grid alone smears the shear step at a point load that falls
//! between two samples. Each point load therefore adds a sample just before
//! and just after itself, which also gives the moment curve its kink.

use crate::loads::LoadSet;
use crate::settings::SamplingSettings;

/// Sample positions over `[0, L]`, ascending.
///
/// 1. `sample_count` uniformly spaced points, both supports included.
/// 2. For each point load at `p`: `p - epsilon` when `p > 0`, `p + epsilon`
///    when `p < L`. Injected points are clamped onto the span.
///
/// Duplicates are kept; the evaluator is deterministic, so a repeated x only
/// repeats a sample.
///
/// `settings` must already be validated (`sample_count >= 2`).
///
/// # Example
/// ```
/// use beam_core::calculations::sampling::sample_positions;
/// use beam_core::loads::LoadSet;
/// use beam_core::settings::SamplingSettings;
///
/// let loads = LoadSet::builder(10.0).point_load(5.0, 10.0).build().unwrap();
/// let xs = sample_positions(&loads, &SamplingSettings::default());
///
/// assert_eq!(xs.len(), 102);
/// assert_eq!(xs[0], 0.0);
/// assert_eq!(*xs.last().unwrap(), 10.0);
/// assert!(xs.iter().any(|&x| (x - 4.999).abs() < 1e-9));
/// ```
pub fn sample_positions(load_set: &LoadSet, settings: &SamplingSettings) -> Vec<f64> {
    let length_m = load_set.length_m();
    let eps = settings.epsilon_m;

    let mut positions = uniform_grid(length_m, settings.sample_count);
    positions.extend(load_set.point_loads().iter().flat_map(|load| {
        let p = load.position_m();
        let before = (p > 0.0).then(|| (p - eps).max(0.0));
        let after = (p < length_m).then(|| (p + eps).min(length_m));
        before.into_iter().chain(after)
    }));

    positions.sort_by(f64::total_cmp);
    positions
}

/// `count` evenly spaced points from 0 to `length_m` inclusive (at least both ends)
fn uniform_grid(length_m: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                length_m
            } else {
                length_m * i as f64 / last
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(sample_count: usize) -> SamplingSettings {
        SamplingSettings {
            sample_count,
            ..SamplingSettings::default()
        }
    }

    fn assert_positions(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    fn is_sorted(xs: &[f64]) -> bool {
        xs.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_uniform_grid_only() {
        let loads = LoadSet::builder(4.0).build().unwrap();
        let xs = sample_positions(&loads, &settings(5));
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_default_grid_has_100_points() {
        let loads = LoadSet::builder(7.3).udl(1.0, 0.0, 7.3).build().unwrap();
        let xs = sample_positions(&loads, &SamplingSettings::default());
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[99], 7.3);
    }

    #[test]
    fn test_interior_load_brackets() {
        let loads = LoadSet::builder(10.0).point_load(3.33, 1.0).build().unwrap();
        let xs = sample_positions(&loads, &settings(11));
        assert_eq!(xs.len(), 13);
        assert!(is_sorted(&xs));
        assert!(xs.iter().any(|&x| (x - 3.329).abs() < 1e-12));
        assert!(xs.iter().any(|&x| (x - 3.331).abs() < 1e-12));
    }

    #[test]
    fn test_support_loads_only_add_inward_points() {
        let loads = LoadSet::builder(10.0)
            .point_load(0.0, 1.0)
            .point_load(10.0, 1.0)
            .build()
            .unwrap();
        let xs = sample_positions(&loads, &settings(3));
        assert_positions(&xs, &[0.0, 0.001, 5.0, 9.999, 10.0]);
    }

    #[test]
    fn test_injected_points_clamped_to_span() {
        let loads = LoadSet::builder(1.0).point_load(0.0005, 1.0).build().unwrap();
        let xs = sample_positions(&loads, &settings(2));
        assert!(xs.iter().all(|&x| (0.0..=1.0).contains(&x)));
        assert_positions(&xs, &[0.0, 0.0, 0.0015, 1.0]);
    }

    #[test]
    fn test_duplicates_kept() {
        // Two loads at the same spot inject the same pair twice
        let loads = LoadSet::builder(2.0)
            .point_load(1.0, 1.0)
            .point_load(1.0, 2.0)
            .build()
            .unwrap();
        let xs = sample_positions(&loads, &settings(3));
        assert_eq!(xs.len(), 7);
        assert_positions(&xs, &[0.0, 0.999, 0.999, 1.0, 1.001, 1.001, 2.0]);
    }
}
