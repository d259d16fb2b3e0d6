use beam_core::calculations::internal_forces::InternalForces;
use beam_core::calculations::reactions::solve_reactions;
use beam_core::calculations::sampling::sample_positions;
use beam_core::{analyze, analyze_with, AnalysisSettings, LoadSet, UdlMomentConvention};

const TOL: f64 = 1e-9;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + b.abs())
}

/// A spread of load sets: single loads, mixed loads, loads on supports,
/// upward loads, partial and full UDLs.
fn load_cases() -> Vec<LoadSet> {
    vec![
        LoadSet::builder(10.0).point_load(5.0, 10.0).build().unwrap(),
        LoadSet::builder(10.0).udl(2.0, 0.0, 10.0).build().unwrap(),
        LoadSet::builder(7.5)
            .point_load(1.2, 14.0)
            .point_load(3.3, -4.5)
            .point_load(6.9, 8.0)
            .udl(3.25, 2.0, 5.5)
            .build()
            .unwrap(),
        LoadSet::builder(3.0)
            .point_load(0.0, 2.0)
            .point_load(3.0, 7.0)
            .udl(1.0, 1.0, 1.0)
            .build()
            .unwrap(),
        LoadSet::builder(12.0).udl(-1.5, 4.0, 12.0).point_load(6.0, 20.0).build().unwrap(),
    ]
}

#[test]
fn reactions_balance_vertical_load() {
    for loads in load_cases() {
        let r = solve_reactions(&loads);
        assert!(
            approx_eq(r.total_kn(), loads.total_vertical_load_kn(), TOL),
            "RA + RB = {} but total load = {}",
            r.total_kn(),
            loads.total_vertical_load_kn()
        );
    }
}

#[test]
fn reactions_close_moment_about_left_support() {
    for loads in load_cases() {
        let r = solve_reactions(&loads);
        assert!(approx_eq(
            r.moment_about_left_support_knm(loads.length_m()),
            loads.moment_about_left_support_knm(),
            TOL
        ));
    }
}

#[test]
fn zero_loads_give_zero_everywhere() {
    let loads = LoadSet::builder(8.0).udl(0.0, 1.0, 6.0).build().unwrap();
    let r = solve_reactions(&loads);
    assert_eq!(r.left_kn, 0.0);
    assert_eq!(r.right_kn, 0.0);

    for s in analyze(&loads).unwrap() {
        assert_eq!(s.shear_kn, 0.0);
        assert_eq!(s.moment_knm, 0.0);
    }
}

#[test]
fn shear_jumps_by_load_magnitude() {
    let loads = LoadSet::builder(9.0)
        .point_load(2.0, 6.0)
        .point_load(6.5, -3.0)
        .udl(1.0, 0.0, 9.0)
        .build()
        .unwrap();
    let forces = InternalForces::new(&loads, solve_reactions(&loads), UdlMomentConvention::WithinSpan);

    for load in loads.point_loads() {
        let p = load.position_m();
        for eps in [1e-3, 1e-5, 1e-7] {
            let jump = forces.shear_at(p + eps) - forces.shear_at(p - eps);
            // The UDL adds 2 * eps * w of smooth change across the gap
            assert!(
                (jump + load.magnitude_kn()).abs() < 2.0 * eps * 1.0 + 1e-9,
                "jump {jump} at {p} (eps {eps})"
            );
        }
    }
}

#[test]
fn moment_continuous_at_point_loads() {
    for loads in load_cases() {
        let forces = InternalForces::new(&loads, solve_reactions(&loads), UdlMomentConvention::WithinSpan);
        for load in loads.point_loads() {
            let p = load.position_m();
            let at = forces.moment_at(p);
            if p > 0.0 {
                assert!((forces.moment_at(p - 1e-8) - at).abs() < 1e-5);
            }
            if p < loads.length_m() {
                assert!((forces.moment_at(p + 1e-8) - at).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn scenario_midspan_point_load() {
    let loads = LoadSet::builder(10.0).point_load(5.0, 10.0).build().unwrap();
    let r = solve_reactions(&loads);
    assert!(approx_eq(r.left_kn, 5.0, TOL));
    assert!(approx_eq(r.right_kn, 5.0, TOL));

    let f = InternalForces::new(&loads, r, UdlMomentConvention::default());
    assert!(approx_eq(f.shear_at(0.0), 5.0, TOL));
    assert!(approx_eq(f.shear_at(5.0 + 1e-3), -5.0, TOL));
    assert!(approx_eq(f.shear_at(10.0), -5.0, TOL));
    assert!(approx_eq(f.moment_at(0.0), 0.0, TOL));
    assert!(approx_eq(f.moment_at(5.0), 25.0, TOL));
    assert!(approx_eq(f.moment_at(10.0), 0.0, TOL));
}

#[test]
fn scenario_full_span_udl() {
    let loads = LoadSet::builder(10.0).udl(2.0, 0.0, 10.0).build().unwrap();
    let r = solve_reactions(&loads);
    assert!(approx_eq(r.left_kn, 10.0, TOL));
    assert!(approx_eq(r.right_kn, 10.0, TOL));

    let f = InternalForces::new(&loads, r, UdlMomentConvention::default());
    assert!(approx_eq(f.moment_at(5.0), 25.0, TOL));
    assert!(approx_eq(f.moment_at(0.0), 0.0, TOL));
    assert!(approx_eq(f.moment_at(10.0), 0.0, TOL));
}

#[test]
fn samples_bracket_every_interior_point_load() {
    let settings = AnalysisSettings::default();
    let eps = settings.sampling.epsilon_m;
    let slack = 1e-9;

    for loads in load_cases() {
        let xs = sample_positions(&loads, &settings.sampling);
        for load in loads.point_loads() {
            let p = load.position_m();
            if p <= 0.0 || p >= loads.length_m() {
                continue;
            }
            assert!(xs.iter().any(|&x| x < p && p - x <= eps + slack), "nothing just before {p}");
            assert!(xs.iter().any(|&x| x > p && x - p <= eps + slack), "nothing just after {p}");
        }
    }
}

#[test]
fn analysis_is_deterministic_across_threads() {
    let loads = load_cases();
    let expected: Vec<_> = loads.iter().map(|l| analyze(l).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = loads
            .iter()
            .map(|l| scope.spawn(move || analyze(l).unwrap()))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}

#[test]
fn resultant_convention_matches_within_span_up_to_udl_end() {
    let loads = LoadSet::builder(10.0).udl(3.0, 1.0, 4.0).point_load(7.0, 5.0).build().unwrap();
    let within = analyze_with(&loads, &AnalysisSettings::default()).unwrap();
    let resultant = analyze_with(
        &loads,
        &AnalysisSettings::default().with_udl_moment(UdlMomentConvention::Resultant),
    )
    .unwrap();

    for (a, b) in within.samples.iter().zip(&resultant.samples) {
        assert_eq!(a.x_m, b.x_m);
        assert_eq!(a.shear_kn, b.shear_kn);
        if a.x_m <= 4.0 {
            assert_eq!(a.moment_knm, b.moment_knm);
        }
    }
    assert!(resultant.samples.last().unwrap().moment_knm.abs() < 1e-9);
}
