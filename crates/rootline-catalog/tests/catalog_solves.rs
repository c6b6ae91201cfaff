//! End-to-end solves over the whole catalog.

use approx::assert_relative_eq;
use nalgebra::Vector2;
use rootline_catalog::prelude::*;
use rootline_math::solvers::{Interval, SolverConfig, SolverResult};
use rootline_math::MathError;

// =============================================================================
// EQUATIONS
// =============================================================================

#[test]
fn test_methods_agree_on_every_equation() {
    let config = SolverConfig::default();

    for entry in equations() {
        let interval = entry.interval().unwrap();
        let roots: Vec<f64> = Method::ALL
            .iter()
            .map(|&m| solve_equation(entry, m, interval, &config).unwrap().root)
            .collect();

        for root in &roots {
            assert!(interval.contains(*root), "equation {}", entry.id);
            assert_relative_eq!(*root, roots[0], epsilon = 1e-5);
        }
    }
}

#[test]
fn test_chord_residual_below_tolerance() {
    let config = SolverConfig::default().with_tolerance(1e-8);

    for entry in equations() {
        let result =
            solve_equation(entry, Method::Chord, entry.interval().unwrap(), &config).unwrap();
        assert!(result.residual.abs() < 1e-8, "equation {}", entry.id);
    }
}

#[test]
fn test_method_lookup_by_key() {
    let entry = equation(1).unwrap();
    let interval = entry.interval().unwrap();

    let by_key = solve_equation(
        entry,
        Method::from_id(2).unwrap(),
        interval,
        &SolverConfig::default(),
    )
    .unwrap();
    let direct = solve_equation(entry, Method::Newton, interval, &SolverConfig::default()).unwrap();

    assert_eq!(by_key, direct);
}

#[test]
fn test_interval_without_root_is_rejected() {
    // x^2 - 2 keeps its sign on [2, 3].
    let entry = equation(4).unwrap();
    let interval = Interval::new(2.0, 3.0).unwrap();

    for method in [Method::Chord, Method::Newton] {
        let err = solve_equation(entry, method, interval, &SolverConfig::default()).unwrap_err();
        assert!(
            matches!(err, CatalogError::Solver(MathError::InvalidBracket { .. })),
            "{method}"
        );
    }
}

#[test]
fn test_non_contractive_interval_is_rejected() {
    // e^x / 3 has slope above 1 once x > ln 3.
    let entry = equation(3).unwrap();
    let interval = Interval::new(0.0, 2.0).unwrap();

    let err = solve_equation(entry, Method::SimpleIteration, interval, &SolverConfig::default())
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Solver(MathError::NotContractive { .. })
    ));
    assert!(err.is_invalid_argument());
}

#[test]
fn test_hook_collects_plot_data() {
    let entry = equation(2).unwrap();
    let interval = entry.interval().unwrap();
    let mut plotted: Vec<(Vec<(f64, f64)>, f64)> = Vec::new();

    let mut hook = |e: &EquationEntry, i: &Interval, r: &SolverResult| {
        plotted.push((e.sample(i, 50), r.root));
    };

    for method in Method::ALL {
        solve_equation_with_hook(entry, method, interval, &SolverConfig::default(), &mut hook)
            .unwrap();
    }

    assert_eq!(plotted.len(), 3);
    assert!(plotted.iter().all(|(points, _)| points.len() == 50));
}

// =============================================================================
// SYSTEMS
// =============================================================================

#[test]
fn test_circle_line_converges_to_one_one() {
    let entry = system(1).unwrap();
    let config = SolverConfig::default();

    let solution = entry.solve(entry.seed_point(), &config).unwrap();

    assert_relative_eq!(solution.point.x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(solution.point.y, 1.0, epsilon = 1e-6);
    assert_eq!(solution.trace.len(), solution.iterations as usize);
}

#[test]
fn test_system_solutions_satisfy_equations() {
    let config = SolverConfig::default().with_tolerance(1e-10);

    for entry in systems() {
        let solution = entry.solve(entry.seed_point(), &config).unwrap();
        let residual = (entry.functions)(&solution.point);
        assert!(residual.amax() < 1e-8, "system {}", entry.id);
    }
}

#[test]
fn test_system_iteration_cap_reported() {
    let entry = system(3).unwrap();
    let config = SolverConfig::new(1e-12, 1);

    let err = entry.solve(Vector2::new(1.0, 1.0), &config).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::Solver(MathError::NonConvergence { iterations: 1, .. })
    ));
}

#[test]
fn test_unknown_keys() {
    assert!(equation(9).unwrap_err().is_invalid_argument());
    assert!(system(0).unwrap_err().is_invalid_argument());
    assert!(Method::from_id(0).unwrap_err().is_invalid_argument());
}
