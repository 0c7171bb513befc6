use crate::numerical::bisection::Bisection;
use crate::numerical::solver::{SolverKind, SolverSettings, solve};
use crate::symbolic::symbolic_engine::Expr;
use approx::assert_relative_eq;
use std::str::FromStr;

//___________________________________TESTS____________________________________

#[test]
fn test_bisection_bracket_invariant_and_halving() {
    let expr = Expr::parse_expression("x^3 - x - 2").unwrap();
    let (a0, b0) = (1.0, 2.0);
    let mut solver = Bisection::from_expression(&expr, a0, b0, 1e-12, 40);
    let result = solver.main_loop().unwrap();
    let width0 = b0 - a0;
    for (step, record) in result.iterations.iter().enumerate() {
        let a = record.lower.unwrap();
        let b = record.upper.unwrap();
        // midpoint stays inside the original bracket
        assert!(record.x >= a0 && record.x <= b0);
        assert!(record.x >= a && record.x <= b);
        // width of the recorded bracket is the original halved step times
        assert_relative_eq!(b - a, width0 / 2f64.powi(step as i32), epsilon = 1e-12);
    }
}

#[test]
fn test_dispatcher_reaches_every_method() {
    let f = Expr::parse_expression("x^2 - 4").unwrap();
    let g = Expr::parse_expression("(x + 4/x)/2").unwrap();

    let bracket = SolverSettings {
        a: Some(0.0),
        b: Some(5.0),
        tolerance: 1e-8,
        max_iterations: 200,
        ..SolverSettings::default()
    };
    for kind in [
        SolverKind::Bisection,
        SolverKind::RegulaFalsi,
        SolverKind::RegulaFalsiModified,
    ] {
        let result = solve(kind, &f, None, &bracket).unwrap();
        assert!(result.converged, "{} did not converge", kind);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-6, "{} off target", kind);
    }

    let open = SolverSettings {
        x0: Some(3.0),
        x1: Some(1.0),
        tolerance: 1e-8,
        max_iterations: 100,
        ..SolverSettings::default()
    };
    for kind in [SolverKind::Newton, SolverKind::Halley, SolverKind::Secant] {
        let result = solve(kind, &f, None, &open).unwrap();
        assert!(result.converged, "{} did not converge", kind);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-6, "{} off target", kind);
    }

    // Babylonian g(x) for sqrt(4) as the fixed-point iteration
    let fixed = SolverSettings {
        a: Some(1.0),
        b: Some(3.0),
        x0: Some(3.0),
        tolerance: 1e-10,
        max_iterations: 100,
        ..SolverSettings::default()
    };
    let result = solve(SolverKind::FixedPoint, &f, Some(&g), &fixed).unwrap();
    assert!(result.converged);
    assert!((result.root.unwrap() - 2.0).abs() < 1e-9);
    assert_eq!(result.iterations[0].error, None);
}

#[test]
fn test_solver_kind_string_round_trip() {
    for (name, kind) in [
        ("bisection", SolverKind::Bisection),
        ("regula_falsi", SolverKind::RegulaFalsi),
        ("regula_falsi_modified", SolverKind::RegulaFalsiModified),
        ("newton", SolverKind::Newton),
        ("halley", SolverKind::Halley),
        ("secant", SolverKind::Secant),
        ("fixed_point", SolverKind::FixedPoint),
    ] {
        assert_eq!(SolverKind::from_str(name).unwrap(), kind);
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn test_traces_are_deterministic() {
    let f = Expr::parse_expression("cos(x) - x").unwrap();
    let settings = SolverSettings {
        x0: Some(0.0),
        x1: Some(1.0),
        tolerance: 1e-10,
        max_iterations: 100,
        ..SolverSettings::default()
    };
    let first = solve(SolverKind::Secant, &f, None, &settings).unwrap();
    let second = solve(SolverKind::Secant, &f, None, &settings).unwrap();
    assert_eq!(first.iterations, second.iterations);
}
