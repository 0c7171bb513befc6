#![allow(non_snake_case)]
/// Iterative single-variable root solvers.
///
/// Every solver follows the same contract: a compiled scalar function (and
/// derivatives where the method needs them), an absolute tolerance, an
/// iteration cap, and a `ConvergenceResult` with the full iteration trace.
/// Hitting the cap is a normal `converged = false` outcome carrying the best
/// estimate, not an error.
///
///  Example#1
/// ```
/// use RustedRoots::numerical::bisection::Bisection;
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse_expression("x - 2").unwrap();
/// let mut solver = Bisection::from_expression(&expr, 0.0, 5.0, 1e-10, 100);
/// let result = solver.main_loop().unwrap();
/// assert!(result.converged);
/// assert!((result.root.unwrap() - 2.0).abs() < 1e-9);
/// ```
/// Example#2
/// ```
/// use RustedRoots::numerical::solver::{solve, SolverKind, SolverSettings};
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse_expression("x^2 - 4").unwrap();
/// let settings = SolverSettings {
///     x0: Some(3.0),
///     tolerance: 1e-6,
///     max_iterations: 50,
///     ..SolverSettings::default()
/// };
/// let result = solve(SolverKind::Newton, &expr, None, &settings).unwrap();
/// assert!(result.converged);
/// assert!((result.root.unwrap() - 2.0).abs() < 1e-6);
/// ```
pub mod solver;

/// interval-halving bracketing method
pub mod bisection;
/// secant-interpolated bracketing methods: pure regula falsi and the
/// Illinois-style modified variant
pub mod regula_falsi;

/// Newton-Raphson with analytical derivative
pub mod newton;

/// Halley's method (second-order correction)
pub mod halley;

/// two-point secant method
pub mod secant;

/// fixed-point iteration x = g(x)
pub mod fixed_point;

#[cfg(test)]
mod solver_tests;
