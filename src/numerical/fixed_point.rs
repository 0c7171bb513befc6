//! Fixed-point iteration x = g(x) over a working interval [a, b].
//!
//! Iteration 0 is recorded as the seed with a null error. The contraction
//! check (|g'(x)| <= 1 over [a, b]) is advisory: `divergence_warning` samples
//! the derivative by finite differences for the caller to inspect, the
//! iteration itself runs either way.
//!
//!  Example#1
//! ```
//! use RustedRoots::numerical::fixed_point::FixedPoint;
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! // root of x^2 - x - 1 as the fixed point of g(x) = 1 + 1/x
//! let f = Expr::parse_expression("x^2 - x - 1").unwrap();
//! let g = Expr::parse_expression("1 + 1/x").unwrap();
//! let mut solver = FixedPoint::from_expressions(&f, &g, 1.5, 1.0, 2.0, 1e-10, 100);
//! let result = solver.main_loop().unwrap();
//! assert!((result.root.unwrap() - 1.618033988749895).abs() < 1e-9);
//! ```

use crate::numerical::solver::{
    ConvergenceResult, IterationRecord, SolverError, init_logging,
};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{linspace, numerical_derivative};
use log::{info, warn};

pub struct FixedPoint {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub g: Box<dyn Fn(f64) -> f64>,
    pub x0: f64,
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl FixedPoint {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        g: Box<dyn Fn(f64) -> f64>,
        x0: f64,
        a: f64,
        b: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> FixedPoint {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        FixedPoint {
            f,
            g,
            x0,
            a,
            b,
            tolerance,
            max_iterations,
            history: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
        }
    }

    pub fn from_expressions(
        f: &Expr,
        g: &Expr,
        x0: f64,
        a: f64,
        b: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> FixedPoint {
        FixedPoint::new(
            f.lambdify1D(),
            g.lambdify1D(),
            x0,
            a,
            b,
            tolerance,
            max_iterations,
        )
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// advisory contraction check: samples |g'(x)| over [a, b] by central
    /// differences and returns the largest magnitude found when it exceeds 1
    pub fn divergence_warning(&self) -> Option<f64> {
        let h = 1e-6 * (self.b - self.a).abs().max(1.0);
        let worst = linspace(self.a, self.b, 21)
            .into_iter()
            .map(|x| numerical_derivative(self.g.as_ref(), x, h).abs())
            .fold(0.0_f64, f64::max);
        if worst > 1.0 { Some(worst) } else { None }
    }

    /// main function to run the fixed-point iterations
    pub fn main_loop(&mut self) -> Result<ConvergenceResult, SolverError> {
        if self.x0 < self.a || self.x0 > self.b {
            return Err(SolverError::SeedOutsideInterval {
                x0: self.x0,
                a: self.a,
                b: self.b,
            });
        }
        // iteration 0 is the seed itself, no error to report yet
        self.history.push(IterationRecord {
            i: 0,
            lower: None,
            upper: None,
            x: self.x0,
            fx: (self.f)(self.x0),
            error: None,
        });
        let mut x_prev = self.x0;
        for i in 1..=self.max_iterations {
            let x_i = (self.g)(x_prev);
            let delta = (x_i - x_prev).abs();
            self.history.push(IterationRecord {
                i,
                lower: None,
                upper: None,
                x: x_i,
                fx: (self.f)(x_i),
                error: Some(delta),
            });
            info!("iteration = {}, x = {}, error = {}", i, x_i, delta);
            if delta < self.tolerance {
                self.result = Some(x_i);
                return Ok(ConvergenceResult {
                    root: Some(x_i),
                    iterations: std::mem::take(&mut self.history),
                    converged: true,
                    message: format!("converged in {} iterations", i),
                });
            }
            x_prev = x_i;
        }
        warn!("Maximum number of iterations reached. Returning last estimate.");
        self.result = Some(x_prev);
        Ok(ConvergenceResult {
            root: Some(x_prev),
            iterations: std::mem::take(&mut self.history),
            converged: false,
            message: "maximum number of iterations reached".to_string(),
        })
    }

    // wrapper around main_loop to implement logging
    pub fn solve(&mut self) -> Result<ConvergenceResult, SolverError> {
        init_logging(&self.loglevel);
        self.main_loop()
    }

    pub fn get_result(&self) -> Option<f64> {
        self.result
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_golden_ratio() {
        let f = Expr::parse_expression("x^2 - x - 1").unwrap();
        let g = Expr::parse_expression("1 + 1/x").unwrap();
        let mut solver = FixedPoint::from_expressions(&f, &g, 1.5, 1.0, 2.0, 1e-10, 100);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!((result.root.unwrap() - 1.618033988749895).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_point_seed_record() {
        let f = Expr::parse_expression("x^2 - x - 1").unwrap();
        let g = Expr::parse_expression("1 + 1/x").unwrap();
        let mut solver = FixedPoint::from_expressions(&f, &g, 1.5, 1.0, 2.0, 1e-10, 100);
        let result = solver.main_loop().unwrap();
        let seed = &result.iterations[0];
        assert_eq!(seed.i, 0);
        assert_eq!(seed.x, 1.5);
        assert_eq!(seed.error, None);
    }

    #[test]
    fn test_fixed_point_rejects_seed_outside_interval() {
        let f = Expr::parse_expression("x^2 - x - 1").unwrap();
        let g = Expr::parse_expression("1 + 1/x").unwrap();
        let mut solver = FixedPoint::from_expressions(&f, &g, 5.0, 1.0, 2.0, 1e-10, 100);
        let err = solver.main_loop().unwrap_err();
        assert!(matches!(err, SolverError::SeedOutsideInterval { .. }));
    }

    #[test]
    fn test_fixed_point_divergence_warning() {
        // g(x) = x^2 expands distances on [1, 2], |g'| up to 4
        let f = Expr::parse_expression("x^2 - x").unwrap();
        let diverging = Expr::parse_expression("x^2").unwrap();
        let solver = FixedPoint::from_expressions(&f, &diverging, 1.5, 1.0, 2.0, 1e-10, 10);
        let worst = solver.divergence_warning().unwrap();
        assert!(worst > 1.0);

        // g(x) = 1 + 1/x contracts on [1.1, 2]
        let contracting = Expr::parse_expression("1 + 1/x").unwrap();
        let solver = FixedPoint::from_expressions(&f, &contracting, 1.5, 1.1, 2.0, 1e-10, 10);
        assert!(solver.divergence_warning().is_none());
    }
}
