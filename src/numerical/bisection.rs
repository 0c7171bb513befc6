//! Bisection: halve a sign-change bracket until the midpoint residual drops
//! below tolerance.
//!
//!  Example#1
//! ```
//! use RustedRoots::numerical::bisection::Bisection;
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let expr = Expr::parse_expression("x - 2").unwrap();
//! let mut solver = Bisection::from_expression(&expr, 0.0, 5.0, 1e-10, 100);
//! let result = solver.main_loop().unwrap();
//! assert!((result.root.unwrap() - 2.0).abs() < 1e-9);
//! ```

use crate::numerical::solver::{
    ConvergenceResult, IterationRecord, SolverError, init_logging,
};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};

pub struct Bisection {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl Bisection {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        a: f64,
        b: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Bisection {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        Bisection {
            f,
            a,
            b,
            tolerance,
            max_iterations,
            history: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
        }
    }

    pub fn from_expression(
        expr: &Expr,
        a: f64,
        b: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Bisection {
        Bisection::new(expr.lambdify1D(), a, b, tolerance, max_iterations)
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// main function to run the bisection iterations
    pub fn main_loop(&mut self) -> Result<ConvergenceResult, SolverError> {
        if self.a >= self.b {
            return Err(SolverError::InvalidInterval {
                a: self.a,
                b: self.b,
            });
        }
        let mut a = self.a;
        let mut b = self.b;
        let mut fa = (self.f)(a);
        let fb = (self.f)(b);
        if fa * fb > 0.0 {
            return Err(SolverError::NoSignChange { fa, fb });
        }
        let mut c = 0.5 * (a + b);
        for i in 0..self.max_iterations {
            c = 0.5 * (a + b);
            let fc = (self.f)(c);
            self.history.push(IterationRecord {
                i,
                lower: Some(a),
                upper: Some(b),
                x: c,
                fx: fc,
                error: Some(fc.abs()),
            });
            info!("iteration = {}, c = {}, f(c) = {}", i, c, fc);
            if fc.abs() <= self.tolerance {
                self.result = Some(c);
                return Ok(ConvergenceResult {
                    root: Some(c),
                    iterations: std::mem::take(&mut self.history),
                    converged: true,
                    message: format!("converged in {} iterations", i + 1),
                });
            }
            if fa * fc < 0.0 {
                b = c;
            } else {
                a = c;
                fa = fc;
            }
        }
        warn!("Maximum number of iterations reached. Returning last midpoint.");
        self.result = Some(c);
        Ok(ConvergenceResult {
            root: Some(c),
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
    fn test_bisection_linear() {
        let expr = Expr::parse_expression("x - 2").unwrap();
        let mut solver = Bisection::from_expression(&expr, 0.0, 5.0, 1e-10, 100);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bisection_rejects_missing_sign_change() {
        let expr = Expr::parse_expression("x^2 + 1").unwrap();
        let mut solver = Bisection::from_expression(&expr, -1.0, 1.0, 1e-6, 50);
        let err = solver.main_loop().unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));
    }

    #[test]
    fn test_bisection_rejects_reversed_interval() {
        let expr = Expr::parse_expression("x - 2").unwrap();
        let mut solver = Bisection::from_expression(&expr, 5.0, 0.0, 1e-6, 50);
        let err = solver.main_loop().unwrap_err();
        assert_eq!(err, SolverError::InvalidInterval { a: 5.0, b: 0.0 });
    }

    #[test]
    fn test_bisection_cap_exhaustion_is_not_an_error() {
        let expr = Expr::parse_expression("x - 2").unwrap();
        let mut solver = Bisection::from_expression(&expr, 0.0, 5.0, 1e-12, 3);
        let result = solver.main_loop().unwrap();
        assert!(!result.converged);
        assert!(result.root.is_some());
        assert_eq!(result.iterations.len(), 3);
    }
}
