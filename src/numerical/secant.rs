//! Secant method: the Newton update with the derivative replaced by the
//! finite slope through the two most recent iterates.
//!
//!  Example#1
//! ```
//! use RustedRoots::numerical::secant::Secant;
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let expr = Expr::parse_expression("x^2 - 4").unwrap();
//! let mut solver = Secant::from_expression(&expr, 1.0, 3.0, 1e-8, 50);
//! let result = solver.main_loop().unwrap();
//! assert!((result.root.unwrap() - 2.0).abs() < 1e-7);
//! ```

use crate::numerical::solver::{
    ConvergenceResult, IterationRecord, SECANT_DENOMINATOR_CUTOFF, SolverError, init_logging,
};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};

pub struct Secant {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub x0: f64,
    pub x1: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl Secant {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        x0: f64,
        x1: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Secant {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        Secant {
            f,
            x0,
            x1,
            tolerance,
            max_iterations,
            history: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
        }
    }

    pub fn from_expression(
        expr: &Expr,
        x0: f64,
        x1: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Secant {
        Secant::new(expr.lambdify1D(), x0, x1, tolerance, max_iterations)
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// main function to run the secant iterations
    pub fn main_loop(&mut self) -> Result<ConvergenceResult, SolverError> {
        let mut x_prev = self.x0;
        let mut x = self.x1;
        let mut f_prev = (self.f)(x_prev);
        for i in 0..self.max_iterations {
            let fx = (self.f)(x);
            let denominator = fx - f_prev;
            if denominator.abs() < SECANT_DENOMINATOR_CUTOFF {
                return Err(SolverError::DegenerateDenominator { denominator });
            }
            let x_next = (x_prev * fx - x * f_prev) / denominator;
            let delta = (x_next - x).abs();
            self.history.push(IterationRecord {
                i,
                lower: None,
                upper: None,
                x: x_next,
                fx: (self.f)(x_next),
                error: Some(delta),
            });
            info!("iteration = {}, x = {}, error = {}", i, x_next, delta);
            if delta < self.tolerance {
                self.result = Some(x_next);
                return Ok(ConvergenceResult {
                    root: Some(x_next),
                    iterations: std::mem::take(&mut self.history),
                    converged: true,
                    message: format!("converged in {} iterations", i + 1),
                });
            }
            x_prev = x;
            f_prev = fx;
            x = x_next;
        }
        warn!("Maximum number of iterations reached. Returning last estimate.");
        self.result = Some(x);
        Ok(ConvergenceResult {
            root: Some(x),
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
    fn test_secant_quadratic() {
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let mut solver = Secant::from_expression(&expr, 1.0, 3.0, 1e-8, 50);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-7);
    }

    #[test]
    fn test_secant_degenerate_denominator() {
        // symmetric seeds give f(x0) = f(x1) exactly
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let mut solver = Secant::from_expression(&expr, -3.0, 3.0, 1e-8, 50);
        let err = solver.main_loop().unwrap_err();
        assert!(matches!(err, SolverError::DegenerateDenominator { .. }));
    }

    #[test]
    fn test_secant_transcendental() {
        let expr = Expr::parse_expression("cos(x) - x").unwrap();
        let mut solver = Secant::from_expression(&expr, 0.0, 1.0, 1e-10, 100);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!((result.root.unwrap() - 0.739085133215161).abs() < 1e-8);
    }
}
