//! Newton-Raphson: x_{i+1} = x_i - f(x_i)/f'(x_i), derivative obtained
//! analytically from the symbolic expression.
//!
//! The Fourier condition f(x0)*f''(x0) > 0 is advisory: `fourier_condition`
//! reports it for the caller to warn on, the iteration itself runs regardless.
//!
//!  Example#1
//! ```
//! use RustedRoots::numerical::newton::Newton;
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let expr = Expr::parse_expression("x^2 - 4").unwrap();
//! let mut solver = Newton::from_expression(&expr, 3.0, 1e-6, 50);
//! let result = solver.main_loop().unwrap();
//! assert!(result.converged);
//! assert!((result.root.unwrap() - 2.0).abs() < 1e-6);
//! ```

use crate::numerical::solver::{
    ConvergenceResult, DERIVATIVE_CUTOFF, IterationRecord, SolverError, init_logging,
};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};

pub struct Newton {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub dfdx: Box<dyn Fn(f64) -> f64>,
    pub x0: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    // second derivative kept only for the advisory Fourier check
    d2fdx2: Option<Box<dyn Fn(f64) -> f64>>,
    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl Newton {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        dfdx: Box<dyn Fn(f64) -> f64>,
        x0: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Newton {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        Newton {
            f,
            dfdx,
            x0,
            tolerance,
            max_iterations,
            d2fdx2: None,
            history: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
        }
    }

    /// builds the solver from a symbolic expression, deriving f' and f''
    /// analytically
    pub fn from_expression(expr: &Expr, x0: f64, tolerance: f64, max_iterations: usize) -> Newton {
        let vars = expr.all_arguments_are_variables();
        assert!(!vars.is_empty(), "No variables found in the expression.");
        let var = vars[0].as_str();
        let derivative = expr.diff(var);
        let second_derivative = derivative.diff(var);
        let mut solver = Newton::new(
            expr.lambdify1D(),
            derivative.lambdify1D(),
            x0,
            tolerance,
            max_iterations,
        );
        solver.d2fdx2 = Some(second_derivative.lambdify1D());
        solver
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// advisory check f(x0)*f''(x0): a positive product suggests the seed is
    /// on the convergent side. `None` when the solver was built from raw
    /// closures and no second derivative is available.
    pub fn fourier_condition(&self) -> Option<f64> {
        self.d2fdx2
            .as_ref()
            .map(|d2f| (self.f)(self.x0) * d2f(self.x0))
    }

    /// main function to run the Newton iterations
    pub fn main_loop(&mut self) -> Result<ConvergenceResult, SolverError> {
        let mut x = self.x0;
        for i in 0..self.max_iterations {
            let fx = (self.f)(x);
            let dfx = (self.dfdx)(x);
            if dfx.abs() < DERIVATIVE_CUTOFF {
                return Err(SolverError::DerivativeNearZero { x, dfx });
            }
            let x_next = x - fx / dfx;
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
    fn test_newton_quadratic_convergence() {
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let mut solver = Newton::from_expression(&expr, 3.0, 1e-6, 50);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!(result.iterations.len() <= 10);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_newton_derivative_near_zero() {
        // f'(0) = 0 for x^2 - 4 seeded at the stationary point
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let mut solver = Newton::from_expression(&expr, 0.0, 1e-6, 50);
        let err = solver.main_loop().unwrap_err();
        assert!(matches!(err, SolverError::DerivativeNearZero { .. }));
    }

    #[test]
    fn test_newton_fourier_condition_is_advisory() {
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        // f(1)*f''(1) = (-3)*2 < 0: condition fails, the solver still runs
        let mut solver = Newton::from_expression(&expr, 1.0, 1e-8, 50);
        assert!(solver.fourier_condition().unwrap() < 0.0);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-7);
    }
}
