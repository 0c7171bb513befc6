//! Halley's method: x_{i+1} = x_i - 2 f f' / (2 f'^2 - f f''), cubic
//! convergence near simple roots at the price of a second derivative.
//!
//!  Example#1
//! ```
//! use RustedRoots::numerical::halley::Halley;
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let expr = Expr::parse_expression("x^2 - 4").unwrap();
//! let mut solver = Halley::from_expression(&expr, 3.0, 1e-8, 50);
//! let result = solver.main_loop().unwrap();
//! assert!((result.root.unwrap() - 2.0).abs() < 1e-8);
//! ```

use crate::numerical::solver::{
    ConvergenceResult, HALLEY_DENOMINATOR_CUTOFF, IterationRecord, SolverError, init_logging,
};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};

pub struct Halley {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub dfdx: Box<dyn Fn(f64) -> f64>,
    pub d2fdx2: Box<dyn Fn(f64) -> f64>,
    pub x0: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl Halley {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        dfdx: Box<dyn Fn(f64) -> f64>,
        d2fdx2: Box<dyn Fn(f64) -> f64>,
        x0: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Halley {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        Halley {
            f,
            dfdx,
            d2fdx2,
            x0,
            tolerance,
            max_iterations,
            history: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
        }
    }

    /// builds the solver from a symbolic expression, deriving f' and f''
    /// analytically
    pub fn from_expression(expr: &Expr, x0: f64, tolerance: f64, max_iterations: usize) -> Halley {
        let vars = expr.all_arguments_are_variables();
        assert!(!vars.is_empty(), "No variables found in the expression.");
        let var = vars[0].as_str();
        let derivative = expr.diff(var);
        let second_derivative = derivative.diff(var);
        Halley::new(
            expr.lambdify1D(),
            derivative.lambdify1D(),
            second_derivative.lambdify1D(),
            x0,
            tolerance,
            max_iterations,
        )
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// main function to run the Halley iterations
    pub fn main_loop(&mut self) -> Result<ConvergenceResult, SolverError> {
        let mut x = self.x0;
        for i in 0..self.max_iterations {
            let fx = (self.f)(x);
            let dfx = (self.dfdx)(x);
            let d2fx = (self.d2fdx2)(x);
            let denominator = 2.0 * dfx * dfx - fx * d2fx;
            if denominator.abs() < HALLEY_DENOMINATOR_CUTOFF {
                return Err(SolverError::DegenerateDenominator { denominator });
            }
            let x_next = x - 2.0 * fx * dfx / denominator;
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
