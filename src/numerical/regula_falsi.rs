//! Regula falsi: replace the bisection midpoint with the secant-interpolated
//! point of the bracket. The modified (Illinois-style) variant halves the
//! function value of whichever bracket end stagnates, which restores fast
//! convergence on convex functions where pure regula falsi pins one end.
//!
//!  Example#1
//! ```
//! use RustedRoots::numerical::regula_falsi::RegulaFalsi;
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let expr = Expr::parse_expression("x^2 - 4").unwrap();
//! let mut solver = RegulaFalsi::from_expression(&expr, 0.0, 5.0, 1e-8, 200);
//! let result = solver.main_loop().unwrap();
//! assert!((result.root.unwrap() - 2.0).abs() < 1e-6);
//! ```

use crate::numerical::solver::{
    ConvergenceResult, IterationRecord, SolverError, init_logging,
};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};

pub struct RegulaFalsi {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl RegulaFalsi {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        a: f64,
        b: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> RegulaFalsi {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        RegulaFalsi {
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
    ) -> RegulaFalsi {
        RegulaFalsi::new(expr.lambdify1D(), a, b, tolerance, max_iterations)
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// main function to run the false-position iterations
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
        let mut fb = (self.f)(b);
        if fa * fb > 0.0 {
            return Err(SolverError::NoSignChange { fa, fb });
        }
        let mut c = a;
        for i in 0..self.max_iterations {
            c = (a * fb - b * fa) / (fb - fa);
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
                fb = fc;
            } else {
                a = c;
                fa = fc;
            }
        }
        warn!("Maximum number of iterations reached. Returning last interpolant.");
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

pub struct RegulaFalsiModified {
    pub f: Box<dyn Fn(f64) -> f64>,
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub max_iterations: usize,

    pub history: Vec<IterationRecord>,
    pub result: Option<f64>,
    pub loglevel: Option<String>,
}

impl RegulaFalsiModified {
    pub fn new(
        f: Box<dyn Fn(f64) -> f64>,
        a: f64,
        b: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> RegulaFalsiModified {
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        assert!(
            max_iterations >= 1,
            "Max iterations should be a positive number."
        );
        RegulaFalsiModified {
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
    ) -> RegulaFalsiModified {
        RegulaFalsiModified::new(expr.lambdify1D(), a, b, tolerance, max_iterations)
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// main function to run the Illinois-corrected false-position iterations.
    /// F and G are the working function values at the bracket ends; w keeps
    /// the previous f(c) so a stagnant end can be detected and halved.
    pub fn main_loop(&mut self) -> Result<ConvergenceResult, SolverError> {
        if self.a >= self.b {
            return Err(SolverError::InvalidInterval {
                a: self.a,
                b: self.b,
            });
        }
        let mut a = self.a;
        let mut b = self.b;
        let mut F = (self.f)(a);
        let mut G = (self.f)(b);
        if F * G > 0.0 {
            return Err(SolverError::NoSignChange { fa: F, fb: G });
        }
        let mut w = 0.0;
        let mut c = a;
        for i in 0..self.max_iterations {
            c = (a * G - b * F) / (G - F);
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
            if F * fc < 0.0 {
                // root stays in [a, c]; b moves, a stagnates
                b = c;
                G = fc;
                if w * fc > 0.0 {
                    F *= 0.5;
                }
            } else {
                a = c;
                F = fc;
                if w * fc > 0.0 {
                    G *= 0.5;
                }
            }
            w = fc;
        }
        warn!("Maximum number of iterations reached. Returning last interpolant.");
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
    fn test_regula_falsi_quadratic() {
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let mut solver = RegulaFalsi::from_expression(&expr, 0.0, 5.0, 1e-8, 200);
        let result = solver.main_loop().unwrap();
        assert!(result.converged);
        assert!((result.root.unwrap() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_modified_beats_pure_on_convex_function() {
        // pure regula falsi pins the right end of x^2 - 4 on [0, 5]; the
        // Illinois correction needs fewer iterations to the same tolerance
        let expr = Expr::parse_expression("x^2 - 4").unwrap();
        let mut pure = RegulaFalsi::from_expression(&expr, 0.0, 5.0, 1e-10, 500);
        let mut modified = RegulaFalsiModified::from_expression(&expr, 0.0, 5.0, 1e-10, 500);
        let pure_result = pure.main_loop().unwrap();
        let modified_result = modified.main_loop().unwrap();
        assert!(pure_result.converged);
        assert!(modified_result.converged);
        assert!((modified_result.root.unwrap() - 2.0).abs() < 1e-8);
        assert!(modified_result.iterations.len() <= pure_result.iterations.len());
    }

    #[test]
    fn test_modified_rejects_missing_sign_change() {
        let expr = Expr::parse_expression("x^2 + 1").unwrap();
        let mut solver = RegulaFalsiModified::from_expression(&expr, -1.0, 1.0, 1e-6, 50);
        let err = solver.main_loop().unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));
    }
}
