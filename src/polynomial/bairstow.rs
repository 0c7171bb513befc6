//! Bairstow's method: extracts real quadratic factors x^2 - r*x - s from a
//! polynomial through a damped two-variable Newton iteration on (r, s),
//! deflates to the quotient and repeats until the remainder is solvable in
//! closed form. Complex conjugate root pairs come out of the quadratic
//! formula without any complex arithmetic inside the iteration itself.
//!
//!  Example#1
//! ```
//! use RustedRoots::polynomial::bairstow::Bairstow;
//! let coeffs = vec![1.0, -11.0, 78.0, -14.0, -444.0];
//! let mut solver = Bairstow::from_coeffs(coeffs, 1.0, -2.0, 1e-3).unwrap();
//! let result = solver.main_loop();
//! assert!(result.converged);
//! assert_eq!(result.roots.len(), 4);
//! ```

use crate::numerical::solver::init_logging;
use crate::polynomial::poly::{Polynomial, PolynomialError, Root};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};
use nalgebra::{Matrix2, Vector2};
use num_complex::Complex64;
use std::collections::HashMap;
use tabled::{builder::Builder, settings::Style};

/// Jacobian determinant magnitude treated as singular; the iteration nudges
/// (r, s) by the perturbation step and tries again instead of failing.
pub const JACOBIAN_DET_CUTOFF: f64 = 1e-16;

/// One (r, s) refinement step of a quadratic extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct BairstowRecord {
    pub k: usize,
    pub r: f64,
    pub s: f64,
    pub dr: f64,
    pub ds: f64,
    pub rel_dr: f64,
    pub rel_ds: f64,
}

/// The extracted divisor x^2 - r*x - s; consumed immediately into two roots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFactor {
    pub r: f64,
    pub s: f64,
}

/// Bounded restart policy for extractions that stall: perturb the initial
/// (r0, s0) by `perturbation` and retry, at most `max_restarts` times.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_restarts: usize,
    pub perturbation: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_restarts: 5,
            perturbation: 1.0,
        }
    }
}

/// Outcome of a full deflation run. `converged = false` means some degree
/// refused to give up a quadratic factor within the retry budget; the roots
/// found up to that point and the undeflated remainder are still returned.
#[derive(Debug, Clone)]
pub struct DeflationResult {
    pub roots: Vec<Root>,
    pub remaining_coeffs: Vec<f64>,
    pub converged: bool,
    pub message: String,
    pub last_quadratic: Option<QuadraticFactor>,
    pub history: Vec<Vec<BairstowRecord>>,
}

#[derive(Debug)]
pub struct Bairstow {
    pub polynomial: Polynomial,
    pub r0: f64,
    pub s0: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub retry: RetryPolicy,
    pub dumping_factor: f64,

    pub result: Option<DeflationResult>,
    pub loglevel: Option<String>,
    calc_statistics: HashMap<String, usize>,
}

impl Bairstow {
    pub fn from_coeffs(
        coeffs: Vec<f64>,
        r0: f64,
        s0: f64,
        tolerance: f64,
    ) -> Result<Bairstow, PolynomialError> {
        let polynomial = Polynomial::new(coeffs)?;
        if polynomial.degree() < 1 {
            return Err(PolynomialError::DegreeTooLow {
                degree: polynomial.degree(),
            });
        }
        assert!(tolerance > 0.0, "Tolerance should be a positive number.");
        Ok(Bairstow {
            polynomial,
            r0,
            s0,
            tolerance,
            max_iterations: 200,
            retry: RetryPolicy::default(),
            dumping_factor: 1.0,
            result: None,
            loglevel: Some("info".to_string()),
            calc_statistics: HashMap::new(),
        })
    }

    pub fn from_expression(
        expr: &Expr,
        var: &str,
        r0: f64,
        s0: f64,
        tolerance: f64,
    ) -> Result<Bairstow, PolynomialError> {
        let polynomial = Polynomial::from_expression(expr, var)?;
        Bairstow::from_coeffs(polynomial.coeffs().to_vec(), r0, s0, tolerance)
    }

    pub fn set_solver_params(
        &mut self,
        loglevel: Option<String>,
        damping_factor: Option<f64>,
        retry: Option<RetryPolicy>,
    ) {
        if let Some(level) = loglevel {
            assert!(
                level == "debug"
                    || level == "info"
                    || level == "warn"
                    || level == "error"
                    || level == "off",
                "loglevel must be debug/info, warn, error or off"
            );
            self.loglevel = Some(level);
        }
        if let Some(damping_factor) = damping_factor {
            assert!(
                damping_factor > 0.0 && damping_factor <= 1.0,
                "Dumping factor should be between 0.0 and 1.0."
            );
            self.dumping_factor = damping_factor;
        }
        if let Some(retry) = retry {
            self.retry = retry;
        }
    }

    // synthetic division of `coeffs` by x^2 - r*x - s: the b row carries the
    // quotient and remainder, the c row the partial derivatives
    fn division_rows(coeffs: &[f64], r: f64, s: f64) -> (Vec<f64>, Vec<f64>) {
        let n = coeffs.len() - 1;
        let mut b = vec![0.0; n + 1];
        for i in 0..=n {
            let carry = match i {
                0 => 0.0,
                1 => r * b[0],
                _ => r * b[i - 1] + s * b[i - 2],
            };
            b[i] = coeffs[i] + carry;
        }
        let mut c = vec![0.0; n];
        for i in 0..n {
            let carry = match i {
                0 => 0.0,
                1 => r * c[0],
                _ => r * c[i - 1] + s * c[i - 2],
            };
            c[i] = b[i] + carry;
        }
        (b, c)
    }

    /// One damped Newton run on (r, s) for the current working coefficients.
    /// Returns the converged factor and quotient, plus the step trace; `None`
    /// when the inner iteration cap runs out.
    fn quadratic_extraction(
        &mut self,
        coeffs: &[f64],
        r0: f64,
        s0: f64,
    ) -> (Option<(QuadraticFactor, Vec<f64>)>, Vec<BairstowRecord>) {
        let n = coeffs.len() - 1;
        let mut r = r0;
        let mut s = s0;
        let mut trace = Vec::new();
        for k in 0..self.max_iterations {
            let (b, c) = Self::division_rows(coeffs, r, s);
            let jacobian = Matrix2::new(c[n - 2], c[n - 3], c[n - 1], c[n - 2]);
            let determinant = jacobian.determinant();
            if determinant.abs() < JACOBIAN_DET_CUTOFF {
                // degeneracy avoidance, not a failure: nudge and retry
                warn!(
                    "singular Jacobian at k = {}, perturbing (r, s) by {}",
                    k, self.retry.perturbation
                );
                r += self.retry.perturbation;
                s += self.retry.perturbation;
                *self
                    .calc_statistics
                    .entry("singular Jacobian perturbations".to_string())
                    .or_insert(0) += 1;
                continue;
            }
            let rhs = Vector2::new(-b[n - 1], -b[n]);
            let delta = match jacobian.lu().solve(&rhs) {
                Some(delta) => delta,
                None => {
                    r += self.retry.perturbation;
                    s += self.retry.perturbation;
                    continue;
                }
            };
            let dr = self.dumping_factor * delta[0];
            let ds = self.dumping_factor * delta[1];
            r += dr;
            s += ds;
            let rel_dr = dr.abs() / r.abs().max(1.0);
            let rel_ds = ds.abs() / s.abs().max(1.0);
            trace.push(BairstowRecord {
                k,
                r,
                s,
                dr,
                ds,
                rel_dr,
                rel_ds,
            });
            info!(
                "k = {}, r = {}, s = {}, rel_dr = {}, rel_ds = {}",
                k, r, s, rel_dr, rel_ds
            );
            *self
                .calc_statistics
                .entry("total (r, s) iterations".to_string())
                .or_insert(0) += 1;
            if rel_dr < self.tolerance && rel_ds < self.tolerance {
                let (b, _) = Self::division_rows(coeffs, r, s);
                let quotient = b[..n - 1].to_vec();
                return (Some((QuadraticFactor { r, s }, quotient)), trace);
            }
        }
        (None, trace)
    }

    /// roots of the extracted factor x^2 - r*x - s
    fn solve_factor(factor: &QuadraticFactor) -> [Root; 2] {
        let discriminant = factor.r * factor.r + 4.0 * factor.s;
        if discriminant >= 0.0 {
            let sq = discriminant.sqrt();
            [
                Root::Real(0.5 * (factor.r + sq)),
                Root::Real(0.5 * (factor.r - sq)),
            ]
        } else {
            let imaginary = 0.5 * (-discriminant).sqrt();
            [
                Root::Complex(Complex64::new(0.5 * factor.r, imaginary)),
                Root::Complex(Complex64::new(0.5 * factor.r, -imaginary)),
            ]
        }
    }

    /// closed-form roots of A*x^2 + B*x + C
    fn solve_quadratic(a: f64, b: f64, c: f64) -> [Root; 2] {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let sq = discriminant.sqrt();
            [
                Root::Real((-b + sq) / (2.0 * a)),
                Root::Real((-b - sq) / (2.0 * a)),
            ]
        } else {
            let re = -b / (2.0 * a);
            let im = (-discriminant).sqrt() / (2.0 * a);
            [
                Root::Complex(Complex64::new(re, im)),
                Root::Complex(Complex64::new(re, -im)),
            ]
        }
    }

    /// main function to run the deflation loop
    pub fn main_loop(&mut self) -> DeflationResult {
        let mut working: Vec<f64> = self.polynomial.coeffs().to_vec();
        let mut roots: Vec<Root> = Vec::new();
        let mut history: Vec<Vec<BairstowRecord>> = Vec::new();
        let mut last_quadratic: Option<QuadraticFactor> = None;
        let mut converged = true;
        let mut message = "converged".to_string();

        while working.len() - 1 > 2 {
            let degree = working.len() - 1;
            let mut extracted: Option<(QuadraticFactor, Vec<f64>)> = None;
            for restart in 0..=self.retry.max_restarts {
                let shift = restart as f64 * self.retry.perturbation;
                let (outcome, trace) =
                    self.quadratic_extraction(&working, self.r0 + shift, self.s0 + shift);
                history.push(trace);
                if restart > 0 {
                    *self
                        .calc_statistics
                        .entry("initial guess restarts".to_string())
                        .or_insert(0) += 1;
                }
                if outcome.is_some() {
                    extracted = outcome;
                    break;
                }
                warn!(
                    "extraction stalled at degree {}, restarting with perturbed initial guess",
                    degree
                );
            }
            match extracted {
                Some((factor, quotient)) => {
                    info!(
                        "extracted x^2 - ({})*x - ({}) at degree {}",
                        factor.r, factor.s, degree
                    );
                    roots.extend(Self::solve_factor(&factor));
                    last_quadratic = Some(factor);
                    working = quotient;
                    *self
                        .calc_statistics
                        .entry("quadratic extractions".to_string())
                        .or_insert(0) += 1;
                }
                None => {
                    converged = false;
                    message = format!(
                        "no quadratic factor found at degree {} within {} restarts",
                        degree, self.retry.max_restarts
                    );
                    warn!("{}", message);
                    break;
                }
            }
        }

        if converged {
            match working.len() - 1 {
                2 => roots.extend(Self::solve_quadratic(working[0], working[1], working[2])),
                1 => roots.push(Root::Real(-working[1] / working[0])),
                _ => {}
            }
        }

        let result = DeflationResult {
            roots,
            remaining_coeffs: working,
            converged,
            message,
            last_quadratic,
            history,
        };
        self.result = Some(result.clone());
        result
    }

    // wrapper around main_loop to implement logging and statistics
    pub fn solve(&mut self) -> DeflationResult {
        init_logging(&self.loglevel);
        let result = self.main_loop();
        self.calc_statistics
            .insert("roots found".to_string(), result.roots.len());
        self.calc_statistics
            .insert("polynomial degree".to_string(), self.polynomial.degree());
        self.print_statistics();
        result
    }

    pub fn get_result(&self) -> Option<DeflationResult> {
        self.result.clone()
    }

    fn print_statistics(&self) {
        let mut builder = Builder::default();
        builder.push_record(["statistic", "value"]);
        let mut entries: Vec<(&String, &usize)> = self.calc_statistics.iter().collect();
        entries.sort();
        for (key, value) in entries {
            builder.push_record([key.as_str(), value.to_string().as_str()]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table);
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // expand (x^2 - r*x - s) * (q0*x^2 + q1*x + q2)
    fn expand_factor_product(factor: &QuadraticFactor, q: &[f64]) -> Vec<f64> {
        let lhs = [1.0, -factor.r, -factor.s];
        let mut out = vec![0.0; 3 + q.len() - 1];
        for (i, a) in lhs.iter().enumerate() {
            for (j, b) in q.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        out
    }

    #[test]
    fn test_bairstow_round_trip() {
        let coeffs = vec![1.0, -11.0, 78.0, -14.0, -444.0];
        let mut solver = Bairstow::from_coeffs(coeffs.clone(), 1.0, -2.0, 1e-3).unwrap();
        let result = solver.main_loop();
        assert!(result.converged, "{}", result.message);
        assert_eq!(result.roots.len(), 4);
        // the product of the extracted factor and the degree-2 remainder must
        // reproduce the original coefficients within the scaled tolerance
        let factor = result.last_quadratic.unwrap();
        let product = expand_factor_product(&factor, &result.remaining_coeffs);
        assert_eq!(product.len(), coeffs.len());
        for (expected, got) in coeffs.iter().zip(product.iter()) {
            let scale = expected.abs().max(1.0);
            assert!(
                (expected - got).abs() < 1e-3 * scale,
                "coefficient {} drifted to {}",
                expected,
                got
            );
        }
    }

    #[test]
    fn test_bairstow_real_roots() {
        // (x-1)(x-2)(x-3)(x-4) = x^4 - 10x^3 + 35x^2 - 50x + 24
        let coeffs = vec![1.0, -10.0, 35.0, -50.0, 24.0];
        let mut solver = Bairstow::from_coeffs(coeffs, 0.0, 0.0, 1e-10).unwrap();
        let result = solver.main_loop();
        assert!(result.converged);
        let mut reals: Vec<f64> = result
            .roots
            .iter()
            .map(|root| match root {
                Root::Real(x) => *x,
                Root::Complex(z) => panic!("unexpected complex root {}", z),
            })
            .collect();
        reals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (got, expected) in reals.iter().zip([1.0, 2.0, 3.0, 4.0]) {
            assert_relative_eq!(*got, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_bairstow_complex_pair() {
        // (x^2 + 1)(x - 3): one real root and a conjugate pair
        let coeffs = vec![1.0, -3.0, 1.0, -3.0];
        let mut solver = Bairstow::from_coeffs(coeffs, 0.5, 0.5, 1e-10).unwrap();
        let result = solver.main_loop();
        assert!(result.converged);
        assert_eq!(result.roots.len(), 3);
        let complex_count = result
            .roots
            .iter()
            .filter(|root| matches!(root, Root::Complex(_)))
            .count();
        let real_count = result.roots.len() - complex_count;
        assert_eq!(complex_count, 2);
        assert_eq!(real_count, 1);
        for root in &result.roots {
            match root {
                Root::Real(x) => assert_relative_eq!(*x, 3.0, epsilon = 1e-6),
                Root::Complex(z) => {
                    assert_relative_eq!(z.re, 0.0, epsilon = 1e-6);
                    assert_relative_eq!(z.im.abs(), 1.0, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_bairstow_cubic_base_case() {
        // degree 3: one extraction then a linear remainder
        // (x^2 - 2x - 3)(x - 5) = x^3 - 7x^2 + 7x + 15
        let coeffs = vec![1.0, -7.0, 7.0, 15.0];
        let mut solver = Bairstow::from_coeffs(coeffs, 0.0, 0.0, 1e-10).unwrap();
        let result = solver.main_loop();
        assert!(result.converged);
        assert_eq!(result.roots.len(), 3);
        let mut reals: Vec<f64> = result
            .roots
            .iter()
            .map(|root| match root {
                Root::Real(x) => *x,
                Root::Complex(z) => panic!("unexpected complex root {}", z),
            })
            .collect();
        reals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (got, expected) in reals.iter().zip([-1.0, 3.0, 5.0]) {
            assert_relative_eq!(*got, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_bairstow_degree_two_is_closed_form() {
        let coeffs = vec![1.0, -3.0, 2.0];
        let mut solver = Bairstow::from_coeffs(coeffs, 0.0, 0.0, 1e-10).unwrap();
        let result = solver.main_loop();
        assert!(result.converged);
        assert!(result.history.is_empty());
        assert_eq!(result.roots.len(), 2);
    }

    #[test]
    fn test_bairstow_rejects_zero_leading_coefficient() {
        let err = Bairstow::from_coeffs(vec![0.0, 1.0, 1.0], 0.0, 0.0, 1e-6).unwrap_err();
        assert_eq!(err, PolynomialError::LeadingCoefficientZero);
    }
}
