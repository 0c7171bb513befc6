//! The polynomial value type: a dense coefficient vector, highest degree
//! first, with a non-zero leading coefficient enforced at entry. Instances
//! are immutable; every transformation returns a new polynomial.

use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use num_complex::Complex64;
use std::fmt;
use thiserror::Error;

/// Construction and divisor violations. Rejected before any algorithm runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolynomialError {
    #[error("leading coefficient must not be zero")]
    LeadingCoefficientZero,
    #[error("polynomial needs at least one coefficient")]
    Empty,
    #[error("linear divisor coefficient a must not be zero")]
    DivisorCoefficientZero,
    #[error("degree {degree} too low for quadratic extraction")]
    DegreeTooLow { degree: usize },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A root of a real polynomial: a real scalar or one member of a complex
/// conjugate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
    Real(f64),
    Complex(Complex64),
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Root::Real(x) => write!(f, "{}", x),
            Root::Complex(z) => write!(f, "{} + {}i", z.re, z.im),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients ordered highest degree first.
    /// A zero (or missing) leading coefficient is rejected at entry.
    pub fn new(coeffs: Vec<f64>) -> Result<Polynomial, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::Empty);
        }
        if coeffs[0] == 0.0 {
            return Err(PolynomialError::LeadingCoefficientZero);
        }
        Ok(Polynomial { coeffs })
    }

    /// Builds a polynomial from a symbolic expression in `var`, rejecting
    /// non-polynomial expressions through the classifier.
    pub fn from_expression(expr: &Expr, var: &str) -> Result<Polynomial, PolynomialError> {
        let coeffs = expr.to_polynomial_coeffs(var)?;
        if coeffs == vec![0.0] {
            // the zero polynomial has no leading coefficient to speak of
            return Err(PolynomialError::LeadingCoefficientZero);
        }
        Polynomial::new(coeffs)
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Horner evaluation.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, c| acc * x + c)
    }

    /// Coefficients of the derivative polynomial. The derivative of a
    /// constant is the zero constant polynomial.
    pub fn derivative(&self) -> Polynomial {
        let n = self.degree();
        if n == 0 {
            return Polynomial { coeffs: vec![0.0] };
        }
        let coeffs = self
            .coeffs
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, c)| c * ((n - i) as f64))
            .collect();
        Polynomial { coeffs }
    }

    /// Negates all coefficients when the leading one is negative, so that
    /// bound primitives always see a positive leading coefficient.
    /// Idempotent.
    pub fn normalize_sign(&self) -> Polynomial {
        if self.coeffs[0] < 0.0 {
            Polynomial {
                coeffs: self.coeffs.iter().map(|c| -c).collect(),
            }
        } else {
            self.clone()
        }
    }

    /// Coefficient reversal, t^n * P(1/t). `None` when the constant term is
    /// zero (the reversed vector would have no leading coefficient).
    pub fn reversed(&self) -> Option<Polynomial> {
        if *self.coeffs.last().unwrap() == 0.0 {
            return None;
        }
        let coeffs: Vec<f64> = self.coeffs.iter().rev().copied().collect();
        Some(Polynomial { coeffs })
    }

    /// P(-t): negates the coefficients of odd powers.
    pub fn alternate_signs(&self) -> Polynomial {
        let n = self.degree();
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let power = n - i;
                if power % 2 == 1 { -c } else { *c }
            })
            .collect();
        Polynomial { coeffs }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.degree();
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if *c == 0.0 && n > 0 {
                continue;
            }
            let power = n - i;
            if first {
                write!(f, "{}", c)?;
                first = false;
            } else if *c < 0.0 {
                write!(f, " - {}", -c)?;
            } else {
                write!(f, " + {}", c)?;
            }
            match power {
                0 => {}
                1 => write!(f, "*x")?,
                _ => write!(f, "*x^{}", power)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
