//! Synthetic division of a polynomial by a linear divisor (a*x + b) or a
//! quadratic divisor (x^2 + p*x + q): a Horner-style recurrence on the
//! coefficient vector instead of full long division. Each column of the
//! tableau is recorded as a `DivisionStep` so a caller can display the whole
//! working.
//!
//!  Example#1
//! ```
//! use RustedRoots::polynomial::division::divide_linear;
//! use RustedRoots::polynomial::poly::Polynomial;
//! let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap(); // x^2 - 3x + 2
//! let division = divide_linear(&p, 1.0, -1.0).unwrap();   // by (x - 1)
//! assert_eq!(division.quotient, vec![1.0, -2.0]);
//! assert_eq!(division.remainder, 0.0);
//! ```

use crate::polynomial::poly::{Polynomial, PolynomialError};

/// One column of the synthetic-division tableau: the incoming coefficient,
/// the carried product(s) and their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionStep {
    pub index: usize,
    pub coefficient: f64,
    pub carry: f64,
    pub value: f64,
}

/// Quotient and scalar remainder of division by (a*x + b).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDivision {
    pub quotient: Vec<f64>,
    pub remainder: f64,
    pub steps: Vec<DivisionStep>,
}

/// Quotient and linear remainder of division by (x^2 + p*x + q).
/// `remainder[0]` is the constant, `remainder[1]` the coefficient of x.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticDivision {
    pub quotient: Vec<f64>,
    pub remainder: [f64; 2],
    pub steps: Vec<DivisionStep>,
}

/// Divides P by (a*x + b) through synthetic division at the substituted
/// point b' = -b/a, then scales the quotient by 1/a so that
/// P(x) = Q(x)*(a*x + b) + remainder holds exactly.
pub fn divide_linear(p: &Polynomial, a: f64, b: f64) -> Result<LinearDivision, PolynomialError> {
    if a == 0.0 {
        return Err(PolynomialError::DivisorCoefficientZero);
    }
    let point = -b / a;
    let coeffs = p.coeffs();
    let n = coeffs.len();
    let mut steps = Vec::with_capacity(n);
    let mut row = Vec::with_capacity(n);
    let mut previous = 0.0;
    for (i, c) in coeffs.iter().enumerate() {
        let carry = if i == 0 { 0.0 } else { point * previous };
        let value = c + carry;
        steps.push(DivisionStep {
            index: i,
            coefficient: *c,
            carry,
            value,
        });
        row.push(value);
        previous = value;
    }
    let remainder = row[n - 1];
    let quotient = row[..n - 1].iter().map(|v| v / a).collect();
    Ok(LinearDivision {
        quotient,
        remainder,
        steps,
    })
}

/// Divides P by (x^2 + p*x + q) through the two-term recurrence
/// c[0] = P[0]; c[1] = P[1] - p*c[0]; c[i] = P[i] - p*c[i-1] - q*c[i-2].
/// The quotient is c[0]..c[n-2]; the remainder works out to
/// (c[n] + p*c[n-1]) + c[n-1]*x.
pub fn divide_quadratic(p: &Polynomial, pc: f64, qc: f64) -> QuadraticDivision {
    let coeffs = p.coeffs();
    let n = coeffs.len() - 1; // degree
    if n < 2 {
        // nothing to extract, the polynomial is its own remainder
        let remainder = if n == 0 {
            [coeffs[0], 0.0]
        } else {
            [coeffs[1], coeffs[0]]
        };
        return QuadraticDivision {
            quotient: Vec::new(),
            remainder,
            steps: Vec::new(),
        };
    }
    let mut steps = Vec::with_capacity(n + 1);
    let mut row: Vec<f64> = Vec::with_capacity(n + 1);
    for (i, c) in coeffs.iter().enumerate() {
        let carry = match i {
            0 => 0.0,
            1 => -pc * row[0],
            _ => -pc * row[i - 1] - qc * row[i - 2],
        };
        let value = c + carry;
        steps.push(DivisionStep {
            index: i,
            coefficient: *c,
            carry,
            value,
        });
        row.push(value);
    }
    let linear = row[n - 1];
    let constant = row[n] + pc * linear;
    QuadraticDivision {
        quotient: row[..n - 1].to_vec(),
        remainder: [constant, linear],
        steps,
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_divide_linear_exact() {
        // (x^2 - 3x + 2) / (x - 1) = x - 2
        let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap();
        let division = divide_linear(&p, 1.0, -1.0).unwrap();
        assert_eq!(division.quotient, vec![1.0, -2.0]);
        assert_eq!(division.remainder, 0.0);
        assert_eq!(division.steps.len(), 3);
    }

    #[test]
    fn test_divide_linear_scaled_divisor() {
        // (2x^2 + 3x + 1) / (2x + 1) = x + 1, remainder 0
        let p = Polynomial::new(vec![2.0, 3.0, 1.0]).unwrap();
        let division = divide_linear(&p, 2.0, 1.0).unwrap();
        assert_eq!(division.quotient, vec![1.0, 1.0]);
        assert_relative_eq!(division.remainder, 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_divide_linear_rejects_zero_coefficient() {
        let p = Polynomial::new(vec![1.0, 1.0]).unwrap();
        let err = divide_linear(&p, 0.0, 3.0).unwrap_err();
        assert_eq!(err, PolynomialError::DivisorCoefficientZero);
    }

    #[test]
    fn test_divide_linear_identity_at_sample_points() {
        // P(x) == Q(x)*(a*x + b) + remainder at sampled x
        let p = Polynomial::new(vec![3.0, -2.0, 0.5, 7.0, -1.0]).unwrap();
        let (a, b) = (2.0, -5.0);
        let division = divide_linear(&p, a, b).unwrap();
        let quotient = Polynomial::new(division.quotient.clone()).unwrap();
        for x in [-3.0, -1.0, 0.0, 0.5, 2.0, 10.0] {
            let reconstructed = quotient.eval(x) * (a * x + b) + division.remainder;
            assert_relative_eq!(p.eval(x), reconstructed, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_divide_quadratic_exact() {
        // (x^2 + p x + q)(x - 1) = x^3 + (p-1)x^2 + (q-p)x - q
        let (pc, qc) = (2.0, 3.0);
        let p = Polynomial::new(vec![1.0, pc - 1.0, qc - pc, -qc]).unwrap();
        let division = divide_quadratic(&p, pc, qc);
        assert_eq!(division.quotient, vec![1.0, -1.0]);
        assert_relative_eq!(division.remainder[0], 0.0, epsilon = 1e-14);
        assert_relative_eq!(division.remainder[1], 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_divide_quadratic_identity_at_sample_points() {
        let p = Polynomial::new(vec![1.0, -11.0, 78.0, -14.0, -444.0]).unwrap();
        let (pc, qc) = (1.5, -4.0);
        let division = divide_quadratic(&p, pc, qc);
        let quotient = Polynomial::new(division.quotient.clone()).unwrap();
        for x in [-2.0, -0.5, 0.0, 1.0, 3.0, 7.0] {
            let reconstructed = quotient.eval(x) * (x * x + pc * x + qc)
                + division.remainder[1] * x
                + division.remainder[0];
            assert_relative_eq!(p.eval(x), reconstructed, epsilon = 1e-8, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_divide_quadratic_low_degree_passthrough() {
        let p = Polynomial::new(vec![4.0, -1.0]).unwrap(); // 4x - 1
        let division = divide_quadratic(&p, 1.0, 1.0);
        assert!(division.quotient.is_empty());
        assert_eq!(division.remainder, [-1.0, 4.0]);
    }
}
