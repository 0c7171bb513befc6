//! # Symbolic Polynomial Classification
//!
//! Walks an expression tree over a closed node set and either extracts the
//! coefficient vector of a univariate polynomial or rejects the expression.
//! Accepted nodes: constants, the polynomial variable, `Add`, `Sub`, `Mul`,
//! unary negation (as `Mul(-1, _)`) and `Pow(var-expression, non-negative
//! integer constant)`. Anything else (`Div` by the variable, `Exp`, `Ln`,
//! trigonometric nodes, variable exponents) is a structured rejection, never
//! a guess.
//!
//!# Example
//! ```
//! use RustedRoots::symbolic::symbolic_engine::Expr;
//! let expr = Expr::parse_expression("x^2 - 3*x + 2").unwrap();
//! let coeffs = expr.to_polynomial_coeffs("x").unwrap();
//! assert_eq!(coeffs, vec![1.0, -3.0, 2.0]);
//! ```

use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;

// dense coefficient vector in ascending power order, index = power
type AscendingCoeffs = Vec<f64>;

fn add_vectors(a: &AscendingCoeffs, b: &AscendingCoeffs) -> AscendingCoeffs {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| a.get(i).copied().unwrap_or(0.0) + b.get(i).copied().unwrap_or(0.0))
        .collect()
}

fn scale_vector(a: &AscendingCoeffs, factor: f64) -> AscendingCoeffs {
    a.iter().map(|c| c * factor).collect()
}

fn multiply_vectors(a: &AscendingCoeffs, b: &AscendingCoeffs) -> AscendingCoeffs {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

impl Expr {
    /// Classifies the expression as a polynomial in `var` and extracts its
    /// coefficients, highest degree first (the `Polynomial` storage order).
    ///
    /// Returns `ParseError::NotPolynomial` for any node outside the closed
    /// polynomial set.
    pub fn to_polynomial_coeffs(&self, var: &str) -> Result<Vec<f64>, ParseError> {
        let ascending = self.polynomial_vector(var)?;
        let mut descending: Vec<f64> = ascending.into_iter().rev().collect();
        // strip leading zeros so the leading-coefficient invariant can hold
        while descending.len() > 1 && descending[0] == 0.0 {
            descending.remove(0);
        }
        if descending.is_empty() {
            descending.push(0.0);
        }
        Ok(descending)
    }

    fn polynomial_vector(&self, var: &str) -> Result<AscendingCoeffs, ParseError> {
        let reject = |reason: &str| ParseError::NotPolynomial {
            var: var.to_string(),
            reason: reason.to_string(),
        };
        match self {
            Expr::Const(val) => Ok(vec![*val]),
            Expr::Var(name) => {
                if name == var {
                    Ok(vec![0.0, 1.0])
                } else {
                    Err(reject(&format!("foreign variable `{}`", name)))
                }
            }
            Expr::Add(lhs, rhs) => Ok(add_vectors(
                &lhs.polynomial_vector(var)?,
                &rhs.polynomial_vector(var)?,
            )),
            Expr::Sub(lhs, rhs) => Ok(add_vectors(
                &lhs.polynomial_vector(var)?,
                &scale_vector(&rhs.polynomial_vector(var)?, -1.0),
            )),
            Expr::Mul(lhs, rhs) => Ok(multiply_vectors(
                &lhs.polynomial_vector(var)?,
                &rhs.polynomial_vector(var)?,
            )),
            Expr::Div(lhs, rhs) => {
                if !rhs.all_arguments_are_variables().is_empty() {
                    return Err(reject("non-constant divisor"));
                }
                let divisor = rhs.eval_expression(var, 0.0);
                if divisor == 0.0 {
                    return Err(reject("division by zero constant"));
                }
                Ok(scale_vector(&lhs.polynomial_vector(var)?, 1.0 / divisor))
            }
            Expr::Pow(base, exp) => {
                let power = match exp.as_ref() {
                    Expr::Const(p) => *p,
                    _ => return Err(reject("non-constant exponent")),
                };
                if power < 0.0 || power.fract() != 0.0 {
                    return Err(reject("exponent is not a non-negative integer"));
                }
                let base_vector = base.polynomial_vector(var)?;
                let mut out = vec![1.0];
                for _ in 0..(power as usize) {
                    out = multiply_vectors(&out, &base_vector);
                }
                Ok(out)
            }
            Expr::Exp(_) | Expr::Ln(_) => Err(reject("transcendental node")),
            Expr::sin(_) | Expr::cos(_) | Expr::tg(_) | Expr::ctg(_) => {
                Err(reject("trigonometric node"))
            }
        }
    }
}
