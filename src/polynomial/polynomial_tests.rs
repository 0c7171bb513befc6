use crate::polynomial::bairstow::Bairstow;
use crate::polynomial::bounds::{BoundKind, bounds};
use crate::polynomial::division::{divide_linear, divide_quadratic};
use crate::polynomial::poly::{Polynomial, PolynomialError, Root};
use crate::symbolic::symbolic_engine::Expr;
use approx::assert_relative_eq;

//___________________________________TESTS____________________________________

#[test]
fn test_polynomial_rejects_zero_leading_coefficient() {
    let err = Polynomial::new(vec![0.0, 1.0, 2.0]).unwrap_err();
    assert_eq!(err, PolynomialError::LeadingCoefficientZero);
    let err = Polynomial::new(vec![]).unwrap_err();
    assert_eq!(err, PolynomialError::Empty);
}

#[test]
fn test_polynomial_eval_horner() {
    let p = Polynomial::new(vec![2.0, -3.0, 0.0, 5.0]).unwrap(); // 2x^3 - 3x^2 + 5
    assert_relative_eq!(p.eval(2.0), 9.0, epsilon = 1e-14);
    assert_relative_eq!(p.eval(0.0), 5.0, epsilon = 1e-14);
    assert_relative_eq!(p.eval(-1.0), 0.0, epsilon = 1e-14);
}

#[test]
fn test_polynomial_derivative() {
    let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap();
    let dp = p.derivative();
    assert_eq!(dp.coeffs(), &[2.0, -3.0]);
    let constant = Polynomial::new(vec![7.0]).unwrap();
    assert_eq!(constant.derivative().coeffs(), &[0.0]);
}

#[test]
fn test_polynomial_transformations() {
    let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap();
    // t^2 * P(1/t) reverses the coefficients
    assert_eq!(p.reversed().unwrap().coeffs(), &[2.0, -3.0, 1.0]);
    // P(-t) flips odd powers: roots move to -1 and -2
    let flipped = p.alternate_signs();
    assert_eq!(flipped.coeffs(), &[1.0, 3.0, 2.0]);
    assert_relative_eq!(flipped.eval(-1.0), 0.0, epsilon = 1e-14);
}

#[test]
fn test_polynomial_from_expression() {
    let expr = Expr::parse_expression("(x-1)(x-2)(x+3)").unwrap();
    let p = Polynomial::from_expression(&expr, "x").unwrap();
    assert_eq!(p.coeffs(), &[1.0, 0.0, -7.0, 6.0]);
    assert_relative_eq!(p.eval(1.0), 0.0, epsilon = 1e-12);
}

#[test]
fn test_polynomial_from_expression_rejects_zero() {
    let expr = Expr::parse_expression("x - x").unwrap();
    let err = Polynomial::from_expression(&expr, "x").unwrap_err();
    assert_eq!(err, PolynomialError::LeadingCoefficientZero);
}

#[test]
fn test_polynomial_display() {
    let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap();
    assert_eq!(p.to_string(), "1*x^2 - 3*x + 2");
}

#[test]
fn test_division_then_deflation_consistency() {
    // dividing out a root found by Bairstow leaves a residual near zero
    let coeffs = vec![1.0, -6.0, 11.0, -6.0]; // (x-1)(x-2)(x-3)
    let mut solver = Bairstow::from_coeffs(coeffs.clone(), 0.0, 0.0, 1e-12).unwrap();
    let result = solver.main_loop();
    assert!(result.converged);
    let p = Polynomial::new(coeffs).unwrap();
    for root in &result.roots {
        if let Root::Real(x) = root {
            let division = divide_linear(&p, 1.0, -x).unwrap();
            assert_relative_eq!(division.remainder, 0.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_quadratic_division_agrees_with_bairstow_rows() {
    // divide_quadratic with p = -r, q = -s is the deflation primitive
    let p = Polynomial::new(vec![1.0, -11.0, 78.0, -14.0, -444.0]).unwrap();
    let (r, s) = (3.0, 10.0);
    let division = divide_quadratic(&p, -r, -s);
    let quotient = Polynomial::new(division.quotient.clone()).unwrap();
    for x in [-1.0, 0.0, 2.0, 5.0] {
        let reconstructed = quotient.eval(x) * (x * x - r * x - s)
            + division.remainder[1] * x
            + division.remainder[0];
        assert_relative_eq!(p.eval(x), reconstructed, epsilon = 1e-8, max_relative = 1e-12);
    }
}

#[test]
fn test_bounds_enclose_bairstow_roots() {
    // the bound estimators and the deflator must agree: every real root lies
    // inside one of the two bound intervals
    let coeffs = vec![1.0, -2.0, -5.0, 6.0]; // roots -2, 1, 3
    let p = Polynomial::new(coeffs.clone()).unwrap();
    let mut solver = Bairstow::from_coeffs(coeffs, 0.0, 0.0, 1e-12).unwrap();
    let result = solver.main_loop();
    assert!(result.converged);
    let set = bounds(BoundKind::Laguerre, &p);
    for root in &result.roots {
        if let Root::Real(x) = root {
            if *x > 0.0 {
                assert!(*x <= set.upper_positive.unwrap() + 1e-9);
                assert!(*x >= set.lower_positive.unwrap() - 1e-9);
            } else {
                assert!(*x >= set.lower_negative.unwrap() - 1e-9);
                assert!(*x <= set.upper_negative.unwrap() + 1e-9);
            }
        }
    }
}
