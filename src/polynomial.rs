#![allow(non_snake_case)]
/// Polynomial analysis: synthetic division, Bairstow quadratic-factor
/// deflation and classical real-root bound estimators.
///
///  Example#1
/// ```
/// use RustedRoots::polynomial::bairstow::Bairstow;
/// let mut solver = Bairstow::from_coeffs(vec![1.0, -11.0, 78.0, -14.0, -444.0], 1.0, -2.0, 1e-3).unwrap();
/// let result = solver.main_loop();
/// assert!(result.converged);
/// assert_eq!(result.roots.len(), 4);
/// ```
/// Example#2
/// ```
/// use RustedRoots::polynomial::bounds::{bounds, BoundKind};
/// use RustedRoots::polynomial::poly::Polynomial;
/// let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap(); // roots 1 and 2
/// let set = bounds(BoundKind::Lagrange, &p);
/// assert!(set.upper_positive.unwrap() >= 2.0);
/// assert!(set.lower_positive.unwrap() <= 1.0);
/// ```
pub mod poly;

/// synthetic division by linear and quadratic divisors with step traces
pub mod division;

/// Bairstow's method: damped two-variable Newton on the quadratic factor
/// x^2 - r*x - s, deflating until the remainder is solvable in closed form
pub mod bairstow;

/// Lagrange / Laguerre / Newton real-root bound families composed four ways
/// through the transformations t -> 1/t, t -> -1/t, t -> -t
pub mod bounds;

#[cfg(test)]
mod polynomial_tests;
