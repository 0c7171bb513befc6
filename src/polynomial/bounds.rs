//! Classical real-root bound estimators. One "local" primitive (Lagrange,
//! Laguerre or Newton) bounds the positive roots of a sign-normalized
//! polynomial from above; three companion bounds follow by re-applying the
//! same primitive to the transformed polynomials t^n*P(1/t), t^n*P(-1/t)
//! and P(-t). A primitive that cannot produce a bound (search cap exhausted,
//! zero constant term under reversal) yields `None` for that bound only.
//!
//!  Example#1
//! ```
//! use RustedRoots::polynomial::bounds::{bounds, BoundKind};
//! use RustedRoots::polynomial::poly::Polynomial;
//! let p = Polynomial::new(vec![1.0, -3.0, 2.0]).unwrap(); // roots 1 and 2
//! let set = bounds(BoundKind::Laguerre, &p);
//! assert!(set.upper_positive.unwrap() >= 2.0);
//! assert!(set.lower_positive.unwrap() <= 1.0);
//! ```

use crate::polynomial::division::divide_linear;
use crate::polynomial::poly::Polynomial;
use log::debug;
use strum_macros::{Display, EnumString};

/// integer search cap of the Laguerre primitive
pub const LAGUERRE_SEARCH_CAP: usize = 10000;
/// integer search cap of the Newton primitive
pub const NEWTON_SEARCH_CAP: usize = 1000;

/// Bound family selector; parses from and prints as "lagrange", "laguerre",
/// "newton".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BoundKind {
    Lagrange,
    Laguerre,
    Newton,
}

/// The four related bounds derived from one polynomial. Signs follow the
/// number line: `upper_negative`/`lower_negative` are negative values, and
/// every real root x of P satisfies
/// lower_negative <= x <= upper_negative or lower_positive <= x <= upper_positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundSet {
    pub upper_positive: Option<f64>,
    pub lower_positive: Option<f64>,
    pub upper_negative: Option<f64>,
    pub lower_negative: Option<f64>,
}

/// Bound estimator with overridable search caps.
#[derive(Debug, Clone, Copy)]
pub struct RootBounds {
    pub kind: BoundKind,
    pub laguerre_cap: usize,
    pub newton_cap: usize,
}

impl RootBounds {
    pub fn new(kind: BoundKind) -> RootBounds {
        RootBounds {
            kind,
            laguerre_cap: LAGUERRE_SEARCH_CAP,
            newton_cap: NEWTON_SEARCH_CAP,
        }
    }

    /// Upper bound on the positive roots of a sign-normalized polynomial, or
    /// `None` when the primitive's search space is exhausted.
    fn primitive(&self, p: &Polynomial) -> Option<f64> {
        match self.kind {
            BoundKind::Lagrange => lagrange_bound(p),
            BoundKind::Laguerre => laguerre_bound(p, self.laguerre_cap),
            BoundKind::Newton => newton_bound(p, self.newton_cap),
        }
    }

    /// Four-way composition of the primitive over the transformed variants.
    pub fn estimate(&self, p: &Polynomial) -> BoundSet {
        let upper_positive = self.primitive(&p.normalize_sign());
        let lower_positive = p
            .reversed()
            .and_then(|reversed| self.primitive(&reversed.normalize_sign()))
            .and_then(invert);
        let upper_negative = p
            .reversed()
            .and_then(|reversed| self.primitive(&reversed.alternate_signs().normalize_sign()))
            .and_then(invert)
            .map(|bound| -bound);
        let lower_negative = self
            .primitive(&p.alternate_signs().normalize_sign())
            .map(|bound| -bound);
        debug!(
            "bounds({}): positive [{:?}, {:?}], negative [{:?}, {:?}]",
            self.kind, lower_positive, upper_positive, lower_negative, upper_negative
        );
        BoundSet {
            upper_positive,
            lower_positive,
            upper_negative,
            lower_negative,
        }
    }
}

/// Computes the four root bounds of `p` with the default search caps.
pub fn bounds(kind: BoundKind, p: &Polynomial) -> BoundSet {
    RootBounds::new(kind).estimate(p)
}

// a zero intermediate propagates None, never a numeric error
fn invert(bound: f64) -> Option<f64> {
    if bound == 0.0 { None } else { Some(1.0 / bound) }
}

/// Lagrange: 1 + (A/a0)^(1/k) with A the largest-magnitude negative
/// coefficient and k the smallest index (> 0) carrying a negative
/// coefficient; 1 when no coefficient is negative.
fn lagrange_bound(p: &Polynomial) -> Option<f64> {
    let coeffs = p.coeffs();
    let mut largest_negative = 0.0_f64;
    let mut first_negative_index: Option<usize> = None;
    for (i, c) in coeffs.iter().enumerate().skip(1) {
        if *c < 0.0 {
            largest_negative = largest_negative.max(c.abs());
            if first_negative_index.is_none() {
                first_negative_index = Some(i);
            }
        }
    }
    match first_negative_index {
        None => Some(1.0),
        Some(k) => Some(1.0 + (largest_negative / coeffs[0]).powf(1.0 / k as f64)),
    }
}

/// Laguerre: smallest integer L whose synthetic division by (x - L) leaves
/// every quotient coefficient and the remainder strictly positive.
fn laguerre_bound(p: &Polynomial, cap: usize) -> Option<f64> {
    for l in 1..=cap {
        let division = divide_linear(p, 1.0, -(l as f64)).ok()?;
        let all_positive = division.quotient.iter().all(|q| *q > 0.0) && division.remainder > 0.0;
        if all_positive {
            return Some(l as f64);
        }
    }
    None
}

/// Newton: smallest integer alpha at which the polynomial and every one of
/// its derivatives evaluate strictly positive (Horner evaluation).
fn newton_bound(p: &Polynomial, cap: usize) -> Option<f64> {
    let mut derivatives = vec![p.clone()];
    while derivatives.last().unwrap().degree() > 0 {
        derivatives.push(derivatives.last().unwrap().derivative());
    }
    for alpha in 1..=cap {
        let x = alpha as f64;
        if derivatives.iter().all(|d| d.eval(x) > 0.0) {
            return Some(x);
        }
    }
    None
}
