//! Common types of the iterative solver family: the iteration trace record,
//! the convergence result, the structured solver errors, the method selector
//! and the string-keyed dispatcher.

use crate::numerical::bisection::Bisection;
use crate::numerical::fixed_point::FixedPoint;
use crate::numerical::halley::Halley;
use crate::numerical::newton::Newton;
use crate::numerical::regula_falsi::{RegulaFalsi, RegulaFalsiModified};
use crate::numerical::secant::Secant;
use crate::symbolic::symbolic_engine::Expr;
use simplelog::*;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// derivative magnitude below which Newton aborts
pub const DERIVATIVE_CUTOFF: f64 = 1e-10;
/// denominator magnitude below which Halley aborts
pub const HALLEY_DENOMINATOR_CUTOFF: f64 = 1e-14;
/// function-value difference below which the secant update aborts
pub const SECANT_DENOMINATOR_CUTOFF: f64 = 1e-10;

/// One step of a solver. Append-only; bracketing methods fill `lower`/`upper`,
/// open methods leave them `None`. `error` is the quantity the convergence
/// test compares against the tolerance (`None` only for the fixed-point seed
/// row).
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub i: usize,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub x: f64,
    pub fx: f64,
    pub error: Option<f64>,
}

/// Outcome of one solver invocation. `converged = false` with a filled `root`
/// means the iteration cap ran out: the best estimate is still reported so
/// callers can inspect partial progress.
#[derive(Debug, Clone)]
pub struct ConvergenceResult {
    pub root: Option<f64>,
    pub iterations: Vec<IterationRecord>,
    pub converged: bool,
    pub message: String,
}

/// Numeric preconditions and degeneracies. All recoverable at the call
/// boundary; they abort the current solve only.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("invalid interval: a = {a} must be strictly less than b = {b}")]
    InvalidInterval { a: f64, b: f64 },
    #[error("no sign change on the interval: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { fa: f64, fb: f64 },
    #[error("derivative too close to zero at x = {x}: f'(x) = {dfx}")]
    DerivativeNearZero { x: f64, dfx: f64 },
    #[error("degenerate denominator {denominator}")]
    DegenerateDenominator { denominator: f64 },
    #[error("initial guess x0 = {x0} outside of [{a}, {b}]")]
    SeedOutsideInterval { x0: f64, a: f64, b: f64 },
}

/// Method selector; parses from and prints as snake_case strings
/// ("regula_falsi_modified" etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SolverKind {
    Bisection,
    RegulaFalsi,
    RegulaFalsiModified,
    Newton,
    Halley,
    Secant,
    FixedPoint,
}

/// Scalar parameters of a solve, shared by all methods; each method reads the
/// fields it needs (bracketing: `a`/`b`; open: `x0` and, for secant, `x1`).
#[derive(Debug, Clone)]
pub struct SolverSettings {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub x0: Option<f64>,
    pub x1: Option<f64>,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            a: None,
            b: None,
            x0: None,
            x1: None,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

// wrapper around main_loop to implement logging, the same per-call terminal
// logger setup for every solver
pub(crate) fn init_logging(loglevel: &Option<String>) {
    let is_logging_disabled = loglevel
        .as_ref()
        .map(|level| level == "off" || level == "none")
        .unwrap_or(false);
    if is_logging_disabled {
        return;
    }
    let log_option = if let Some(level) = loglevel {
        match level.as_str() {
            "debug" => LevelFilter::Info,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => panic!("loglevel must be debug, info, warn or error"),
        }
    } else {
        LevelFilter::Info
    };
    // a second init in the same process is fine, the first logger stays
    let _ = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// Dispatches a method by `SolverKind` over a shared settings struct.
///
/// `g` is consumed by `FixedPoint` only (the iteration function); all other
/// methods derive what they need from `f` symbolically.
pub fn solve(
    kind: SolverKind,
    f: &Expr,
    g: Option<&Expr>,
    settings: &SolverSettings,
) -> Result<ConvergenceResult, SolverError> {
    let tolerance = settings.tolerance;
    let max_iterations = settings.max_iterations;
    match kind {
        SolverKind::Bisection => {
            let (a, b) = bracket_params(settings, kind);
            Bisection::from_expression(f, a, b, tolerance, max_iterations).main_loop()
        }
        SolverKind::RegulaFalsi => {
            let (a, b) = bracket_params(settings, kind);
            RegulaFalsi::from_expression(f, a, b, tolerance, max_iterations).main_loop()
        }
        SolverKind::RegulaFalsiModified => {
            let (a, b) = bracket_params(settings, kind);
            RegulaFalsiModified::from_expression(f, a, b, tolerance, max_iterations).main_loop()
        }
        SolverKind::Newton => {
            let x0 = seed_param(settings.x0, kind);
            Newton::from_expression(f, x0, tolerance, max_iterations).main_loop()
        }
        SolverKind::Halley => {
            let x0 = seed_param(settings.x0, kind);
            Halley::from_expression(f, x0, tolerance, max_iterations).main_loop()
        }
        SolverKind::Secant => {
            let x0 = seed_param(settings.x0, kind);
            let x1 = seed_param(settings.x1, kind);
            Secant::from_expression(f, x0, x1, tolerance, max_iterations).main_loop()
        }
        SolverKind::FixedPoint => {
            let g = g.unwrap_or_else(|| panic!("{} needs an iteration function g", kind));
            let (a, b) = bracket_params(settings, kind);
            let x0 = seed_param(settings.x0, kind);
            FixedPoint::from_expressions(f, g, x0, a, b, tolerance, max_iterations).main_loop()
        }
    }
}

fn bracket_params(settings: &SolverSettings, kind: SolverKind) -> (f64, f64) {
    let a = settings
        .a
        .unwrap_or_else(|| panic!("{} needs the interval end a", kind));
    let b = settings
        .b
        .unwrap_or_else(|| panic!("{} needs the interval end b", kind));
    (a, b)
}

fn seed_param(seed: Option<f64>, kind: SolverKind) -> f64 {
    seed.unwrap_or_else(|| panic!("{} needs an initial guess", kind))
}
