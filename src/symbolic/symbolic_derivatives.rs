//! # Symbolic Derivatives Module
//!
//! Extends the symbolic engine with analytical differentiation, direct
//! evaluation and conversion of expressions into executable Rust closures
//! (lambdification). The iterative solvers consume expressions exclusively
//! through `lambdify1D`; Newton and Halley obtain their derivative
//! expressions through `diff`.
//!
//! ## Key Methods
//! - `diff(var)` - analytical derivative with respect to `var`
//! - `lambdify1D()` - single-variable closure `Box<dyn Fn(f64) -> f64>`
//! - `eval_expression(var, x)` - direct evaluation without closure creation

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a
    /// variable.
    ///
    /// Implements the standard differentiation rules:
    /// - Power rule: d/dx(x^n) = n*x^(n-1)
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
    /// - Chain rule: d/dx(f(g(x))) = f'(g(x))*g'(x)
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if exp.contains_variable(var) {
                    // general case: d/dx f^g = f^g * (g'*ln(f) + g*f'/f)
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                } else {
                    // power rule with constant exponent
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                }
            }
            Expr::Exp(expr) => Expr::Mul(
                Box::new(Expr::Exp(expr.clone())),
                Box::new(expr.diff(var)),
            ),
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => Expr::Mul(
                Box::new(Expr::cos(expr.clone())),
                Box::new(expr.diff(var)),
            ),
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::cos(expr.clone())),
                    Box::new(Expr::Const(2.0)),
                )),
            ),
            Expr::ctg(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Pow(
                    Box::new(Expr::sin(expr.clone())),
                    Box::new(Expr::Const(2.0)),
                )),
            ),
        }
    }

    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a single-variable symbolic expression into an executable Rust
    /// closure.
    ///
    /// The resulting closure can be called repeatedly with different input
    /// values; the recursive structure mirrors the expression tree, no runtime
    /// parsing or interpretation.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.pow(Expr::Const(2.0)); // x^2
    /// let func = f.lambdify1D();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).tan())
            }
            Expr::ctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| 1.0 / expr_fn(x).tan())
            }
        }
    }

    /// EVALUATION

    /// Evaluates the expression directly for a given variable value, without
    /// creating a closure.
    pub fn eval_expression(&self, var: &str, x: f64) -> f64 {
        match self {
            Expr::Var(name) => {
                if name == var {
                    x
                } else {
                    f64::NAN
                }
            }
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => lhs.eval_expression(var, x) + rhs.eval_expression(var, x),
            Expr::Sub(lhs, rhs) => lhs.eval_expression(var, x) - rhs.eval_expression(var, x),
            Expr::Mul(lhs, rhs) => lhs.eval_expression(var, x) * rhs.eval_expression(var, x),
            Expr::Div(lhs, rhs) => lhs.eval_expression(var, x) / rhs.eval_expression(var, x),
            Expr::Pow(base, exp) => base
                .eval_expression(var, x)
                .powf(exp.eval_expression(var, x)),
            Expr::Exp(expr) => expr.eval_expression(var, x).exp(),
            Expr::Ln(expr) => expr.eval_expression(var, x).ln(),
            Expr::sin(expr) => expr.eval_expression(var, x).sin(),
            Expr::cos(expr) => expr.eval_expression(var, x).cos(),
            Expr::tg(expr) => expr.eval_expression(var, x).tan(),
            Expr::ctg(expr) => 1.0 / expr.eval_expression(var, x).tan(),
        }
    }
}
