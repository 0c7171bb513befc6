#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let input = "x^2 - 4";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, f(3) = {}  \n", input, parsed_function(3.0));
/// ```
pub mod parse_expr;
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let f = x.clone().pow(Expr::Const(2.0)) - Expr::Const(4.0);
/// let df = f.diff("x");
/// println!("f = {}, f' = {}", f, df);
/// ```
pub mod symbolic_engine;
/// differentiation, evaluation and lambdification of symbolic expressions
///# Example#
/// ```
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^3 - 2*x").unwrap();
/// let df = f.diff("x");
/// assert_eq!(df.eval_expression("x", 2.0), 10.0);
/// ```
pub mod symbolic_derivatives;
/// classification of symbolic expressions as polynomials: walks the expression
/// tree over a closed node set and extracts a coefficient vector (highest degree
/// first) or rejects the expression
pub mod symbolic_polynomial;
/// the collection of utility functions for bracket parsing and finite differences
pub mod utils;
