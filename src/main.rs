#![allow(non_snake_case)]
use RustedRoots::numerical::bisection::Bisection;
use RustedRoots::numerical::fixed_point::FixedPoint;
use RustedRoots::numerical::halley::Halley;
use RustedRoots::numerical::newton::Newton;
use RustedRoots::numerical::regula_falsi::{RegulaFalsi, RegulaFalsiModified};
use RustedRoots::numerical::secant::Secant;
use RustedRoots::polynomial::bairstow::Bairstow;
use RustedRoots::polynomial::bounds::{BoundKind, bounds};
use RustedRoots::polynomial::division::{divide_linear, divide_quadratic};
use RustedRoots::polynomial::poly::Polynomial;
use RustedRoots::symbolic::symbolic_engine::Expr;

fn main() {
    let example = 5;
    match example {
        0 => {
            // BRACKETING METHODS
            // parse the equation once, hand the compiled function to a solver
            let expr = Expr::parse_expression("x^3 - x - 2").unwrap();
            let mut solver = Bisection::from_expression(&expr, 1.0, 2.0, 1e-10, 100);
            let result = solver.solve().unwrap();
            println!("bisection root = {:?} \n", result.root.unwrap());

            let mut solver = RegulaFalsi::from_expression(&expr, 1.0, 2.0, 1e-10, 200);
            let result = solver.solve().unwrap();
            println!("regula falsi root = {:?} \n", result.root.unwrap());

            let mut solver = RegulaFalsiModified::from_expression(&expr, 1.0, 2.0, 1e-10, 200);
            let result = solver.solve().unwrap();
            println!(
                "modified regula falsi root = {:?} in {} iterations \n",
                result.root.unwrap(),
                result.iterations.len()
            );
        }
        1 => {
            // OPEN METHODS: derivative expressions are produced symbolically
            let expr = Expr::parse_expression("x^2 - 4").unwrap();
            let mut solver = Newton::from_expression(&expr, 3.0, 1e-6, 50);
            println!("Fourier condition: {:?}", solver.fourier_condition());
            let result = solver.solve().unwrap();
            println!("newton root = {:?} \n", result.root.unwrap());

            let mut solver = Halley::from_expression(&expr, 3.0, 1e-10, 50);
            let result = solver.solve().unwrap();
            println!("halley root = {:?} \n", result.root.unwrap());

            let mut solver = Secant::from_expression(&expr, 1.0, 3.0, 1e-10, 50);
            let result = solver.solve().unwrap();
            println!("secant root = {:?} \n", result.root.unwrap());
        }
        2 => {
            // FIXED POINT with an advisory contraction check
            let f = Expr::parse_expression("x^2 - x - 1").unwrap();
            let g = Expr::parse_expression("1 + 1/x").unwrap();
            let mut solver = FixedPoint::from_expressions(&f, &g, 1.5, 1.0, 2.0, 1e-12, 100);
            if let Some(worst) = solver.divergence_warning() {
                println!("warning: |g'| reaches {} on the interval", worst);
            }
            let result = solver.solve().unwrap();
            println!("fixed point = {:?} \n", result.root.unwrap());
        }
        3 => {
            // SYNTHETIC DIVISION with the full tableau
            let p = Polynomial::new(vec![1.0, -11.0, 78.0, -14.0, -444.0]).unwrap();
            let division = divide_linear(&p, 1.0, -3.0).unwrap();
            println!("quotient = {:?}", division.quotient);
            println!("remainder = {}", division.remainder);
            for step in &division.steps {
                println!(
                    "  column {}: {} + {} = {}",
                    step.index, step.coefficient, step.carry, step.value
                );
            }
            let division = divide_quadratic(&p, 2.0, -3.0);
            println!("quadratic quotient = {:?}", division.quotient);
            println!(
                "quadratic remainder = {} + {}*x \n",
                division.remainder[0], division.remainder[1]
            );
        }
        4 => {
            // BAIRSTOW DEFLATION from a formula string
            let expr = Expr::parse_expression("x^4 - 11x^3 + 78x^2 - 14x - 444").unwrap();
            let mut solver = Bairstow::from_expression(&expr, "x", 1.0, -2.0, 1e-6).unwrap();
            let result = solver.solve();
            println!("converged: {} ({})", result.converged, result.message);
            for root in &result.roots {
                println!("  root: {}", root);
            }
        }
        5 => {
            // ROOT BOUNDS, all three families side by side
            let p = Polynomial::new(vec![1.0, -2.0, -5.0, 6.0]).unwrap();
            println!("P = {}", p);
            for kind in [BoundKind::Lagrange, BoundKind::Laguerre, BoundKind::Newton] {
                let set = bounds(kind, &p);
                println!(
                    "{:>9}: positive [{:?}, {:?}], negative [{:?}, {:?}]",
                    kind.to_string(),
                    set.lower_positive,
                    set.upper_positive,
                    set.lower_negative,
                    set.upper_negative
                );
            }
        }
        _ => {
            println!("no such example");
        }
    }
}
