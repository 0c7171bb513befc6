use RustedRoots::numerical::bisection::Bisection;
use RustedRoots::numerical::newton::Newton;
use RustedRoots::polynomial::bairstow::Bairstow;
use RustedRoots::symbolic::symbolic_engine::Expr;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_bisection(c: &mut Criterion) {
    let expr = Expr::parse_expression("x^3 - x - 2").unwrap();
    c.bench_function("bisection x^3-x-2", |b| {
        b.iter(|| {
            let mut solver = Bisection::from_expression(&expr, 1.0, 2.0, 1e-10, 100);
            solver.set_loglevel(Some("off".to_string()));
            solver.main_loop().unwrap()
        })
    });
}

fn bench_newton(c: &mut Criterion) {
    let expr = Expr::parse_expression("x^3 - x - 2").unwrap();
    c.bench_function("newton x^3-x-2", |b| {
        b.iter(|| {
            let mut solver = Newton::from_expression(&expr, 2.0, 1e-10, 100);
            solver.set_loglevel(Some("off".to_string()));
            solver.main_loop().unwrap()
        })
    });
}

fn bench_bairstow(c: &mut Criterion) {
    let coeffs = vec![1.0, -11.0, 78.0, -14.0, -444.0];
    c.bench_function("bairstow quartic", |b| {
        b.iter(|| {
            let mut solver = Bairstow::from_coeffs(coeffs.clone(), 1.0, -2.0, 1e-8).unwrap();
            solver.main_loop()
        })
    });
}

criterion_group!(benches, bench_bisection, bench_newton, bench_bairstow);
criterion_main!(benches);
