//! Benchmarks comparing the two rate-solving strategies.
//!
//! Run with: cargo bench -p accrue-annuity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use accrue_annuity::solver::RateSolver;
use accrue_annuity::value::future_value;

/// (name, target, initial, monthly, periods)
const SCENARIOS: [(&str, f64, f64, f64, u32); 3] = [
    ("starter_1y", 1_000.0, 0.0, 10.0, 12),
    ("retirement_20y", 5_000_000.0, 0.0, 2_000.0, 240),
    ("house_10y", 150_000.0, 20_000.0, 800.0, 120),
];

fn bench_rate_solvers(c: &mut Criterion) {
    let solver = RateSolver::new();
    let mut group = c.benchmark_group("rate_solvers");

    for (name, target, initial, monthly, periods) in SCENARIOS {
        group.bench_with_input(
            BenchmarkId::new("bracketing", name),
            &(target, initial, monthly, periods),
            |b, &(target, initial, monthly, periods)| {
                b.iter(|| {
                    solver.solve_bracketing(
                        black_box(target),
                        black_box(initial),
                        black_box(monthly),
                        black_box(periods),
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("local", name),
            &(target, initial, monthly, periods),
            |b, &(target, initial, monthly, periods)| {
                b.iter(|| {
                    solver.solve_local(
                        black_box(target),
                        black_box(initial),
                        black_box(monthly),
                        black_box(periods),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_value_function(c: &mut Criterion) {
    c.bench_function("future_value_240", |b| {
        b.iter(|| {
            future_value(
                black_box(0.0125),
                black_box(10_000.0),
                black_box(500.0),
                black_box(240),
            )
        });
    });
}

criterion_group!(benches, bench_rate_solvers, bench_value_function);
criterion_main!(benches);
