//! Criterion benchmarks for the Lévy-ACO solver.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hormiga_tsp::{Budget, LevyAcoSolver, TspInstance, TspSolver};

/// Create a deterministic pseudo-random instance with n cities
fn random_instance(n: usize, seed: u64) -> TspInstance {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut coords = Vec::with_capacity(n);
    for i in 0..n {
        let mut hasher = DefaultHasher::new();
        (seed, i, "x").hash(&mut hasher);
        let x = (hasher.finish() % 10000) as f64 / 100.0;

        let mut hasher = DefaultHasher::new();
        (seed, i, "y").hash(&mut hasher);
        let y = (hasher.finish() % 10000) as f64 / 100.0;

        coords.push((x, y));
    }
    TspInstance::from_coords(&format!("random_{n}"), coords).expect("should create")
}

fn bench_levy_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("LevyACO");

    for size in [10, 20, 50].iter() {
        let instance = random_instance(*size, 42);

        group.bench_with_input(BenchmarkId::new("cities", size), size, |b, _| {
            b.iter(|| {
                let mut solver = LevyAcoSolver::new().with_seed(42).with_ants(10);
                solver
                    .solve(black_box(&instance), Budget::Iterations(50))
                    .expect("should solve")
            });
        });
    }

    group.finish();
}

fn bench_pure_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("PureACO");

    for size in [10, 20, 50].iter() {
        let instance = random_instance(*size, 42);

        group.bench_with_input(BenchmarkId::new("cities", size), size, |b, _| {
            b.iter(|| {
                let mut solver = LevyAcoSolver::new()
                    .with_seed(42)
                    .with_ants(10)
                    .with_levy_threshold(0.0);
                solver
                    .solve(black_box(&instance), Budget::Iterations(50))
                    .expect("should solve")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levy_aco, bench_pure_aco);
criterion_main!(benches);
