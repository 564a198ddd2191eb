//! Benchmarks for the PSO-TSP algorithm.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pso_tsp::config::Config;
use pso_tsp::problem::{City, Problem};
use pso_tsp::PsoAlgorithm;

/// Create a benchmark problem of specified size.
fn create_benchmark_problem(size: usize) -> Problem {
    // Cities in a grid arrangement
    let grid_size = (size as f64).sqrt().ceil() as usize;
    let cities = (0..size)
        .map(|i| {
            let row = i / grid_size;
            let col = i % grid_size;
            City::new(col as f64 * 10.0, row as f64 * 10.0)
        })
        .collect();

    Problem::new(format!("BenchProblem_{}", size), cities)
}

#[cfg(feature = "bench")]
fn benchmark_initialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialization");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new().with_particle_count(100).with_seed(1);

            b.iter(|| {
                let mut algorithm = PsoAlgorithm::new(problem.clone(), config.clone()).unwrap();
                algorithm.initialize();
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("epoch");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new()
                .with_particle_count(100)
                .with_max_epochs(usize::MAX)
                .with_seed(1);

            let mut algorithm = PsoAlgorithm::new(problem, config).unwrap();
            algorithm.initialize();

            b.iter(|| {
                algorithm.step().unwrap();
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for size in [50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new().with_max_epochs(100).with_seed(1);

            b.iter(|| {
                let mut algorithm = PsoAlgorithm::new(problem.clone(), config.clone()).unwrap();
                algorithm.run().unwrap().fitness
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_initialization,
    benchmark_epoch,
    benchmark_full_run
);

#[cfg(feature = "bench")]
criterion_main!(benches);
