//! calckit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the list statistics (100 to 50K values)
//! - Native versus text input for the same data
//! - The sign-based transform under each zero policy
//! - Iterative versus recursive factorial

use calckit::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 50_000];

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed integers, roughly 10% of them zero.
fn generate_int_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            if rng.random_bool(0.1) {
                0
            } else {
                rng.random_range(-1_000..=1_000)
            }
        })
        .collect()
}

/// Generate uniformly distributed floats.
fn generate_float_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1e3..1e3)).collect()
}

/// Render values as text, the way they would arrive from user input.
fn as_text(values: &[i64]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("average");
    group.sample_size(50);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let ints = generate_int_data(size, 42);
        let floats = generate_float_data(size, 42);

        group.bench_with_input(BenchmarkId::new("int", size), &size, |b, _| {
            b.iter(|| average(black_box(&ints)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("float", size), &size, |b, _| {
            b.iter(|| average(black_box(&floats)).unwrap())
        });
    }
    group.finish();
}

fn bench_maximum(c: &mut Criterion) {
    let mut group = c.benchmark_group("maximum");
    group.sample_size(50);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let ints = generate_int_data(size, 7);

        group.bench_with_input(BenchmarkId::new("int", size), &size, |b, _| {
            b.iter(|| maximum(black_box(&ints)).unwrap())
        });
    }
    group.finish();
}

fn bench_text_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_input");
    group.sample_size(50);

    for size in [1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let ints = generate_int_data(size, 3);
        let text = as_text(&ints);

        group.bench_with_input(BenchmarkId::new("native", size), &size, |b, _| {
            b.iter(|| average(black_box(&ints)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("text", size), &size, |b, _| {
            b.iter(|| average(black_box(&text)).unwrap())
        });
    }
    group.finish();
}

fn bench_batch_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_average");
    group.sample_size(50);

    for lists in [10, 100] {
        let batch: Vec<Vec<i64>> = (0..lists)
            .map(|i| generate_int_data(1_000, i as u64))
            .collect();
        group.throughput(Throughput::Elements((lists * 1_000) as u64));

        group.bench_with_input(BenchmarkId::new("lists", lists), &lists, |b, _| {
            b.iter(|| batch_average(black_box(&batch)).unwrap())
        });
    }
    group.finish();
}

fn bench_process_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_data");
    group.sample_size(50);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let data = generate_int_data(size, 11);

        for policy in [ZeroPolicy::Include, ZeroPolicy::Drop, ZeroPolicy::Double] {
            group.bench_with_input(BenchmarkId::new(policy.name(), size), &size, |b, _| {
                b.iter(|| process_data(black_box(&data), policy).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");
    group.sample_size(100);

    for n in [10, 100, 500, 1_000] {
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| factorial_with_mode(black_box(n), Iterative).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
            b.iter(|| factorial_with_mode(black_box(n), Recursive).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_average,
    bench_maximum,
    bench_text_input,
    bench_batch_average,
    bench_process_data,
    bench_factorial,
);

criterion_main!(benches);
