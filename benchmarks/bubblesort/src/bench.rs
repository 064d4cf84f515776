//! Exchange sort benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100 to 2K elements) under both pass policies
//! - Input shape (sorted, reversed, nearly sorted, many duplicates)

use bubblesort::prelude::*;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniformly random values.
fn generate_random(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000_000..=1_000_000)).collect()
}

/// Sorted values with ~1% of adjacent pairs swapped.
fn generate_nearly_sorted(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..size as i64).collect();
    for _ in 0..size / 100 {
        let i = rng.random_range(0..size - 1);
        data.swap(i, i + 1);
    }
    data
}

/// Values drawn from a tiny range.
fn generate_duplicates(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..8)).collect()
}

fn sorters() -> [(&'static str, Sorter); 2] {
    [
        (
            "early_exit",
            BubbleSort::new().termination(EarlyExit).build().unwrap(),
        ),
        (
            "fixed_passes",
            BubbleSort::new().termination(FixedPasses).build().unwrap(),
        ),
    ]
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [100, 500, 2_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random(size, 42);

        for (name, sorter) in sorters() {
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |mut v| sorter.sort(black_box(&mut v)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_input_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_shape");
    group.sample_size(20);

    let size = 1_000;
    let sorted: Vec<i64> = (0..size as i64).collect();
    let reversed: Vec<i64> = sorted.iter().rev().copied().collect();
    let shapes = [
        ("sorted", sorted),
        ("reversed", reversed),
        ("nearly_sorted", generate_nearly_sorted(size, 7)),
        ("duplicates", generate_duplicates(size, 11)),
    ];

    for (shape, data) in &shapes {
        for (name, sorter) in sorters() {
            group.bench_with_input(BenchmarkId::new(name, shape), data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |mut v| sorter.sort(black_box(&mut v)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_scalability, bench_input_shape);

criterion_main!(benches);
