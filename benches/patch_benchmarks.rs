//! Criterion benchmarks for patch grid operations.
//!
//! Run with: cargo bench
//! Run specific: cargo bench -- bench_split

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use rand::prelude::*;

use patchgrid::{merge, split, split_with_step};

fn random_matrix_f32(rows: usize, cols: usize, seed: u64) -> Array2<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.gen())
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [256, 512, 1024, 2048] {
        let image = random_matrix_f32(size, size, 42);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("adaptive", size), &size, |b, _| {
            b.iter(|| split(black_box(image.view()), 64, None).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("minimal", size), &size, |b, _| {
            b.iter(|| split_with_step(black_box(image.view()), 64, None).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("fixed_step", size), &size, |b, _| {
            b.iter(|| split_with_step(black_box(image.view()), 64, Some(32)).unwrap())
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [256, 512, 1024, 2048] {
        let image = random_matrix_f32(size, size, 1234);
        let (patches, step) = split_with_step(image.view(), 64, None).unwrap();
        let patches = patches.into_dyn();

        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("no_resize", size), &size, |b, _| {
            b.iter(|| merge(black_box(patches.view()), (size, size), step, false).unwrap())
        });
    }

    // Resize path: a fixed step that excludes pixels, forcing the bilinear
    // resample back to the original extent.
    let image = random_matrix_f32(1000, 1000, 77);
    let (patches, step) = split_with_step(image.view(), 64, Some(64)).unwrap();
    let patches = patches.into_dyn();
    group.bench_function("with_resize_1000", |b| {
        b.iter(|| merge(black_box(patches.view()), (1000, 1000), step, true).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_split, bench_merge);
criterion_main!(benches);
