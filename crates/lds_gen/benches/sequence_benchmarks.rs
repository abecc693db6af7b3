//! Criterion benchmarks for lds_gen generators.
//!
//! Compares per-point cost of box, cylinder and sphere chains as the level
//! grows. Sphere tables are built once outside the timed loop.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lds_gen::{CylinN, HaltonN, LowDiscrepancySequence, MeasureTableCache, SphereN, VdCorput};

const BASES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Benchmark the scalar sequence.
fn bench_scalar(c: &mut Criterion) {
    let mut vgen = VdCorput::new(3).unwrap();
    c.bench_function("vdcorput_pop", |b| b.iter(|| black_box(vgen.pop())));
}

/// Benchmark one pop per family across levels.
fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");
    let cache = MeasureTableCache::shared();

    for k in [2usize, 4, 8] {
        let mut hgen = HaltonN::new(k, &BASES).unwrap();
        group.bench_with_input(BenchmarkId::new("halton_n", k), &k, |b, _| {
            b.iter(|| black_box(hgen.pop()))
        });

        let mut cgen = CylinN::new(k, &BASES).unwrap();
        group.bench_with_input(BenchmarkId::new("cylin_n", k), &k, |b, _| {
            b.iter(|| black_box(cgen.pop()))
        });

        let mut sgen = SphereN::with_cache(k, &BASES, Arc::clone(&cache)).unwrap();
        group.bench_with_input(BenchmarkId::new("sphere_n", k), &k, |b, _| {
            b.iter(|| black_box(sgen.pop()))
        });
    }

    group.finish();
}

/// Benchmark construction against a warm shared cache.
fn bench_construction(c: &mut Criterion) {
    let cache = MeasureTableCache::shared();
    SphereN::with_cache(8, &BASES, Arc::clone(&cache)).unwrap();

    c.bench_function("sphere_n_8_construct_warm", |b| {
        b.iter(|| SphereN::with_cache(black_box(8), &BASES, Arc::clone(&cache)).unwrap())
    });
}

criterion_group!(benches, bench_scalar, bench_generators, bench_construction);
criterion_main!(benches);
