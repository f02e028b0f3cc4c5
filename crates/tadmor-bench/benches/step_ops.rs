//! Criterion benchmarks for whole solver runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tadmor_bench::{noisy_profile, reference_profile};

/// Benchmark: one frame (t = 0.01) of the 200x200 dam break.
fn bench_dam_break_frame_200(c: &mut Criterion) {
    let mut sim = reference_profile().unwrap();

    c.bench_function("dam_break_frame_200", |b| {
        b.iter(|| {
            let stats = sim.run(black_box(0.01)).unwrap();
            black_box(stats);
        });
    });
}

/// Benchmark: one frame on a 64x64 noisy pond, where every limiter call
/// takes a non-trivial branch.
fn bench_noisy_frame_64(c: &mut Criterion) {
    let mut sim = noisy_profile(64, 42).unwrap();

    c.bench_function("noisy_frame_64", |b| {
        b.iter(|| {
            let stats = sim.run(black_box(0.01)).unwrap();
            black_box(stats);
        });
    });
}

/// Benchmark: the conservation probe over 40K cells.
fn bench_diagnostics_200(c: &mut Criterion) {
    let sim = reference_profile().unwrap();

    c.bench_function("diagnostics_200", |b| {
        b.iter(|| black_box(sim.diagnostics().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_dam_break_frame_200,
    bench_noisy_frame_64,
    bench_diagnostics_200
);
criterion_main!(benches);
