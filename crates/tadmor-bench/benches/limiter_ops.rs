//! Criterion micro-benchmarks for slope limiters.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tadmor_core::Limiter;
use tadmor_physics::{Centered, MinMod};

const N: usize = 100_000;

/// Deterministic sawtooth with mixed monotone and extremal stencils.
fn samples() -> Vec<f32> {
    (0..N)
        .map(|i| {
            let i = i as u64;
            (i.wrapping_mul(6364136223846793007) % 1000) as f32 / 1000.0
        })
        .collect()
}

fn sweep<L: Limiter>(limiter: &L, u: &[f32], out: &mut [f32]) {
    for i in 1..u.len() - 1 {
        out[i] = limiter.limdiff(u[i - 1], u[i], u[i + 1]);
    }
}

/// Benchmark: MC limiter (θ = 2) over 100K stencils.
fn bench_minmod_100k(c: &mut Criterion) {
    let u = samples();
    let mut out = vec![0.0f32; N];
    let limiter = MinMod::default();

    c.bench_function("minmod_100k", |b| {
        b.iter(|| {
            sweep(&limiter, black_box(&u), &mut out);
            black_box(&out);
        });
    });
}

/// Benchmark: unlimited centered differences over 100K stencils, the
/// floor for any limiter.
fn bench_centered_100k(c: &mut Criterion) {
    let u = samples();
    let mut out = vec![0.0f32; N];

    c.bench_function("centered_100k", |b| {
        b.iter(|| {
            sweep(&Centered, black_box(&u), &mut out);
            black_box(&out);
        });
    });
}

criterion_group!(benches, bench_minmod_100k, bench_centered_100k);
criterion_main!(benches);
