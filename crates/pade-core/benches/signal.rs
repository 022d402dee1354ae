//! Benchmarks for the signal utilities

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pade_core::signal::{damp, denoise, ft, fwhm};

fn create_signal(n: usize, dt: f64) -> Vec<f64> {
    (0..n)
        .map(|k| {
            let t = k as f64 * dt;
            (-0.2 * t).exp() * (2.3 * t).sin()
        })
        .collect()
}

fn bench_ft(c: &mut Criterion) {
    let mut group = c.benchmark_group("ft");

    for n in [1024, 4096, 16384].iter() {
        let data = create_signal(*n, 0.1);
        let id = BenchmarkId::from_parameter(n);

        group.bench_with_input(id, n, |b, _| {
            b.iter(|| black_box(ft(&data, 0.1, false, None)))
        });
    }

    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let data = create_signal(4096, 0.1);

    c.bench_function("denoise_4096", |b| {
        b.iter(|| black_box(denoise(&data, 1e-3, 0.1)))
    });
    c.bench_function("damp_4096", |b| b.iter(|| black_box(damp(&data, 0.1, 5.0))));
}

fn bench_fwhm(c: &mut Criterion) {
    let data = create_signal(4096, 0.1);
    let (_, spectrum) = ft(&data, 0.1, false, Some(16384)).unwrap();
    let magnitudes: Vec<f64> = spectrum.iter().map(|v| v.norm()).collect();

    c.bench_function("fwhm_8191", |b| b.iter(|| black_box(fwhm(&magnitudes, 0.1))));
}

criterion_group!(benches, bench_ft, bench_preprocess, bench_fwhm);
criterion_main!(benches);
