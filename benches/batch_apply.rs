// benches/batch_apply.rs
//! Benchmark applying a 2x2 matrix to vectors: scalar vs SIMD-4x.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spectral_engine::matrix::Mat2;
use spectral_engine::vector::Vec2;

const BATCH_SIZE: usize = 1_000;

fn bench_apply_scalar(c: &mut Criterion) {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    let vs = [
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-2.5, 3.5),
        Vec2::new(7.0, -1.0),
    ];

    c.bench_function("apply 4 vectors scalar × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = vs;
            for _ in 0..BATCH_SIZE {
                for v in &mut out {
                    *v = black_box(&a).apply(black_box(*v));
                }
            }
            black_box(out)
        })
    });
}

fn bench_apply_simd(c: &mut Criterion) {
    let a = Mat2::new(4.0, 1.0, 2.0, 3.0);
    let vs = [
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-2.5, 3.5),
        Vec2::new(7.0, -1.0),
    ];

    c.bench_function("apply 4 vectors SIMD × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = vs;
            for _ in 0..BATCH_SIZE {
                out = black_box(&a).apply_simd(black_box(out));
            }
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_apply_scalar, bench_apply_simd);
criterion_main!(benches);
