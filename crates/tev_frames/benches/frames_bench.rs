use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tev_frames::{equ2gal, gal2equ, gal2equ_batch, separation_deg};

fn scalar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    group.bench_function("gal2equ", |b| {
        b.iter(|| gal2equ(black_box(184.557), black_box(-5.784)))
    });
    group.bench_function("equ2gal", |b| {
        b.iter(|| equ2gal(black_box(83.633), black_box(22.0145)))
    });
    group.bench_function("separation", |b| {
        b.iter(|| {
            separation_deg(
                black_box(83.633),
                black_box(22.0145),
                black_box(266.405),
                black_box(-28.936),
            )
        })
    });
    group.finish();
}

fn batch_bench(c: &mut Criterion) {
    let n = 10_000;
    let l: Vec<f64> = (0..n).map(|i| i as f64 * 360.0 / n as f64).collect();
    let b: Vec<f64> = (0..n).map(|i| i as f64 * 180.0 / n as f64 - 90.0).collect();

    let mut group = c.benchmark_group("batch");
    group.bench_function("gal2equ_10k", |bch| {
        bch.iter(|| gal2equ_batch(black_box(&l), black_box(&b)))
    });
    group.finish();
}

criterion_group!(benches, scalar_bench, batch_bench);
criterion_main!(benches);
