use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use loshu_core::{SquareMatrix, sum_product};

fn bench_sum_product(c: &mut Criterion) {
    let x: Vec<f64> = (0..1024).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..1024).map(|i| (2 * i) as f64).collect();

    c.bench_function("sum_product_1024", |b| {
        b.iter(|| sum_product(black_box(&x), black_box(&y)))
    });
}

fn bench_magic_constant(c: &mut Criterion) {
    let m = SquareMatrix::from_vec(4, vec![16, 2, 3, 13, 5, 11, 10, 8, 9, 7, 6, 12, 4, 14, 15, 1])
        .unwrap();

    c.bench_function("magic_constant_4x4", |b| {
        b.iter(|| black_box(&m).magic_constant())
    });
}

criterion_group!(benches, bench_sum_product, bench_magic_constant);
criterion_main!(benches);
