use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use linalg_kit::{AugmentedMatrix, Matrix, Number, SquareMatrix};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant inputs so reduction never meets a zero pivot
// ---------------------------------------------------------------------------

fn dominant(n: usize, cols: usize) -> Matrix {
    Matrix::from_fn(n, cols, |i, j| {
        let base = ((i + 1) * (j + 2) % 7) as i64;
        Number::Int(if i == j { base + 10 * n as i64 } else { base })
    })
}

// ---------------------------------------------------------------------------
// Determinant by cofactor expansion
// ---------------------------------------------------------------------------

fn determinant(c: &mut Criterion) {
    let mut g = c.benchmark_group("determinant");
    for n in [3, 5, 7] {
        let a = SquareMatrix::new(dominant(n, n)).expect("square");
        g.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| black_box(a).determinant())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Row reduction
// ---------------------------------------------------------------------------

fn reduction(c: &mut Criterion) {
    let mut g = c.benchmark_group("reduction");
    for n in [4, 16, 64] {
        let a = AugmentedMatrix::new(dominant(n, n + 1)).expect("n x (n + 1)");
        g.bench_with_input(BenchmarkId::new("ref", n), &a, |b, a| {
            b.iter(|| black_box(a).row_echelon())
        });
        g.bench_with_input(BenchmarkId::new("rref", n), &a, |b, a| {
            b.iter(|| black_box(a).reduced_row_echelon())
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");
    for n in [4, 32] {
        let a = dominant(n, n);
        let m = a.transpose();
        g.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(&a) * black_box(&m))
        });
    }
    g.finish();
}

criterion_group!(benches, determinant, reduction, matmul);
criterion_main!(benches);
