//! Benchmarks for the normal-form engine and the algorithms built on it.
//!
//! Includes:
//! - Hermite and reduced row-echelon forms, sequential and parallel
//! - Syzygies and right divides over the integers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use syzygy_linalg::{
    normal_form_with_config, safe_right_divide, syzygies_of_rows, DenseMatrix, ParallelConfig,
};
use syzygy_rings::integers::Z;
use syzygy_rings::rationals::Q;

/// Deterministic pseudo-random small entries, rank deficient by one.
fn sample_entries(size: usize) -> Vec<Vec<i64>> {
    let mut rows: Vec<Vec<i64>> = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| ((i * 31 + j * 17 + i * j) % 19) as i64 - 9)
                .collect()
        })
        .collect();
    if size >= 2 {
        let combined: Vec<i64> = rows[0].iter().zip(&rows[1]).map(|(a, b)| a - 2 * b).collect();
        rows[size - 1] = combined;
    }
    rows
}

fn integer_matrix(size: usize) -> DenseMatrix<Z> {
    DenseMatrix::from_rows(
        sample_entries(size)
            .into_iter()
            .map(|row| row.into_iter().map(Z::new).collect())
            .collect(),
    )
}

fn rational_matrix(size: usize) -> DenseMatrix<Q> {
    DenseMatrix::from_rows(
        sample_entries(size)
            .into_iter()
            .map(|row| row.into_iter().map(Q::from_integer).collect())
            .collect(),
    )
}

/// Benchmark the Hermite normal form, sequential against parallel.
fn bench_hermite(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermite_normal_form");
    let parallel = ParallelConfig { parallel_threshold: 1 };

    for size in [8, 16, 32] {
        let m = integer_matrix(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &m, |b, m| {
            b.iter(|| black_box(normal_form_with_config(m, &ParallelConfig::sequential())))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &m, |b, m| {
            b.iter(|| black_box(normal_form_with_config(m, &parallel)))
        });
    }

    group.finish();
}

/// Benchmark the reduced row-echelon form over Q.
fn bench_rref(c: &mut Criterion) {
    let mut group = c.benchmark_group("rref");

    for size in [8, 16, 32] {
        let m = rational_matrix(size);
        group.bench_with_input(BenchmarkId::new("default", size), &m, |b, m| {
            b.iter(|| black_box(normal_form_with_config(m, &ParallelConfig::default())))
        });
    }

    group.finish();
}

/// Benchmark syzygies and divides, which reduce augmented matrices.
fn bench_augmented(c: &mut Criterion) {
    let mut group = c.benchmark_group("augmented");

    for size in [4, 8, 16] {
        let a = integer_matrix(size);
        group.bench_with_input(BenchmarkId::new("syzygies_of_rows", size), &a, |b, a| {
            b.iter(|| black_box(syzygies_of_rows(a)))
        });

        let rhs = a.sub_matrix(0..size / 2, 0..size);
        group.bench_with_input(BenchmarkId::new("safe_right_divide", size), &a, |b, a| {
            b.iter(|| black_box(safe_right_divide(&rhs, a)))
        });
    }

    group.finish();
}

criterion_group!(normal_form_benches, bench_hermite, bench_rref, bench_augmented);

criterion_main!(normal_form_benches);
