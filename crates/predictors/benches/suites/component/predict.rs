//! Component benchmarks: single-vector and batch scoring.
//!
//! Scoring cost should track the number of stored entries, not the predictor
//! dimension; the `sparse` group checks that by holding nnz fixed while the
//! dimension grows.
//!
//! Run with: `cargo bench --bench predict`

#[path = "../../common/mod.rs"]
mod common;

use common::criterion_config::default_criterion;

use predictors::Parallelism;
use predictors::data::{AutoDataVector, BinaryVector, SparseVector};
use predictors::inference::LinearPredictorBatch;
use predictors::testing::{random_dense_vector, random_predictor, random_sparse_vector};

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::Array2;

// =============================================================================
// Single Vector
// =============================================================================

fn bench_predict_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/predict/sparse");
    let nnz = 64;

    for dimension in [1_000usize, 100_000, 1_000_000] {
        let predictor = random_predictor(dimension, 42);
        let x = random_sparse_vector(dimension, nnz, 7);

        group.throughput(Throughput::Elements(nnz as u64));
        group.bench_with_input(BenchmarkId::new("nnz64", dimension), &x, |b, x| {
            b.iter(|| black_box(predictor.predict(black_box(x))))
        });
    }

    group.finish();
}

fn bench_predict_encodings(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/predict/encoding");
    let dimension = 4_096;
    let predictor = random_predictor(dimension, 42);

    let dense = random_dense_vector(dimension, 0.5, 3);
    let sparse = SparseVector::from_pairs(
        dense
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v)),
    )
    .unwrap();
    let binary = BinaryVector::from_indices(sparse.indices().iter().copied());
    let auto = AutoDataVector::from_dense(dense.as_slice());

    group.throughput(Throughput::Elements(dimension as u64));
    group.bench_function("dense", |b| b.iter(|| black_box(predictor.predict(black_box(&dense)))));
    group.bench_function("sparse", |b| {
        b.iter(|| black_box(predictor.predict(black_box(&sparse))))
    });
    group.bench_function("binary", |b| {
        b.iter(|| black_box(predictor.predict(black_box(&binary))))
    });
    group.bench_function("auto", |b| b.iter(|| black_box(predictor.predict(black_box(&auto)))));

    group.finish();
}

fn bench_weighted_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/predict/weighted_elements");
    let predictor = random_predictor(100_000, 42);

    for nnz in [16usize, 256, 4_096] {
        let x = random_sparse_vector(100_000, nnz, 9);
        group.throughput(Throughput::Elements(nnz as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nnz), &x, |b, x| {
            b.iter(|| black_box(predictor.weighted_elements(black_box(x))))
        });
    }

    group.finish();
}

// =============================================================================
// Batch
// =============================================================================

fn bench_predict_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/predict/batch");
    let dimension = 10_000;
    let predictor = random_predictor(dimension, 42);

    for n_rows in [1_000usize, 10_000] {
        let rows: Vec<SparseVector> = (0..n_rows as u64)
            .map(|seed| random_sparse_vector(dimension, 32, seed))
            .collect();

        group.throughput(Throughput::Elements(n_rows as u64));
        for parallelism in [Parallelism::Sequential, Parallelism::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("{parallelism:?}"), n_rows),
                &rows,
                |b, rows| b.iter(|| black_box(predictor.predict_batch_with(rows, parallelism))),
            );
        }
    }

    group.finish();
}

fn bench_predict_dense_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/predict/dense_matrix");
    let (n_rows, n_cols) = (10_000usize, 100usize);
    let predictor = random_predictor(n_cols, 42);
    let data = Array2::from_shape_vec(
        (n_rows, n_cols),
        random_dense_vector(n_rows * n_cols, 0.0, 5).into_vec(),
    )
    .unwrap();

    group.throughput(Throughput::Elements(n_rows as u64));
    for parallelism in [Parallelism::Sequential, Parallelism::Parallel] {
        group.bench_function(format!("{parallelism:?}"), |b| {
            b.iter(|| black_box(predictor.predict_dense_with(data.view(), parallelism)))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = bench_predict_sparse, bench_predict_encodings, bench_weighted_elements,
        bench_predict_batch, bench_predict_dense_matrix
}
criterion_main!(benches);
