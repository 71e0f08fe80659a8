//! Component benchmarks: persistence read/write performance.
//!
//! Run with: `cargo bench --bench persist`

#[path = "../../common/mod.rs"]
mod common;

use common::criterion_config::default_criterion;

use predictors::persist::{
    Archivable, BinaryReadOptions, BinaryWriteOptions, JsonWriteOptions, read_header,
};
use predictors::repr::LinearPredictor;
use predictors::testing::random_predictor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Cursor;

const DIMENSIONS: [usize; 3] = [100, 10_000, 1_000_000];

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/persist/binary");

    for dimension in DIMENSIONS {
        let predictor = random_predictor(dimension, 42);
        let bytes = predictor.to_bytes().unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("write", dimension), &predictor, |b, p| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(bytes.len());
                p.write_into(&mut buf, &BinaryWriteOptions::default()).unwrap();
                black_box(buf)
            })
        });

        group.bench_with_input(BenchmarkId::new("read", dimension), &bytes, |b, bytes| {
            b.iter(|| {
                black_box(
                    LinearPredictor::read_from(Cursor::new(bytes), &BinaryReadOptions::default())
                        .unwrap(),
                )
            })
        });

        let unchecked = BinaryReadOptions::builder().verify_checksum(false).build();
        group.bench_with_input(
            BenchmarkId::new("read_unchecked", dimension),
            &bytes,
            |b, bytes| {
                b.iter(|| black_box(LinearPredictor::read_from(Cursor::new(bytes), &unchecked).unwrap()))
            },
        );

        group.bench_with_input(BenchmarkId::new("inspect", dimension), &bytes, |b, bytes| {
            b.iter(|| black_box(read_header(&mut bytes.as_slice()).unwrap()))
        });
    }

    group.finish();
}

fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("component/persist/json");

    for dimension in DIMENSIONS {
        let predictor = random_predictor(dimension, 42);
        let json = predictor.to_json_string(&JsonWriteOptions::compact()).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_with_input(BenchmarkId::new("write", dimension), &predictor, |b, p| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(json.len());
                p.write_json_into(&mut buf, &JsonWriteOptions::compact()).unwrap();
                black_box(buf)
            })
        });

        group.bench_with_input(BenchmarkId::new("read", dimension), &json, |b, json| {
            b.iter(|| black_box(LinearPredictor::from_json_str(json).unwrap()))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = bench_binary, bench_json
}
criterion_main!(benches);
