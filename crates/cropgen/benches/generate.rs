//! Benchmarks for dataset generation.
//!
//! Run with: `cargo bench -p cropgen`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cropgen::dates::evenly_spaced_indices;
use cropgen::generator::{generate, GeneratorConfig};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for rows in [351usize, 10_000, 100_000] {
        let config = GeneratorConfig {
            rows,
            start: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2199, 12, 31).unwrap(),
            seed: Some(42),
            ..GeneratorConfig::default()
        };

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &config, |b, config| {
            b.iter(|| generate(black_box(config)).unwrap());
        });
    }

    group.finish();
}

fn bench_evenly_spaced_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("evenly_spaced_indices");

    for count in [351usize, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| evenly_spaced_indices(black_box(1_000_000), count));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_evenly_spaced_indices);
criterion_main!(benches);
