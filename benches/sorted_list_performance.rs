//! Performance benchmarks for the SortedList implementation.
//!
//! This module benchmarks:
//! - Sequential insertions in ascending, descending and scattered order
//! - Construction from an unsorted collection
//! - Removal by value and by index
//! - Membership queries and display rendering
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sorted_list::{ElementKind, SortedList};

fn scattered(size: i64) -> Vec<i64> {
    (0..size).map(|i| (i * 7919) % size).collect()
}

fn build(values: &[i64]) -> SortedList {
    SortedList::with_values(ElementKind::Integer, values.iter().copied()).unwrap()
}

/// Benchmark sequential insertions in different arrival orders
fn bench_insertions(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertions");

    for size in [100i64, 1000, 5000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("ascending", size), size, |b, &size| {
            b.iter(|| {
                let mut list = SortedList::new(ElementKind::Integer);
                for i in 0..size {
                    black_box(list.insert(i).unwrap());
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("descending", size), size, |b, &size| {
            b.iter(|| {
                let mut list = SortedList::new(ElementKind::Integer);
                for i in (0..size).rev() {
                    black_box(list.insert(i).unwrap());
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("scattered", size), size, |b, &size| {
            let values = scattered(size);
            b.iter(|| {
                let mut list = SortedList::new(ElementKind::Integer);
                for value in &values {
                    black_box(list.insert(*value).unwrap());
                }
                list
            });
        });
    }
    group.finish();
}

/// Benchmark construction from an unsorted collection
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100i64, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("with_values", size), size, |b, &size| {
            let values = scattered(size);
            b.iter(|| black_box(build(&values)));
        });
    }
    group.finish();
}

/// Benchmark removals by value and by index
fn bench_removals(c: &mut Criterion) {
    let mut group = c.benchmark_group("removals");

    for size in [100i64, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("by_value", size), size, |b, &size| {
            let values: Vec<i64> = (0..size).map(|i| i % 10).collect();
            b.iter_batched(
                || build(&values),
                |mut list| black_box(list.remove_all(5)),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("by_index", size), size, |b, &size| {
            let values: Vec<i64> = (0..size).map(|i| i % 10).collect();
            b.iter_batched(
                || build(&values),
                |mut list| {
                    while !list.is_empty() {
                        black_box(list.remove_by_index(0).unwrap());
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark membership queries and display rendering
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let integers = build(&scattered(10_000));
    group.bench_function("contains_hit", |b| {
        b.iter(|| black_box(integers.contains(black_box(4_242i64))));
    });
    group.bench_function("contains_wrong_kind", |b| {
        b.iter(|| black_box(integers.contains(black_box("4242"))));
    });
    group.bench_function("display", |b| {
        b.iter(|| black_box(integers.to_string()));
    });

    let words: Vec<String> = (0..1_000)
        .map(|i| format!("word{:04}", (i * 7) % 1_000))
        .collect();
    let strings = SortedList::with_values(ElementKind::String, words).unwrap();
    group.bench_function("contains_string", |b| {
        b.iter(|| black_box(strings.contains(black_box("word0500"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insertions,
    bench_construction,
    bench_removals,
    bench_queries
);
criterion_main!(benches);
