//! Benchmarks for symbol table operations.
//!
//! These benchmarks measure the performance of:
//! - Insertion throughput for both backends, including resize cost
//! - Lookup throughput for present and absent keys
//! - Growth from a deliberately tiny initial capacity

// Benchmark code - performance of the benchmark setup is not critical
#![allow(missing_docs)]
#![allow(clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pontus::{create_table, SymbolTable, TableBackend};

/// Build a filled table for lookup benchmarks.
fn filled_table(backend: TableBackend, entries: usize) -> Box<dyn SymbolTable<String, u64>> {
    let mut table = create_table(backend, entries);
    for i in 0..entries {
        table
            .put(format!("key-{i}"), i as u64)
            .expect("put should accept non-null keys");
    }
    table
}

/// Benchmark insertion throughput at different table sizes.
fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");

    for entries in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(*entries as u64));

        for backend in [TableBackend::Chaining, TableBackend::Probing] {
            group.bench_with_input(
                BenchmarkId::new(backend.to_string(), entries),
                entries,
                |b, &entries| {
                    b.iter(|| {
                        let mut table = create_table::<String, u64>(backend, entries);
                        for i in 0..entries {
                            table
                                .put(format!("key-{i}"), i as u64)
                                .expect("put should accept non-null keys");
                        }
                        black_box(table.len())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark growth starting from the smallest useful capacity, where
/// nearly every insertion batch triggers a resize.
fn bench_put_from_tiny_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_from_capacity_2");
    let entries = 10_000usize;
    group.throughput(Throughput::Elements(entries as u64));

    for backend in [TableBackend::Chaining, TableBackend::Probing] {
        group.bench_function(backend.to_string(), |b| {
            b.iter(|| {
                let mut table = create_table::<String, u64>(backend, 2);
                for i in 0..entries {
                    table
                        .put(format!("key-{i}"), i as u64)
                        .expect("put should accept non-null keys");
                }
                black_box(table.len())
            });
        });
    }

    group.finish();
}

/// Benchmark lookups that hit and lookups that miss.
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    let entries = 10_000usize;

    for backend in [TableBackend::Chaining, TableBackend::Probing] {
        let table = filled_table(backend, entries);

        group.bench_function(BenchmarkId::new(backend.to_string(), "hit"), |b| {
            let mut i = 0usize;
            b.iter(|| {
                let key = format!("key-{}", i % entries);
                i += 1;
                black_box(table.get(&key).copied())
            });
        });

        group.bench_function(BenchmarkId::new(backend.to_string(), "miss"), |b| {
            let mut i = 0usize;
            b.iter(|| {
                let key = format!("absent-{i}");
                i += 1;
                black_box(table.get(&key).copied())
            });
        });
    }

    group.finish();
}

/// Benchmark key enumeration, which walks the full backing storage.
fn bench_key_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_set");
    let entries = 10_000usize;
    group.throughput(Throughput::Elements(entries as u64));

    for backend in [TableBackend::Chaining, TableBackend::Probing] {
        let table = filled_table(backend, entries);

        group.bench_function(backend.to_string(), |b| {
            b.iter(|| black_box(table.key_set().size()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_put,
    bench_put_from_tiny_capacity,
    bench_get,
    bench_key_set,
);

criterion_main!(benches);
