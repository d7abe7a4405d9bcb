//! Sorting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of both algorithms (16 to 4096 disks)
//! - Row construction and the classification predicates in isolation
//!
//! Run with `cargo bench -p disksort-benchmarks`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use disksort::prelude::*;
use std::hint::black_box;

// ============================================================================
// Scalability Benchmarks
// ============================================================================

/// Compare both algorithms across row sizes.
fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternating_row_sort");

    for light_count in [8usize, 64, 512, 2048] {
        let row = DiskRow::new(light_count).expect("light count is nonzero");
        group.throughput(Throughput::Elements(row.total_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("left_to_right", row.total_count()),
            &row,
            |b, row| b.iter(|| sort_left_to_right(black_box(row)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("lawnmower", row.total_count()),
            &row,
            |b, row| b.iter(|| sort_lawnmower(black_box(row)).unwrap()),
        );
    }

    group.finish();
}

// ============================================================================
// Component Benchmarks
// ============================================================================

/// Measure row construction and the classification predicates in isolation.
fn bench_row_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_operations");

    let row = DiskRow::new(2048).expect("light count is nonzero");

    group.bench_function("new_2048_lights", |b| {
        b.iter(|| DiskRow::new(black_box(2048)).unwrap())
    });

    group.bench_function("is_alternating_4096_disks", |b| {
        b.iter(|| black_box(&row).is_alternating())
    });

    group.bench_function("is_sorted_4096_disks", |b| {
        b.iter(|| black_box(&row).is_sorted())
    });

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_row_operations);
criterion_main!(benches);
