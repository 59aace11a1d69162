//! Benchmarks for slab partitioning and extraction.
//!
//! Run with: cargo bench -p atoms-slice
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p atoms-slice -- --save-baseline main
//! 2. After changes: cargo bench -p atoms-slice -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation, clippy::unwrap_used)]

use atoms_slice::{
    crystal_plane_thicknesses, IndexedSlices, PaddedSlices, SlicedStructure, ThicknessSpec,
};
use atoms_types::{simple_cubic, AtomicStructure};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// Test Structure Generation
// =============================================================================

/// Gold blocks of increasing size, 2 Å layer spacing.
fn test_cases() -> [(&'static str, AtomicStructure); 3] {
    [
        ("gold_1k", simple_cubic(79, 2.0, [8, 8, 16])),
        ("gold_8k", simple_cubic(79, 2.0, [16, 16, 32])),
        ("gold_65k", simple_cubic(79, 2.0, [32, 32, 64])),
    ]
}

// =============================================================================
// Construction Benchmarks
// =============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Construction");
    let spec = ThicknessSpec::Uniform(0.5);

    for (name, structure) in test_cases() {
        group.throughput(Throughput::Elements(structure.atom_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("indexed_new", name),
            &structure,
            |b, structure| b.iter(|| IndexedSlices::new(black_box(structure.clone()), &spec)),
        );

        group.bench_with_input(
            BenchmarkId::new("padded_new", name),
            &structure,
            |b, structure| {
                b.iter(|| PaddedSlices::new(black_box(structure.clone()), &spec, 4.0, 1.0))
            },
        );
    }

    group.finish();
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Extraction");
    let spec = ThicknessSpec::Uniform(0.5);

    for (name, structure) in test_cases() {
        group.throughput(Throughput::Elements(structure.atom_count() as u64));

        let indexed = IndexedSlices::new(structure.clone(), &spec).unwrap();
        let padded = PaddedSlices::new(structure, &spec, 4.0, 1.0).unwrap();
        let middle = indexed.num_slabs() / 2;

        group.bench_with_input(BenchmarkId::new("indexed_slab", name), &indexed, |b, slices| {
            b.iter(|| slices.atoms_in_range(black_box(middle), None, None))
        });

        group.bench_with_input(BenchmarkId::new("padded_slab", name), &padded, |b, slices| {
            b.iter(|| slices.atoms_in_range(black_box(middle), None, None))
        });

        group.bench_with_input(
            BenchmarkId::new("indexed_full_run", name),
            &indexed,
            |b, slices| {
                let last = slices.num_slabs();
                b.iter(|| slices.atoms_in_range(black_box(0), Some(last), None))
            },
        );
    }

    group.finish();
}

// =============================================================================
// Plane Detection Benchmarks
// =============================================================================

fn bench_plane_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("PlaneDetection");

    for (name, structure) in test_cases() {
        group.throughput(Throughput::Elements(structure.atom_count() as u64));

        group.bench_with_input(
            BenchmarkId::new("crystal_planes", name),
            &structure,
            |b, structure| b.iter(|| crystal_plane_thicknesses(black_box(structure), 0.1)),
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(
    benches,
    bench_construction,
    bench_extraction,
    bench_plane_detection,
);

criterion_main!(benches);
