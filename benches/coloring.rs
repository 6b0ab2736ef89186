//! Performance measurement for graph construction and both solvers

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fourmap::graph::adjacency::RegionGraph;
use fourmap::solver::{exact, orchestrator};
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

// Checkerboard of square patches, each patch one region: a dense planar
// adjacency with diagonal contacts, similar to a segmented photograph
fn patch_raster(patches_per_side: usize, patch_size: usize) -> Array2<i32> {
    let side = patches_per_side * patch_size;
    Array2::from_shape_fn((side, side), |(row, col)| {
        let patch_row = row / patch_size;
        let patch_col = col / patch_size;
        (patch_row * patches_per_side + patch_col) as i32 + 1
    })
}

/// Measures adjacency construction cost as region count grows
fn bench_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");

    for patches in &[8usize, 16, 32] {
        let markers = patch_raster(*patches, 4);
        group.bench_with_input(BenchmarkId::from_parameter(patches), patches, |b, _| {
            b.iter(|| RegionGraph::from_labels(black_box(&markers), 0));
        });
    }

    group.finish();
}

/// Compares the exact solver against the heuristic orchestrator
fn bench_solvers(c: &mut Criterion) {
    let markers = patch_raster(16, 4);
    let graph = RegionGraph::from_labels(&markers, 0);

    c.bench_function("exact_solve_256_regions", |b| {
        b.iter(|| exact::solve(black_box(&graph)));
    });

    c.bench_function("heuristic_solve_256_regions", |b| {
        let mut rng = StdRng::seed_from_u64(12345);
        b.iter(|| orchestrator::repeat_until_success(black_box(&graph), 100, &mut rng));
    });
}

criterion_group!(benches, bench_graph_construction, bench_solvers);
criterion_main!(benches);
