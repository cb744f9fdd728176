//! Benchmark junction detection performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sandhi::raster::{rasterize, RowExtentCache};
use sandhi::{CellState, DetectorConfig, JunctionDetector, OccupancyGrid};

/// Build a multi-room floor plan: a bordered grid split by inner walls with
/// door gaps, so the detector finds junctions in the doorways.
fn floor_plan(width: usize, height: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::filled(width, height, CellState::Free);

    for x in 0..width {
        grid.set(x, 0, CellState::Obstacle);
        grid.set(x, height - 1, CellState::Obstacle);
    }
    for y in 0..height {
        grid.set(0, y, CellState::Obstacle);
        grid.set(width - 1, y, CellState::Obstacle);
    }

    // Vertical divider with a door gap in the middle third.
    let divider_x = width / 2;
    let gap_start = height / 3;
    let gap_end = 2 * height / 3;
    for y in 0..height {
        if y < gap_start || y >= gap_end {
            grid.set(divider_x, y, CellState::Obstacle);
        }
    }

    // Horizontal divider on the left half, door gap near the divider.
    let divider_y = height / 2;
    let gap = width / 4;
    for x in 0..divider_x {
        if !(gap..gap + 6).contains(&x) {
            grid.set(x, divider_y, CellState::Obstacle);
        }
    }

    grid
}

fn bench_circle_rasterization(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize_circle");
    for radius in [8u32, 32, 128].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(radius), radius, |b, &r| {
            b.iter(|| black_box(rasterize(black_box(r))))
        });
    }
    group.finish();
}

fn bench_extent_cache_build(c: &mut Criterion) {
    c.bench_function("row_extent_cache_8_to_128", |b| {
        b.iter(|| black_box(RowExtentCache::build(black_box(8), black_box(128))))
    });
}

fn bench_detect_floor_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_floor_plan");
    group.sample_size(20);

    for size in [64usize, 128].iter() {
        let grid = floor_plan(*size, *size);
        let detector = JunctionDetector::new(
            DetectorConfig::with_threshold(4).with_parallel(false),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(detector.detect(black_box(&grid)).unwrap()))
        });
    }

    group.finish();
}

fn bench_detect_parallel(c: &mut Criterion) {
    let grid = floor_plan(128, 128);
    let mut group = c.benchmark_group("detect_128_parallelism");
    group.sample_size(20);

    for parallel in [false, true].iter() {
        let detector = JunctionDetector::new(
            DetectorConfig::with_threshold(4).with_parallel(*parallel),
        )
        .unwrap();
        let name = if *parallel { "parallel" } else { "sequential" };

        group.bench_function(name, |b| {
            b.iter(|| black_box(detector.detect(black_box(&grid)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_circle_rasterization,
    bench_extent_cache_build,
    bench_detect_floor_plan,
    bench_detect_parallel
);
criterion_main!(benches);
