//! Benchmark for clipmap camera updates and broad-phase queries.
//!
//! TARGET: steady-state camera update in single-digit microseconds
//!
//! Run with: cargo bench --package strata_spatial --bench clipmap_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use strata_core::{Aabb, Chunk, ChunkCoord, ChunkGrid};
use strata_spatial::{ClipmapConfig, ClipmapIndex};

fn chunk_field(radius: i32) -> ChunkGrid {
    let mut grid = ChunkGrid::new();
    for z in -radius..radius {
        for y in -2..2 {
            for x in -radius..radius {
                grid.push(Chunk::new(ChunkCoord::new(x, y, z)));
            }
        }
    }
    grid
}

fn benchmark_camera_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_update");
    group.throughput(Throughput::Elements(1));

    group.bench_function("walk_one_voxel_per_frame", |b| {
        let mut index = ClipmapIndex::new(ClipmapConfig::default());
        let mut step = 0u32;
        b.iter(|| {
            // Wrap well before f32 loses unit precision.
            step = (step + 1) % 1_000_000;
            black_box(index.update_camera([step as f32 + 0.5, 0.5, 0.5]))
        });
    });

    group.bench_function("still_camera", |b| {
        let mut index = ClipmapIndex::new(ClipmapConfig::default());
        index.update_camera([0.5; 3]);
        b.iter(|| black_box(index.update_camera(black_box([0.5; 3]))));
    });

    group.bench_function("teleport_large_grid", |b| {
        let config = ClipmapConfig {
            grid_resolution: 256,
            ..ClipmapConfig::default()
        };
        let mut index = ClipmapIndex::new(config);
        let mut far = false;
        b.iter(|| {
            far = !far;
            let x = if far { 100_000.0 } else { 0.0 };
            black_box(index.update_camera([x, 0.0, 0.0]))
        });
    });

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let grid = chunk_field(16);
    let mut index = ClipmapIndex::default();
    index.rebuild(&grid);
    index.update_camera([0.0; 3]);

    let view = Aabb::new([-96.0, -64.0, -96.0], [96.0, 64.0, 96.0]);
    let mut group = c.benchmark_group("broad_phase");
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("query_4096_chunks", |b| {
        b.iter(|| black_box(index.query_chunks_intersecting(black_box(&view))));
    });
    group.finish();
}

criterion_group!(benches, benchmark_camera_walk, benchmark_query);
criterion_main!(benches);
