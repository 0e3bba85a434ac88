//! # Frame Pipeline Integration Test
//!
//! Loads the shipped config and runs camera → clipmap → broad phase → mesher
//! over a small world, frame by frame.

use strata::{
    Aabb, Chunk, ChunkCoord, ChunkGrid, FramePlanner, MeshingMode, StrataConfig, Voxel, VoxelKind,
    CHUNK_SIZE,
};

const SHIPPED_CONFIG: &str = include_str!("../../../data/config/streaming.toml");

/// Flat terrain: 8x8 chunks at y = 0, ground height 8.
fn flat_world() -> ChunkGrid {
    let mut grid = ChunkGrid::with_capacity(64);
    for cz in -4..4 {
        for cx in -4..4 {
            let mut chunk = Chunk::new(ChunkCoord::new(cx, 0, cz));
            for z in 0..CHUNK_SIZE as i32 {
                for x in 0..CHUNK_SIZE as i32 {
                    for y in 0..8 {
                        let kind = if y == 7 { VoxelKind::Grass } else { VoxelKind::Stone };
                        chunk.set_voxel(x, y, z, Voxel::new(kind));
                    }
                }
            }
            grid.push(chunk);
        }
    }
    assert_eq!(grid.len(), 64);
    grid
}

fn view_around(camera: [f32; 3], radius: f32) -> Aabb {
    Aabb::new(camera.map(|c| c - radius), camera.map(|c| c + radius))
}

/// Test: The shipped config parses and stays in range.
#[test]
fn test_shipped_config() {
    let config = StrataConfig::from_toml_str(SHIPPED_CONFIG).expect("shipped config parses");
    assert_eq!(config, config.clamped());
    assert_eq!(config.clipmap.level_count, 5);
    assert_eq!(config.clipmap.grid_resolution, 128);
    assert_eq!(config.clipmap.brick_resolution, 16);
    assert_eq!(config.meshing.mode, MeshingMode::Greedy);
}

/// Test: First frame remeshes every visible chunk; a still camera remeshes none.
#[test]
fn test_first_frame_then_idle() {
    let grid = flat_world();
    let config = StrataConfig::from_toml_str(SHIPPED_CONFIG).expect("shipped config parses");
    let mut planner = FramePlanner::new(config);
    planner.rebuild(&grid);

    let camera = [0.5, 20.0, 0.5];
    let view = view_around(camera, 48.0);
    let plan = planner.plan_frame(camera, &view);

    assert!(!plan.visible_chunks.is_empty());
    assert_eq!(plan.remesh_chunks, plan.visible_chunks);
    assert_eq!(plan.stats.visible_chunk_count as usize, plan.visible_chunks.len());
    assert_eq!(plan.stats.levels_updated, 5);

    let meshes = planner.mesh_chunks(&grid, &plan.remesh_chunks);
    assert_eq!(meshes.len(), plan.remesh_chunks.len());
    for (index, mesh) in &meshes {
        assert!(plan.visible_chunks.contains(index));
        // Two materials stacked: grass top, stone below, plus the sides.
        assert!(!mesh.is_empty());
        assert!(mesh.quad_count() <= 6 * 2);
    }

    let idle = planner.plan_frame([0.9, 20.5, 0.9], &view);
    assert_eq!(idle.visible_chunks, plan.visible_chunks);
    assert!(idle.remesh_chunks.is_empty());
    assert_eq!(idle.stats.bricks_updated, 0);
}

/// Test: Walking remeshes only chunks touched by entering bricks.
#[test]
fn test_walk_remeshes_entering_edge() {
    let grid = flat_world();
    let mut planner = FramePlanner::new(StrataConfig::default());
    planner.rebuild(&grid);

    let mut camera = [0.5, 4.0, 0.5];
    planner.plan_frame(camera, &view_around(camera, 64.0));

    // Cross one level-0 brick boundary along +X.
    camera[0] += 8.0;
    let view = view_around(camera, 64.0);
    let plan = planner.plan_frame(camera, &view);

    assert!(plan.stats.bricks_updated > 0);
    assert!(!plan.remesh_chunks.is_empty());
    assert!(plan.remesh_chunks.len() < plan.visible_chunks.len());
    let bricks = planner.index().last_dirty_bricks();
    for &i in &plan.remesh_chunks {
        let bounds = grid.get(i).map(Chunk::world_bounds).expect("chunk exists");
        assert!(bricks.iter().any(|b| b.bounds.intersects(&bounds)));
    }
}

/// Test: An edit schedules its chunk for remeshing next frame.
#[test]
fn test_edit_schedules_remesh() {
    let mut grid = flat_world();
    let mut planner = FramePlanner::new(StrataConfig::default());
    planner.rebuild(&grid);

    let camera = [0.5, 4.0, 0.5];
    let view = view_around(camera, 64.0);
    planner.plan_frame(camera, &view);

    // Dig a hole in the chunk at the origin.
    let target = grid
        .index_of(ChunkCoord::new(0, 0, 0))
        .expect("origin chunk exists");
    if let Some(chunk) = grid.get_mut(target) {
        chunk.set_voxel(3, 7, 3, Voxel::EMPTY);
    }
    let edit = Aabb::from_min_size([3.0, 7.0, 3.0], [1.0, 1.0, 1.0]);
    assert!(planner.invalidate_bounds(&edit) > 0);

    let plan = planner.plan_frame(camera, &view);
    assert_eq!(plan.stats.levels_visited, 0);
    assert!(plan.remesh_chunks.contains(&target));

    // The coarsest level's brick spans 64 units, so the neighbours sharing
    // it are rescheduled too.
    let mut expected: Vec<usize> = [(0, 0), (1, 0), (0, 1), (1, 1)]
        .iter()
        .filter_map(|&(x, z)| grid.index_of(ChunkCoord::new(x, 0, z)))
        .collect();
    expected.sort_unstable();
    assert_eq!(plan.remesh_chunks, expected);

    let after = planner.mesh_chunks(&grid, &[target]);
    let before = planner.mesh_chunks(&flat_world(), &[target]);
    assert!(after[0].1.quad_count() > before[0].1.quad_count());
}

/// Test: Reconfiguring re-dirties everything without moving the camera.
#[test]
fn test_set_config_redirties() {
    let grid = flat_world();
    let mut planner = FramePlanner::new(StrataConfig::default());
    planner.rebuild(&grid);

    let camera = [0.5, 4.0, 0.5];
    let view = view_around(camera, 32.0);
    let first = planner.plan_frame(camera, &view);

    let mut config = StrataConfig::default();
    config.clipmap.level_count = 2;
    config.meshing.mode = MeshingMode::Naive;
    planner.set_config(config);
    assert_eq!(planner.meshing().mode, MeshingMode::Naive);

    let plan = planner.plan_frame(camera, &view);
    assert_eq!(plan.remesh_chunks, first.remesh_chunks);
    assert_eq!(plan.stats.levels_updated, 2);
}

/// Test: Unknown chunk indices are skipped when meshing.
#[test]
fn test_mesh_chunks_skips_unknown() {
    let grid = flat_world();
    let planner = FramePlanner::new(StrataConfig::default());
    let meshes = planner.mesh_chunks(&grid, &[0, 9_999]);
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].0, 0);
}
