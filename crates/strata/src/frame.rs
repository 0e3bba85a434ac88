//! # Frame Planning
//!
//! Per-frame glue between the clipmap index and the mesher:
//!
//! 1. Move the camera and collect the bricks that changed
//! 2. Broad-phase the view volume for visible chunks
//! 3. Select visible chunks touched by a changed brick for remeshing

use strata_core::{Aabb, ChunkGrid};
use strata_meshing::{build_chunk_mesh, ChunkMeshData, MeshingOptions};
use strata_spatial::{ClipmapIndex, SpatialQueryStats};
use tracing::{debug, trace};

use crate::config::StrataConfig;

/// Work list for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    /// Chunks intersecting the view volume, ascending.
    pub visible_chunks: Vec<usize>,
    /// Visible chunks overlapping a brick that changed this frame, ascending.
    pub remesh_chunks: Vec<usize>,
    /// Camera update work merged with the query report.
    pub stats: SpatialQueryStats,
}

/// Owns the clipmap and meshing settings and plans each frame.
#[derive(Debug, Clone)]
pub struct FramePlanner {
    index: ClipmapIndex,
    meshing: MeshingOptions,
}

impl FramePlanner {
    /// Creates a planner with no chunks.
    #[must_use]
    pub fn new(config: StrataConfig) -> Self {
        let config = config.clamped();
        Self {
            index: ClipmapIndex::new(config.clipmap),
            meshing: config.meshing,
        }
    }

    /// The clipmap index.
    #[must_use]
    pub const fn index(&self) -> &ClipmapIndex {
        &self.index
    }

    /// Meshing settings used by [`FramePlanner::mesh_chunks`].
    #[must_use]
    pub const fn meshing(&self) -> &MeshingOptions {
        &self.meshing
    }

    /// Replaces the configuration. Every brick is re-dirtied.
    pub fn set_config(&mut self, config: StrataConfig) {
        let config = config.clamped();
        self.index.set_config(config.clipmap);
        self.meshing = config.meshing;
    }

    /// Takes a new snapshot of the chunk set.
    pub fn rebuild(&mut self, grid: &ChunkGrid) {
        self.index.rebuild(grid);
        debug!(chunks = grid.len(), "frame planner rebuilt");
    }

    /// Flags the bricks covering an edited region. The affected chunks are
    /// scheduled for remeshing on the next frame they are visible.
    pub fn invalidate_bounds(&mut self, bounds: &Aabb) -> u32 {
        self.index.invalidate_bounds(bounds)
    }

    /// Moves the camera and plans the frame.
    pub fn plan_frame(&mut self, camera: [f32; 3], view_bounds: &Aabb) -> FramePlan {
        let mut stats = self.index.update_camera(camera);
        let query = self.index.query_chunks_intersecting(view_bounds);
        stats.query_candidates = query.stats.query_candidates;
        stats.visible_chunk_count = query.stats.visible_chunk_count;

        let dirty = self.index.last_dirty_bricks();
        let chunk_bounds = self.index.chunk_bounds();
        let remesh_chunks = if dirty.is_empty() {
            Vec::new()
        } else {
            query
                .chunk_indices
                .iter()
                .copied()
                .filter(|&i| {
                    let chunk = &chunk_bounds[i];
                    dirty.iter().any(|brick| brick.bounds.intersects(chunk))
                })
                .collect()
        };

        trace!(
            visible = query.chunk_indices.len(),
            remesh = remesh_chunks.len(),
            dirty_bricks = dirty.len(),
            "frame planned"
        );

        FramePlan {
            visible_chunks: query.chunk_indices,
            remesh_chunks,
            stats,
        }
    }

    /// Meshes the listed chunks of `grid`. Indices not in the grid are skipped.
    #[must_use]
    pub fn mesh_chunks(&self, grid: &ChunkGrid, indices: &[usize]) -> Vec<(usize, ChunkMeshData)> {
        indices
            .iter()
            .filter_map(|&i| grid.get(i).map(|chunk| (i, build_chunk_mesh(chunk, &self.meshing))))
            .collect()
    }
}
