//! Work reports returned by the index.

use strata_core::Aabb;

use crate::config::MAX_LEVEL_COUNT;

/// Work done by the last camera update or query.
///
/// Diagnostics only. Nothing in the index reads these back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpatialQueryStats {
    /// Levels whose snapped camera cell changed (or were forced).
    pub levels_visited: u32,
    /// Levels that drained at least one dirty brick.
    pub levels_updated: u32,
    /// Entering slabs marked by partial window slides.
    pub slabs_updated: u32,
    /// Dirty bricks drained across all levels.
    pub bricks_updated: u32,
    /// Bricks resident across all active levels.
    pub resident_bricks: u32,
    /// Chunk bounds tested by a query.
    pub query_candidates: u32,
    /// Chunks a query returned.
    pub visible_chunk_count: u32,
    /// Levels fully invalidated by a jump of at least one window width.
    pub full_invalidations: u32,
    /// Dirty bricks drained per level.
    pub dirty_bricks_per_level: [u32; MAX_LEVEL_COUNT],
}

/// A brick whose version changed during the last update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyBrick {
    /// Level index.
    pub level: usize,
    /// Brick coordinate in units of the level's brick span.
    pub brick: [i64; 3],
    /// Version after the bump.
    pub version: u64,
    /// World-space bounds of the brick.
    pub bounds: Aabb,
}

/// Result of a broad-phase chunk query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkQuery {
    /// Indices of intersecting chunks, ascending.
    pub chunk_indices: Vec<usize>,
    /// Query work report.
    pub stats: SpatialQueryStats,
}

impl ChunkQuery {
    /// Returns true if no chunk intersected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunk_indices.is_empty()
    }
}
