//! The multi-level clipmap index.

use strata_core::{Aabb, Chunk, ChunkGrid};
use tracing::{debug, trace};

use crate::config::ClipmapConfig;
use crate::level::ClipmapLevel;
use crate::snap::floor_to_cell;
use crate::stats::{ChunkQuery, DirtyBrick, SpatialQueryStats};

/// Camera-centered clipmap over a chunk set.
///
/// Writes (`update_camera`, `rebuild`, `set_config`, `invalidate_bounds`)
/// take `&mut self`; queries take `&self`, so readers share the index freely
/// between updates.
#[derive(Debug, Clone)]
pub struct ClipmapIndex {
    config: ClipmapConfig,
    levels: Vec<ClipmapLevel>,
    chunk_bounds: Vec<Aabb>,
    camera: Option<[f32; 3]>,
    last_dirty: Vec<DirtyBrick>,
    last_stats: SpatialQueryStats,
}

impl Default for ClipmapIndex {
    fn default() -> Self {
        Self::new(ClipmapConfig::default())
    }
}

impl ClipmapIndex {
    /// Creates an uninitialized index. Values out of range are clamped.
    #[must_use]
    pub fn new(config: ClipmapConfig) -> Self {
        let config = config.clamped();
        Self {
            config,
            levels: build_levels(&config),
            chunk_bounds: Vec::new(),
            camera: None,
            last_dirty: Vec::new(),
            last_stats: SpatialQueryStats::default(),
        }
    }

    /// Active (clamped) configuration.
    #[must_use]
    pub const fn config(&self) -> &ClipmapConfig {
        &self.config
    }

    /// Number of levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Level `index`.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&ClipmapLevel> {
        self.levels.get(index)
    }

    /// All levels, finest first.
    #[must_use]
    pub fn levels(&self) -> &[ClipmapLevel] {
        &self.levels
    }

    /// Chunks in the snapshot taken by the last `rebuild`.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunk_bounds.len()
    }

    /// World bounds of every chunk in the snapshot, by chunk index.
    #[must_use]
    pub fn chunk_bounds(&self) -> &[Aabb] {
        &self.chunk_bounds
    }

    /// Last camera position passed to `update_camera`.
    #[must_use]
    pub const fn camera_position(&self) -> Option<[f32; 3]> {
        self.camera
    }

    /// True once a camera position is known.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.camera.is_some()
    }

    /// Bricks drained by the last `update_camera`, in level then slot order.
    #[must_use]
    pub fn last_dirty_bricks(&self) -> &[DirtyBrick] {
        &self.last_dirty
    }

    /// Report of the last `update_camera`.
    #[must_use]
    pub const fn last_stats(&self) -> &SpatialQueryStats {
        &self.last_stats
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Replaces the configuration and reallocates level storage.
    ///
    /// Every brick is marked dirty. If a camera position is known the windows
    /// are re-seeded around it right away; the bricks drain on the next update.
    pub fn set_config(&mut self, config: ClipmapConfig) {
        self.config = config.clamped();
        self.levels = build_levels(&self.config);
        self.last_dirty.clear();
        debug!(config = ?self.config, "clipmap reconfigured");
        self.reseed();
    }

    /// Snapshots the chunk bounds of `grid`, resets every brick version and
    /// marks every brick dirty.
    pub fn rebuild(&mut self, grid: &ChunkGrid) {
        self.chunk_bounds.clear();
        self.chunk_bounds.extend(grid.iter().map(Chunk::world_bounds));
        for level in &mut self.levels {
            level.reset_versions();
        }
        self.last_dirty.clear();
        debug!(chunks = self.chunk_bounds.len(), "clipmap rebuilt");
        self.reseed();
    }

    /// Drops the chunk snapshot, camera and every level's state.
    pub fn clear(&mut self) {
        self.chunk_bounds.clear();
        self.camera = None;
        for level in &mut self.levels {
            level.clear();
        }
        self.last_dirty.clear();
        self.last_stats = SpatialQueryStats::default();
    }

    fn reseed(&mut self) {
        if let Some(camera) = self.camera {
            let cell = floor_to_cell(camera);
            for level in &mut self.levels {
                level.update(cell);
            }
        }
    }

    // =========================================================================
    // PER FRAME
    // =========================================================================

    /// Moves the camera, slides every level's window and drains dirty bricks.
    pub fn update_camera(&mut self, position: [f32; 3]) -> SpatialQueryStats {
        let cell = floor_to_cell(position);
        self.camera = Some(position);
        self.last_dirty.clear();

        let mut stats = SpatialQueryStats::default();
        for (i, level) in self.levels.iter_mut().enumerate() {
            let update = level.update(cell);
            stats.levels_visited += u32::from(update.visited);
            stats.slabs_updated += update.slabs;
            stats.full_invalidations += u32::from(update.full_invalidation);

            let drained = level.drain(&mut self.last_dirty);
            stats.dirty_bricks_per_level[i] = drained;
            stats.bricks_updated += drained;
            stats.levels_updated += u32::from(drained > 0);
            stats.resident_bricks += level.resident_bricks();
        }

        trace!(
            ?cell,
            visited = stats.levels_visited,
            bricks = stats.bricks_updated,
            slabs = stats.slabs_updated,
            "clipmap camera update"
        );
        self.last_stats = stats;
        stats
    }

    /// Marks every resident brick overlapping `bounds` dirty in every level.
    ///
    /// For edits made outside the index. Returns the number of bricks newly
    /// flagged; they drain on the next `update_camera`.
    pub fn invalidate_bounds(&mut self, bounds: &Aabb) -> u32 {
        if bounds.is_empty() {
            return 0;
        }
        let flagged: u32 = self
            .levels
            .iter_mut()
            .map(|level| level.invalidate_bounds(bounds))
            .sum();
        trace!(flagged, "clipmap bounds invalidated");
        flagged
    }

    /// Version of the brick containing `position` at `level`.
    ///
    /// `None` if the level does not exist, the position is not finite, or it is
    /// outside the level's window.
    #[must_use]
    pub fn brick_version(&self, level: usize, position: [f32; 3]) -> Option<u64> {
        let level = self.levels.get(level)?;
        level.brick_version(level.brick_at(position)?)
    }

    /// Broad-phase query: chunks whose bounds overlap `bounds`.
    ///
    /// The bounds are first clipped to the coarsest level's window. Results
    /// are ascending chunk indices.
    #[must_use]
    pub fn query_chunks_intersecting(&self, bounds: &Aabb) -> ChunkQuery {
        let mut query = ChunkQuery::default();
        query.stats.resident_bricks = self.levels.iter().map(ClipmapLevel::resident_bricks).sum();

        let Some(coarse) = self.levels.last().and_then(ClipmapLevel::active_bounds) else {
            return query;
        };
        let Some(clipped) = bounds.intersection(&coarse) else {
            return query;
        };

        query.stats.query_candidates = self.chunk_bounds.len() as u32;
        query.chunk_indices = self
            .chunk_bounds
            .iter()
            .enumerate()
            .filter(|(_, chunk)| chunk.intersects(&clipped))
            .map(|(i, _)| i)
            .collect();
        query.stats.visible_chunk_count = query.chunk_indices.len() as u32;
        query
    }
}

fn build_levels(config: &ClipmapConfig) -> Vec<ClipmapLevel> {
    (0..config.level_count as usize)
        .map(|i| ClipmapLevel::new(i, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ChunkCoord;

    fn assert_send_sync<T: Send + Sync>() {}

    fn grid_row(count: i32) -> ChunkGrid {
        let mut grid = ChunkGrid::new();
        for x in 0..count {
            grid.push(Chunk::new(ChunkCoord::new(x, 0, 0)));
        }
        grid
    }

    #[test]
    fn test_index_is_shareable() {
        assert_send_sync::<ClipmapIndex>();
    }

    #[test]
    fn test_uninitialized_queries_are_empty() {
        let mut index = ClipmapIndex::default();
        index.rebuild(&grid_row(4));
        let query = index.query_chunks_intersecting(&Aabb::new([-1e6; 3], [1e6; 3]));
        assert!(query.is_empty());
        assert_eq!(query.stats.visible_chunk_count, 0);
        assert_eq!(index.brick_version(0, [0.0; 3]), None);
        assert_eq!(index.invalidate_bounds(&Aabb::new([0.0; 3], [8.0; 3])), 0);
    }

    #[test]
    fn test_query_ascending_and_clipped() {
        let mut index = ClipmapIndex::default();
        index.rebuild(&grid_row(40));
        index.update_camera([0.5, 0.5, 0.5]);

        // Coarsest window: voxel 8, span 64, origin brick -4 → [-256, 256).
        let coarse = index.level(3).and_then(ClipmapLevel::active_bounds);
        assert_eq!(coarse, Some(Aabb::new([-256.0; 3], [256.0; 3])));

        let query = index.query_chunks_intersecting(&Aabb::new([-1e6; 3], [1e6; 3]));
        // Chunks 0..8 cover x in [0, 256).
        assert_eq!(query.chunk_indices, (0..8).collect::<Vec<_>>());
        assert_eq!(query.stats.query_candidates, 40);
        assert_eq!(query.stats.visible_chunk_count, 8);
    }

    #[test]
    fn test_zero_size_query() {
        let mut index = ClipmapIndex::default();
        index.rebuild(&grid_row(2));
        index.update_camera([0.0; 3]);
        let query = index.query_chunks_intersecting(&Aabb::new([5.0; 3], [5.0; 3]));
        assert!(query.is_empty());
        assert_eq!(query.stats.query_candidates, 0);
    }

    #[test]
    fn test_set_config_reseeds() {
        let mut index = ClipmapIndex::default();
        index.update_camera([0.0; 3]);
        index.set_config(ClipmapConfig {
            level_count: 2,
            ..ClipmapConfig::default()
        });
        assert_eq!(index.level_count(), 2);
        assert!(index.levels().iter().all(ClipmapLevel::is_active));

        // The camera did not move, yet every brick drains once.
        let stats = index.update_camera([0.0; 3]);
        assert_eq!(stats.levels_visited, 0);
        assert_eq!(stats.bricks_updated, 2 * 512);
        assert_eq!(stats.dirty_bricks_per_level[..2], [512, 512]);
    }

    #[test]
    fn test_clear_uninitializes() {
        let mut index = ClipmapIndex::default();
        index.rebuild(&grid_row(3));
        index.update_camera([0.0; 3]);
        index.clear();
        assert!(!index.is_initialized());
        assert_eq!(index.chunk_count(), 0);
        assert!(index.levels().iter().all(|level| !level.is_active()));

        let stats = index.update_camera([0.0; 3]);
        assert_eq!(stats.levels_visited, 4);
        assert_eq!(stats.bricks_updated, 4 * 512);
    }
}
