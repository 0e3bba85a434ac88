//! One clipmap level: a camera-centered window of bricks at a fixed voxel size.
//!
//! Brick storage is a ring. A brick at coordinate `b` lives in slot
//! `b.rem_euclid(n)` per axis, `n` being the brick-grid resolution. Which world
//! brick occupies a slot is implied by `origin_brick`, so sliding the window
//! only re-flags the slots that changed occupant and never moves data.

use strata_core::Aabb;

use crate::config::ClipmapConfig;
use crate::snap::{clamp_coord, div_floor, snap_down};
use crate::stats::DirtyBrick;

/// Outcome of sliding one level to a new camera cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LevelUpdate {
    /// The level did any work.
    pub visited: bool,
    /// Entering slabs marked.
    pub slabs: u32,
    /// The jump covered a whole window width.
    pub full_invalidation: bool,
}

/// A single resolution tier.
#[derive(Debug, Clone)]
pub struct ClipmapLevel {
    index: usize,
    voxel_size: i64,
    grid_resolution: i64,
    brick_resolution: i64,
    brick_grid: usize,
    camera_cell: Option<[i64; 3]>,
    origin_brick: [i64; 3],
    versions: Vec<u64>,
    dirty: Vec<bool>,
    dirty_count: u32,
    force_full: bool,
}

impl ClipmapLevel {
    /// Creates the uninitialized level `index` for `config`.
    #[must_use]
    pub fn new(index: usize, config: &ClipmapConfig) -> Self {
        let config = config.clamped();
        let brick_grid = config.brick_grid_resolution() as usize;
        let slots = brick_grid * brick_grid * brick_grid;
        Self {
            index,
            voxel_size: i64::from(config.base_voxel_size) << index,
            grid_resolution: i64::from(config.grid_resolution),
            brick_resolution: i64::from(config.brick_resolution),
            brick_grid,
            camera_cell: None,
            origin_brick: [0; 3],
            versions: vec![0; slots],
            dirty: vec![false; slots],
            dirty_count: 0,
            force_full: false,
        }
    }

    /// Level index, 0 being the finest.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Voxel size in world units.
    #[must_use]
    pub const fn voxel_size(&self) -> i64 {
        self.voxel_size
    }

    /// Voxels per window axis.
    #[must_use]
    pub const fn grid_resolution(&self) -> i64 {
        self.grid_resolution
    }

    /// World-space edge length of one brick.
    #[must_use]
    pub const fn brick_span(&self) -> i64 {
        self.voxel_size * self.brick_resolution
    }

    /// Bricks per window axis.
    #[must_use]
    pub const fn brick_grid_resolution(&self) -> usize {
        self.brick_grid
    }

    /// True once the level has seen a camera position.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.camera_cell.is_some()
    }

    /// Camera cell snapped to this level's voxel size.
    #[must_use]
    pub const fn camera_cell(&self) -> Option<[i64; 3]> {
        self.camera_cell
    }

    /// Minimum brick coordinate of the window.
    #[must_use]
    pub const fn origin_brick(&self) -> [i64; 3] {
        self.origin_brick
    }

    /// World-space minimum corner of the window.
    #[must_use]
    pub fn origin(&self) -> [i64; 3] {
        let span = self.brick_span();
        self.origin_brick.map(|b| b * span)
    }

    /// World bounds of the window, `None` while uninitialized.
    #[must_use]
    pub fn active_bounds(&self) -> Option<Aabb> {
        if !self.is_active() {
            return None;
        }
        let origin = self.origin();
        let extent = self.brick_grid as i64 * self.brick_span();
        Some(Aabb::from_world_corners(origin, origin.map(|o| o + extent)))
    }

    /// Bricks held by the window, zero while uninitialized.
    #[must_use]
    pub fn resident_bricks(&self) -> u32 {
        if self.is_active() {
            self.versions.len() as u32
        } else {
            0
        }
    }

    /// Bricks flagged and waiting for the next drain.
    #[must_use]
    pub const fn pending_dirty(&self) -> u32 {
        self.dirty_count
    }

    /// World bounds of brick `brick`.
    #[must_use]
    pub fn brick_bounds(&self, brick: [i64; 3]) -> Aabb {
        let span = self.brick_span();
        Aabb::from_world_corners(brick.map(|b| b * span), brick.map(|b| (b + 1) * span))
    }

    /// Brick containing the world position, `None` if any component is not
    /// finite.
    #[must_use]
    pub fn brick_at(&self, position: [f32; 3]) -> Option<[i64; 3]> {
        if !position.iter().all(|p| p.is_finite()) {
            return None;
        }
        let span = self.brick_span() as f64;
        Some(position.map(|p| (clamp_coord(f64::from(p)) / span).floor() as i64))
    }

    /// True if `brick` lies inside the current window.
    #[must_use]
    pub fn contains_brick(&self, brick: [i64; 3]) -> bool {
        let n = self.brick_grid as i64;
        self.is_active()
            && (0..3).all(|a| brick[a] >= self.origin_brick[a] && brick[a] < self.origin_brick[a] + n)
    }

    /// Version of a resident brick.
    #[must_use]
    pub fn brick_version(&self, brick: [i64; 3]) -> Option<u64> {
        self.contains_brick(brick)
            .then(|| self.versions[self.slot_index(brick)])
    }

    // =========================================================================
    // RING ADDRESSING
    // =========================================================================

    fn slot_index(&self, brick: [i64; 3]) -> usize {
        let n = self.brick_grid as i64;
        let [x, y, z] = brick.map(|b| b.rem_euclid(n) as usize);
        (z * self.brick_grid + y) * self.brick_grid + x
    }

    /// World brick currently held by slot `slot`.
    fn slot_occupant(&self, slot: usize) -> [i64; 3] {
        let n = self.brick_grid;
        let s = [slot % n, (slot / n) % n, slot / (n * n)];
        let n = n as i64;
        [0, 1, 2].map(|a| {
            let origin = self.origin_brick[a];
            origin + (s[a] as i64 - origin).rem_euclid(n)
        })
    }

    // =========================================================================
    // CAMERA MOTION
    // =========================================================================

    /// Slides the window to follow the camera at `cell`.
    ///
    /// Does nothing while the snapped cell is unchanged, unless the level has
    /// been forced dirty by a reset.
    pub(crate) fn update(&mut self, cell: [i64; 3]) -> LevelUpdate {
        let snapped = cell.map(|c| snap_down(c, self.voxel_size));
        if self.camera_cell == Some(snapped) && !self.force_full {
            return LevelUpdate::default();
        }

        let half_extent = (self.grid_resolution / 2) * self.voxel_size;
        let span = self.brick_span();
        let new_origin = snapped.map(|c| div_floor(c - half_extent, span));
        let previous = self.camera_cell.map(|_| self.origin_brick);

        self.camera_cell = Some(snapped);
        self.origin_brick = new_origin;

        let mut result = LevelUpdate {
            visited: true,
            ..LevelUpdate::default()
        };

        let Some(old_origin) = previous.filter(|_| !self.force_full) else {
            self.force_full = false;
            self.mark_all();
            return result;
        };

        let n = self.brick_grid as i64;
        let delta = [0, 1, 2].map(|a| new_origin[a] - old_origin[a]);
        if delta.iter().any(|d| d.abs() >= n) {
            tracing::debug!(
                level = self.index,
                ?delta,
                "camera jumped a full window, invalidating level"
            );
            result.full_invalidation = true;
            self.mark_all();
            return result;
        }

        for axis in 0..3 {
            let d = delta[axis];
            let entering = if d > 0 {
                new_origin[axis] + n - d..new_origin[axis] + n
            } else {
                new_origin[axis]..new_origin[axis] - d
            };
            for coord in entering {
                self.mark_slab(axis, coord);
                result.slabs += 1;
            }
        }

        result
    }

    /// Flags every brick of the window.
    fn mark_all(&mut self) {
        self.dirty.fill(true);
        self.dirty_count = self.dirty.len() as u32;
    }

    /// Flags the plane of bricks at `coord` along `axis`, spanning the window
    /// on the two other axes.
    fn mark_slab(&mut self, axis: usize, coord: i64) {
        let a1 = (axis + 1) % 3;
        let a2 = (axis + 2) % 3;
        let n = self.brick_grid as i64;
        let mut brick = [0; 3];
        brick[axis] = coord;
        for i in 0..n {
            brick[a1] = self.origin_brick[a1] + i;
            for j in 0..n {
                brick[a2] = self.origin_brick[a2] + j;
                self.mark_brick(brick);
            }
        }
    }

    /// Flags one brick. Returns false if it was already flagged.
    fn mark_brick(&mut self, brick: [i64; 3]) -> bool {
        let slot = self.slot_index(brick);
        if self.dirty[slot] {
            return false;
        }
        self.dirty[slot] = true;
        self.dirty_count += 1;
        true
    }

    /// Flags every resident brick overlapping `bounds`. Returns the number
    /// newly flagged.
    pub(crate) fn invalidate_bounds(&mut self, bounds: &Aabb) -> u32 {
        if !self.is_active() || bounds.is_empty() {
            return 0;
        }
        let span = self.brick_span() as f64;
        let n = self.brick_grid as i64;
        let mut lo = [0; 3];
        let mut hi = [0; 3];
        for a in 0..3 {
            let first = (clamp_coord(f64::from(bounds.min[a])) / span).floor() as i64;
            let last = (clamp_coord(f64::from(bounds.max[a])) / span).ceil() as i64 - 1;
            lo[a] = first.max(self.origin_brick[a]);
            hi[a] = last.min(self.origin_brick[a] + n - 1);
            if lo[a] > hi[a] {
                return 0;
            }
        }

        let mut flagged = 0;
        for z in lo[2]..=hi[2] {
            for y in lo[1]..=hi[1] {
                for x in lo[0]..=hi[0] {
                    if self.mark_brick([x, y, z]) {
                        flagged += 1;
                    }
                }
            }
        }
        flagged
    }

    /// Bumps the version of every flagged brick, clears the flags and appends
    /// the bricks to `out` in slot order. Returns the number drained.
    pub(crate) fn drain(&mut self, out: &mut Vec<DirtyBrick>) -> u32 {
        if self.dirty_count == 0 {
            return 0;
        }
        let mut drained = 0;
        for slot in 0..self.dirty.len() {
            if !self.dirty[slot] {
                continue;
            }
            self.dirty[slot] = false;
            self.versions[slot] += 1;
            let brick = self.slot_occupant(slot);
            out.push(DirtyBrick {
                level: self.index,
                brick,
                version: self.versions[slot],
                bounds: self.brick_bounds(brick),
            });
            drained += 1;
        }
        self.dirty_count = 0;
        drained
    }

    /// Zeroes every version and forces a full mark on the next update.
    /// The camera cell and window are kept.
    pub(crate) fn reset_versions(&mut self) {
        self.versions.fill(0);
        self.dirty.fill(false);
        self.dirty_count = 0;
        self.force_full = true;
    }

    /// Returns the level to the uninitialized state.
    pub(crate) fn clear(&mut self) {
        self.reset_versions();
        self.force_full = false;
        self.camera_cell = None;
        self.origin_brick = [0; 3];
    }
}
