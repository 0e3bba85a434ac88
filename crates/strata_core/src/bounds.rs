//! World-space axis-aligned bounding boxes.

use crate::chunk::{ChunkCoord, CHUNK_SIZE};

/// Axis-aligned bounding box.
///
/// A box is empty when any axis has `max <= min`, so zero-size and inverted
/// boxes never intersect anything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl Aabb {
    /// Creates a new AABB.
    #[must_use]
    pub const fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from its minimum corner and per-axis size.
    #[must_use]
    pub fn from_min_size(min: [f32; 3], size: [f32; 3]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1], min[2] + size[2]],
        }
    }

    /// Creates an AABB from integer world corners.
    #[must_use]
    pub fn from_world_corners(min: [i64; 3], max: [i64; 3]) -> Self {
        Self {
            min: min.map(|v| v as f32),
            max: max.map(|v| v as f32),
        }
    }

    /// Creates the AABB of a chunk.
    #[must_use]
    pub fn for_chunk(coord: ChunkCoord) -> Self {
        let origin = coord.world_origin();
        let size = CHUNK_SIZE as i64;
        Self::from_world_corners(origin, origin.map(|v| v + size))
    }

    /// Returns true if the box encloses no volume.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|a| self.max[a].is_nan() || self.min[a].is_nan() || self.max[a] <= self.min[a])
    }

    /// Returns true if the two boxes overlap with non-zero volume.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (0..3).all(|a| self.min[a] < other.max[a] && other.min[a] < self.max[a])
    }

    /// Returns the overlap of the two boxes, or `None` if they do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let clipped = Self {
            min: [0, 1, 2].map(|a| self.min[a].max(other.min[a])),
            max: [0, 1, 2].map(|a| self.max[a].min(other.max[a])),
        };
        (!self.is_empty() && !other.is_empty() && !clipped.is_empty()).then_some(clipped)
    }

    /// Returns the center of the AABB.
    #[must_use]
    pub fn center(&self) -> [f32; 3] {
        [0, 1, 2].map(|a| (self.min[a] + self.max[a]) * 0.5)
    }

    /// Returns the half-extents of the AABB.
    #[must_use]
    pub fn half_extents(&self) -> [f32; 3] {
        [0, 1, 2].map(|a| (self.max[a] - self.min[a]) * 0.5)
    }
}
