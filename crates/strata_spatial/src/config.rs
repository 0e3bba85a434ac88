//! Clipmap configuration.
//!
//! Every field is clamped into its valid range. Out-of-range values are never
//! rejected, including negative numbers read from config files.

use serde::{Deserialize, Deserializer};

/// Maximum number of clipmap levels.
pub const MAX_LEVEL_COUNT: usize = 10;

/// Valid level counts.
pub const LEVEL_COUNT_RANGE: (u32, u32) = (1, MAX_LEVEL_COUNT as u32);
/// Valid grid resolutions (voxels per axis per level).
pub const GRID_RESOLUTION_RANGE: (u32, u32) = (16, 512);
/// Valid base voxel sizes.
pub const BASE_VOXEL_SIZE_RANGE: (u32, u32) = (1, 64);
/// Valid brick resolutions (voxels per brick axis).
pub const BRICK_RESOLUTION_RANGE: (u32, u32) = (2, 32);

/// Clipmap index configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipmapConfig {
    /// Number of levels, 1-10.
    #[serde(deserialize_with = "saturating_u32")]
    pub level_count: u32,
    /// Voxels per axis in every level's window, 16-512.
    #[serde(deserialize_with = "saturating_u32")]
    pub grid_resolution: u32,
    /// Voxel size of level 0 in world units, 1-64.
    #[serde(deserialize_with = "saturating_u32")]
    pub base_voxel_size: u32,
    /// Voxels per brick axis, 2-32.
    #[serde(deserialize_with = "saturating_u32")]
    pub brick_resolution: u32,
}

impl Default for ClipmapConfig {
    fn default() -> Self {
        Self {
            level_count: 4,
            grid_resolution: 64,
            base_voxel_size: 1,
            brick_resolution: 8,
        }
    }
}

impl ClipmapConfig {
    /// Returns a copy with every field clamped into range.
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |v: u32, (lo, hi): (u32, u32)| v.clamp(lo, hi);
        Self {
            level_count: clamp(self.level_count, LEVEL_COUNT_RANGE),
            grid_resolution: clamp(self.grid_resolution, GRID_RESOLUTION_RANGE),
            base_voxel_size: clamp(self.base_voxel_size, BASE_VOXEL_SIZE_RANGE),
            brick_resolution: clamp(self.brick_resolution, BRICK_RESOLUTION_RANGE),
        }
    }

    /// Bricks per axis in every level: `ceil(grid / brick)`.
    #[must_use]
    pub fn brick_grid_resolution(&self) -> u32 {
        let clamped = self.clamped();
        clamped.grid_resolution.div_ceil(clamped.brick_resolution)
    }
}

fn saturating_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, i64::from(u32::MAX)) as u32)
}
