//! Meshing options.

use serde::{Deserialize, Deserializer};

/// Highest LOD level the vertex can carry.
pub const MAX_LOD_LEVEL: u8 = 3;

/// Meshing algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshingMode {
    /// One quad per exposed voxel face.
    Naive,
    /// Maximal same-key rectangles per slice.
    #[default]
    Greedy,
}

/// Options for one meshing call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MeshingOptions {
    /// Algorithm.
    pub mode: MeshingMode,
    /// LOD level packed into every vertex, clamped to 0..=3.
    #[serde(deserialize_with = "deserialize_lod")]
    pub lod_level: u8,
}

impl MeshingOptions {
    /// Options for the given mode at LOD 0.
    #[must_use]
    pub const fn new(mode: MeshingMode) -> Self {
        Self { mode, lod_level: 0 }
    }

    /// Returns a copy with the LOD level set, clamped to the packable range.
    #[must_use]
    pub const fn with_lod_level(mut self, lod_level: u8) -> Self {
        self.lod_level = if lod_level > MAX_LOD_LEVEL {
            MAX_LOD_LEVEL
        } else {
            lod_level
        };
        self
    }

    /// LOD level clamped to the packable range.
    #[inline]
    #[must_use]
    pub const fn effective_lod(&self) -> u8 {
        if self.lod_level > MAX_LOD_LEVEL {
            MAX_LOD_LEVEL
        } else {
            self.lod_level
        }
    }
}

fn deserialize_lod<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, i64::from(MAX_LOD_LEVEL)) as u8)
}
