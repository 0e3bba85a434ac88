//! Voxel to material mapping.

use strata_core::{Voxel, VoxelKind};

/// Material id packed into every vertex (4 bits).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialId {
    /// Stone.
    Stone = 1,
    /// Dirt.
    Dirt = 2,
    /// Grass.
    Grass = 3,
    /// Wood.
    Wood = 4,
    /// Flat red.
    RedSolid = 5,
    /// Palette material; the vertex base color selects the color.
    Palette = 15,
}

impl MaterialId {
    /// Raw id as packed into the vertex.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// Resolves the material and base color a voxel's faces are drawn with.
///
/// Returns `None` for empty voxels. A voxel carrying a palette color maps to
/// [`MaterialId::Palette`] with that color; anything else uses its kind's
/// material and color 0.
#[must_use]
pub const fn resolve_material(voxel: Voxel) -> Option<(MaterialId, u8)> {
    if let Some(color) = voxel.base_color() {
        if voxel.is_solid() {
            return Some((MaterialId::Palette, color));
        }
    }
    let material = match voxel.kind() {
        VoxelKind::Empty => return None,
        VoxelKind::Stone => MaterialId::Stone,
        VoxelKind::Dirt => MaterialId::Dirt,
        VoxelKind::Grass => MaterialId::Grass,
        VoxelKind::Wood => MaterialId::Wood,
        VoxelKind::RedSolid => MaterialId::RedSolid,
    };
    Some((material, 0))
}
