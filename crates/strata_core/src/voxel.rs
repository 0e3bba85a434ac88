//! Voxel value type.
//!
//! Two bytes per voxel: a kind tag and a base-color slot. The color slot holds
//! either a 4-bit palette index or [`NO_BASE_COLOR`], meaning the kind's own
//! material is used.

use bytemuck::{Pod, Zeroable};

/// Base-color sentinel: "use the kind's default material".
pub const NO_BASE_COLOR: u8 = 0xFF;

/// Highest valid base-color index (4 bits).
pub const MAX_BASE_COLOR: u8 = 15;

/// Voxel type tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VoxelKind {
    /// Empty space. Never emits faces.
    #[default]
    Empty = 0,
    /// Stone.
    Stone = 1,
    /// Dirt.
    Dirt = 2,
    /// Grass.
    Grass = 3,
    /// Wood.
    Wood = 4,
    /// Flat red solid, used for debug geometry and markers.
    RedSolid = 5,
}

impl VoxelKind {
    /// Every solid kind, in tag order.
    pub const SOLID: [Self; 5] = [
        Self::Stone,
        Self::Dirt,
        Self::Grass,
        Self::Wood,
        Self::RedSolid,
    ];

    /// Decodes a raw tag. Unknown tags decode as `Empty`.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Stone,
            2 => Self::Dirt,
            3 => Self::Grass,
            4 => Self::Wood,
            5 => Self::RedSolid,
            _ => Self::Empty,
        }
    }

    /// Returns true for every kind except `Empty`.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// A single voxel.
///
/// Layout:
/// - Byte 0: kind tag (`VoxelKind`)
/// - Byte 1: base-color index (0-15) or `NO_BASE_COLOR`
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct Voxel {
    kind: u8,
    base_color: u8,
}

impl Voxel {
    /// Empty voxel.
    pub const EMPTY: Self = Self {
        kind: VoxelKind::Empty as u8,
        base_color: NO_BASE_COLOR,
    };

    /// Creates a voxel of the given kind using the kind's default material.
    #[inline]
    #[must_use]
    pub const fn new(kind: VoxelKind) -> Self {
        Self {
            kind: kind as u8,
            base_color: NO_BASE_COLOR,
        }
    }

    /// Creates a voxel carrying a palette base color.
    ///
    /// Indices above [`MAX_BASE_COLOR`] are stored as [`NO_BASE_COLOR`].
    #[inline]
    #[must_use]
    pub const fn with_base_color(kind: VoxelKind, base_color: u8) -> Self {
        Self {
            kind: kind as u8,
            base_color: if base_color <= MAX_BASE_COLOR {
                base_color
            } else {
                NO_BASE_COLOR
            },
        }
    }

    /// Returns the voxel kind.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> VoxelKind {
        VoxelKind::from_raw(self.kind)
    }

    /// Returns true if this voxel occupies space.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.kind().is_solid()
    }

    /// Returns true if this voxel is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.is_solid()
    }

    /// Returns the palette base color, or `None` for the kind's default.
    #[inline]
    #[must_use]
    pub const fn base_color(self) -> Option<u8> {
        if self.base_color <= MAX_BASE_COLOR {
            Some(self.base_color)
        } else {
            None
        }
    }
}

impl Default for Voxel {
    fn default() -> Self {
        Self::EMPTY
    }
}
