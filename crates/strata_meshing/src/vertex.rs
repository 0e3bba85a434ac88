//! Bit-packed 32-bit vertex.
//!
//! ```text
//! bits  0-4   x          local voxel coordinate (0-31)
//! bits  5-9   y
//! bits 10-14  z
//! bits 15-17  face id    (0-5)
//! bits 18-19  corner id  (0-3)
//! bits 20-21  AO level   (0 darkest, 3 brightest)
//! bits 22-25  material id
//! bits 26-29  base color index
//! bits 30-31  LOD level
//! ```
//!
//! The position is the voxel that owns the corner. The lattice corner a shader
//! places the vertex at is `position + CORNER_OFFSETS[face][corner]`.

use bytemuck::{Pod, Zeroable};

use crate::face::CORNER_OFFSETS;

const POS_BITS: u32 = 5;
const POS_MASK: u32 = (1 << POS_BITS) - 1;
const Y_SHIFT: u32 = 5;
const Z_SHIFT: u32 = 10;
const FACE_SHIFT: u32 = 15;
const FACE_MASK: u32 = 0b111;
const CORNER_SHIFT: u32 = 18;
const CORNER_MASK: u32 = 0b11;
const AO_SHIFT: u32 = 20;
const AO_MASK: u32 = 0b11;
const MATERIAL_SHIFT: u32 = 22;
const MATERIAL_MASK: u32 = 0b1111;
const COLOR_SHIFT: u32 = 26;
const COLOR_MASK: u32 = 0b1111;
const LOD_SHIFT: u32 = 30;
const LOD_MASK: u32 = 0b11;

/// Unpacked vertex fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VertexAttributes {
    /// Local voxel position, each axis 0-31.
    pub position: [u8; 3],
    /// Face id, 0-5.
    pub face: u8,
    /// Corner within the quad, 0-3.
    pub corner: u8,
    /// Ambient occlusion level, 0-3.
    pub ao: u8,
    /// Material id, 0-15.
    pub material: u8,
    /// Base color index, 0-15.
    pub base_color: u8,
    /// LOD level, 0-3.
    pub lod: u8,
}

/// One mesh vertex packed into a single `u32`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedVoxelVertex(u32);

impl PackedVoxelVertex {
    /// Packs the attributes.
    ///
    /// Every field must fit its bit width. Debug builds assert it; release
    /// builds mask the excess bits off.
    #[inline]
    #[must_use]
    pub fn pack(attrs: VertexAttributes) -> Self {
        let [x, y, z] = attrs.position.map(u32::from);
        debug_assert!(x <= POS_MASK && y <= POS_MASK && z <= POS_MASK);
        debug_assert!(u32::from(attrs.face) <= 5);
        debug_assert!(u32::from(attrs.corner) <= CORNER_MASK);
        debug_assert!(u32::from(attrs.ao) <= AO_MASK);
        debug_assert!(u32::from(attrs.material) <= MATERIAL_MASK);
        debug_assert!(u32::from(attrs.base_color) <= COLOR_MASK);
        debug_assert!(u32::from(attrs.lod) <= LOD_MASK);

        Self(
            (x & POS_MASK)
                | (y & POS_MASK) << Y_SHIFT
                | (z & POS_MASK) << Z_SHIFT
                | (u32::from(attrs.face) & FACE_MASK) << FACE_SHIFT
                | (u32::from(attrs.corner) & CORNER_MASK) << CORNER_SHIFT
                | (u32::from(attrs.ao) & AO_MASK) << AO_SHIFT
                | (u32::from(attrs.material) & MATERIAL_MASK) << MATERIAL_SHIFT
                | (u32::from(attrs.base_color) & COLOR_MASK) << COLOR_SHIFT
                | (u32::from(attrs.lod) & LOD_MASK) << LOD_SHIFT,
        )
    }

    /// Unpacks every field.
    #[inline]
    #[must_use]
    pub const fn unpack(self) -> VertexAttributes {
        VertexAttributes {
            position: self.position(),
            face: self.face(),
            corner: self.corner(),
            ao: self.ao(),
            material: self.material(),
            base_color: self.base_color(),
            lod: self.lod(),
        }
    }

    /// Wraps a raw packed value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw packed value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Local voxel position.
    #[inline]
    #[must_use]
    pub const fn position(self) -> [u8; 3] {
        [
            (self.0 & POS_MASK) as u8,
            ((self.0 >> Y_SHIFT) & POS_MASK) as u8,
            ((self.0 >> Z_SHIFT) & POS_MASK) as u8,
        ]
    }

    /// Face id.
    #[inline]
    #[must_use]
    pub const fn face(self) -> u8 {
        ((self.0 >> FACE_SHIFT) & FACE_MASK) as u8
    }

    /// Corner id within the quad.
    #[inline]
    #[must_use]
    pub const fn corner(self) -> u8 {
        ((self.0 >> CORNER_SHIFT) & CORNER_MASK) as u8
    }

    /// Ambient occlusion level.
    #[inline]
    #[must_use]
    pub const fn ao(self) -> u8 {
        ((self.0 >> AO_SHIFT) & AO_MASK) as u8
    }

    /// Material id.
    #[inline]
    #[must_use]
    pub const fn material(self) -> u8 {
        ((self.0 >> MATERIAL_SHIFT) & MATERIAL_MASK) as u8
    }

    /// Base color index.
    #[inline]
    #[must_use]
    pub const fn base_color(self) -> u8 {
        ((self.0 >> COLOR_SHIFT) & COLOR_MASK) as u8
    }

    /// LOD level.
    #[inline]
    #[must_use]
    pub const fn lod(self) -> u8 {
        ((self.0 >> LOD_SHIFT) & LOD_MASK) as u8
    }

    /// Lattice corner position in local chunk space (each axis 0-32).
    ///
    /// Returns `None` for a vertex whose face id is not a valid face.
    #[must_use]
    pub fn corner_position(self) -> Option<[u8; 3]> {
        let offsets = CORNER_OFFSETS.get(usize::from(self.face()))?;
        let offset = offsets[usize::from(self.corner())];
        let pos = self.position();
        Some([pos[0] + offset[0], pos[1] + offset[1], pos[2] + offset[2]])
    }
}
