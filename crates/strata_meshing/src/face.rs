//! Face directions and their geometry lookup tables.
//!
//! Every table is indexed by face id. For each face the tangent axes satisfy
//! `U x V = normal`, so corners 0..3 at (u, v) = (0,0), (1,0), (1,1), (0,1)
//! wind counter-clockwise when seen from outside the voxel.

/// One of the six axis-aligned face directions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +X face.
    PosX = 0,
    /// -X face.
    NegX = 1,
    /// +Y face.
    PosY = 2,
    /// -Y face.
    NegY = 3,
    /// +Z face.
    PosZ = 4,
    /// -Z face.
    NegZ = 5,
}

/// Number of face directions.
pub const FACE_COUNT: usize = 6;

/// Axis the face normal points along.
pub const FACE_NORMAL_AXIS: [usize; FACE_COUNT] = [0, 0, 1, 1, 2, 2];

/// Unit normal per face.
pub const FACE_NORMALS: [[i32; 3]; FACE_COUNT] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

/// Tangent axes `[U, V]` per face.
pub const FACE_TANGENT_AXES: [[usize; 2]; FACE_COUNT] = [
    [1, 2], // +X: Y x Z = +X
    [2, 1], // -X: Z x Y = -X
    [2, 0], // +Y: Z x X = +Y
    [0, 2], // -Y: X x Z = -Y
    [0, 1], // +Z: X x Y = +Z
    [1, 0], // -Z: Y x X = -Z
];

/// Corner position within a quad, in (u, v) steps.
pub const CORNER_UV: [[u8; 2]; 4] = [[0, 0], [1, 0], [1, 1], [0, 1]];

/// Lattice offset of each quad corner from its voxel's minimum corner.
pub const CORNER_OFFSETS: [[[u8; 3]; 4]; FACE_COUNT] = [
    [[1, 0, 0], [1, 1, 0], [1, 1, 1], [1, 0, 1]],
    [[0, 0, 0], [0, 0, 1], [0, 1, 1], [0, 1, 0]],
    [[0, 1, 0], [0, 1, 1], [1, 1, 1], [1, 1, 0]],
    [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]],
    [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]],
    [[0, 0, 0], [0, 1, 0], [1, 1, 0], [1, 0, 0]],
];

impl Face {
    /// All faces in id order. Meshing visits faces in this order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Returns the face id (0-5).
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Decodes a face id. Ids above 5 are invalid.
    #[inline]
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::PosX),
            1 => Some(Self::NegX),
            2 => Some(Self::PosY),
            3 => Some(Self::NegY),
            4 => Some(Self::PosZ),
            5 => Some(Self::NegZ),
            _ => None,
        }
    }

    /// Axis of the face normal.
    #[inline]
    #[must_use]
    pub const fn normal_axis(self) -> usize {
        FACE_NORMAL_AXIS[self as usize]
    }

    /// Unit normal.
    #[inline]
    #[must_use]
    pub const fn normal(self) -> [i32; 3] {
        FACE_NORMALS[self as usize]
    }

    /// Tangent axes `[U, V]`.
    #[inline]
    #[must_use]
    pub const fn tangent_axes(self) -> [usize; 2] {
        FACE_TANGENT_AXES[self as usize]
    }

    /// Lattice offset of `corner` (0-3) from the owning voxel's minimum corner.
    #[inline]
    #[must_use]
    pub const fn corner_offset(self, corner: usize) -> [u8; 3] {
        CORNER_OFFSETS[self as usize][corner]
    }
}
