//! Voxel chunk data structures.
//!
//! Chunks are 32x32x32 voxels. The size is capped at 32 per axis so every
//! local coordinate fits the 5-bit position fields of a packed mesh vertex.

use crate::bounds::Aabb;
use crate::voxel::Voxel;

/// Chunk dimension - 32 voxels per axis.
pub const CHUNK_SIZE: usize = 32;

/// Chunk dimension as a signed value, for neighbor arithmetic.
pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;

/// Total voxels per chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Macro-cell edge length in voxels.
pub const MACRO_CELL_SIZE: usize = 4;

/// Macro cells per chunk axis.
pub const MACRO_CELLS_PER_AXIS: usize = CHUNK_SIZE / MACRO_CELL_SIZE;

/// Total macro cells per chunk.
pub const MACRO_CELL_COUNT: usize =
    MACRO_CELLS_PER_AXIS * MACRO_CELLS_PER_AXIS * MACRO_CELLS_PER_AXIS;

/// Chunk coordinate in chunk units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Converts a world voxel position to the chunk containing it.
    #[inline]
    #[must_use]
    pub const fn from_world_pos(x: i64, y: i64, z: i64) -> Self {
        let size = CHUNK_SIZE as i64;
        Self::new(
            x.div_euclid(size) as i32,
            y.div_euclid(size) as i32,
            z.div_euclid(size) as i32,
        )
    }

    /// Returns the world position of the chunk's minimum corner.
    #[inline]
    #[must_use]
    pub const fn world_origin(self) -> [i64; 3] {
        let size = CHUNK_SIZE as i64;
        [
            self.x as i64 * size,
            self.y as i64 * size,
            self.z as i64 * size,
        ]
    }
}

/// A chunk of voxels - 32x32x32 = 32,768 voxels.
///
/// Voxels are stored in Z-Y-X order. Every write keeps the solid count and
/// the per-macro-cell counts current, so emptiness queries never scan.
#[derive(Clone)]
pub struct Chunk {
    /// The coordinate of this chunk in chunk space.
    coord: ChunkCoord,

    /// Layout: voxels[z * CHUNK_SIZE * CHUNK_SIZE + y * CHUNK_SIZE + x]
    voxels: Box<[Voxel; CHUNK_VOLUME]>,

    /// Solid voxels per 4x4x4 macro cell (max 64).
    macro_cells: [u8; MACRO_CELL_COUNT],

    /// Number of solid voxels.
    solid_count: u32,
}

impl Chunk {
    /// Creates a new empty chunk at the given coordinate.
    ///
    /// Note: This allocates memory. Only call during loading, never in hot path.
    #[must_use]
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            voxels: Box::new([Voxel::EMPTY; CHUNK_VOLUME]),
            macro_cells: [0; MACRO_CELL_COUNT],
            solid_count: 0,
        }
    }

    /// Creates a chunk with every voxel set to `voxel`.
    #[must_use]
    pub fn filled(coord: ChunkCoord, voxel: Voxel) -> Self {
        let mut chunk = Self::new(coord);
        chunk.fill(voxel);
        chunk
    }

    /// Returns the chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Returns true if the chunk holds no solid voxel.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    /// Returns true if every voxel is solid.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.solid_count == CHUNK_VOLUME as u32
    }

    /// Returns the number of solid voxels.
    #[inline]
    #[must_use]
    pub const fn solid_count(&self) -> u32 {
        self.solid_count
    }

    #[inline]
    const fn index(x: usize, y: usize, z: usize) -> usize {
        z * CHUNK_SIZE * CHUNK_SIZE + y * CHUNK_SIZE + x
    }

    #[inline]
    const fn macro_index(x: usize, y: usize, z: usize) -> usize {
        let (mx, my, mz) = (x / MACRO_CELL_SIZE, y / MACRO_CELL_SIZE, z / MACRO_CELL_SIZE);
        mz * MACRO_CELLS_PER_AXIS * MACRO_CELLS_PER_AXIS + my * MACRO_CELLS_PER_AXIS + mx
    }

    #[inline]
    fn local(v: i32) -> Option<usize> {
        usize::try_from(v).ok().filter(|&v| v < CHUNK_SIZE)
    }

    #[inline]
    fn local_index(x: i32, y: i32, z: i32) -> Option<usize> {
        Some(Self::index(Self::local(x)?, Self::local(y)?, Self::local(z)?))
    }

    /// Gets the voxel at a local position.
    ///
    /// Coordinates outside `[0, 32)` return [`Voxel::EMPTY`].
    #[inline]
    #[must_use]
    pub fn voxel_at(&self, x: i32, y: i32, z: i32) -> Voxel {
        Self::local_index(x, y, z).map_or(Voxel::EMPTY, |idx| self.voxels[idx])
    }

    /// Returns true if the voxel at a local position is solid.
    ///
    /// Outside the chunk is never solid.
    #[inline]
    #[must_use]
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.voxel_at(x, y, z).is_solid()
    }

    /// Sets the voxel at a local position.
    ///
    /// Returns false (and writes nothing) when the position is outside the chunk.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
        let (Some(lx), Some(ly), Some(lz)) = (Self::local(x), Self::local(y), Self::local(z))
        else {
            return false;
        };

        let idx = Self::index(lx, ly, lz);
        let old = self.voxels[idx];
        let cell = Self::macro_index(lx, ly, lz);

        if old.is_solid() && !voxel.is_solid() {
            self.solid_count -= 1;
            self.macro_cells[cell] -= 1;
        } else if !old.is_solid() && voxel.is_solid() {
            self.solid_count += 1;
            self.macro_cells[cell] += 1;
        }

        self.voxels[idx] = voxel;
        true
    }

    /// Sets every voxel in the chunk.
    pub fn fill(&mut self, voxel: Voxel) {
        self.voxels.fill(voxel);
        if voxel.is_solid() {
            self.solid_count = CHUNK_VOLUME as u32;
            self.macro_cells = [(MACRO_CELL_SIZE * MACRO_CELL_SIZE * MACRO_CELL_SIZE) as u8;
                MACRO_CELL_COUNT];
        } else {
            self.solid_count = 0;
            self.macro_cells = [0; MACRO_CELL_COUNT];
        }
    }

    /// Returns the number of solid voxels in a macro cell.
    ///
    /// Out-of-range cells report zero.
    #[must_use]
    pub fn macro_cell_solid_count(&self, mx: usize, my: usize, mz: usize) -> u32 {
        if mx < MACRO_CELLS_PER_AXIS && my < MACRO_CELLS_PER_AXIS && mz < MACRO_CELLS_PER_AXIS {
            u32::from(self.macro_cells[Self::macro_index(
                mx * MACRO_CELL_SIZE,
                my * MACRO_CELL_SIZE,
                mz * MACRO_CELL_SIZE,
            )])
        } else {
            0
        }
    }

    /// Returns true if a macro cell holds no solid voxel.
    #[inline]
    #[must_use]
    pub fn is_macro_cell_empty(&self, mx: usize, my: usize, mz: usize) -> bool {
        self.macro_cell_solid_count(mx, my, mz) == 0
    }

    /// Returns the world position of the chunk's minimum corner (`coord * 32`).
    #[inline]
    #[must_use]
    pub const fn world_origin(&self) -> [i64; 3] {
        self.coord.world_origin()
    }

    /// Returns the chunk's world-space bounding box.
    #[must_use]
    pub fn world_bounds(&self) -> Aabb {
        Aabb::for_chunk(self.coord)
    }

    /// Returns the voxel data as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.voxels[..])
    }
}
