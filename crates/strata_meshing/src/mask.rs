//! 2D slice masks for greedy merging.

use strata_core::CHUNK_SIZE;

use crate::ao::unpack_signature;
use crate::material::MaterialId;

/// 16-bit merge key of one exposed face.
///
/// ```text
/// bits  0-3   base color
/// bits  4-11  AO signature (2 bits per corner, corner 0 lowest)
/// bits 12-15  material id
/// ```
///
/// Material ids start at 1, so no exposed face encodes to [`MaskKey::EMPTY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaskKey(u16);

impl MaskKey {
    /// No exposed face.
    pub const EMPTY: Self = Self(0);

    /// Builds the key of an exposed face.
    #[inline]
    #[must_use]
    pub const fn new(material: MaterialId, ao_signature: u8, base_color: u8) -> Self {
        Self(
            (base_color as u16 & 0xF)
                | (ao_signature as u16) << 4
                | (material.id() as u16 & 0xF) << 12,
        )
    }

    /// True for the "no face" key.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw 16-bit key.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Material id.
    #[inline]
    #[must_use]
    pub const fn material(self) -> u8 {
        (self.0 >> 12) as u8
    }

    /// AO signature.
    #[inline]
    #[must_use]
    pub const fn ao_signature(self) -> u8 {
        (self.0 >> 4) as u8
    }

    /// Per-corner AO levels.
    #[inline]
    #[must_use]
    pub const fn ao_levels(self) -> [u8; 4] {
        unpack_signature(self.ao_signature())
    }

    /// Base color.
    #[inline]
    #[must_use]
    pub const fn base_color(self) -> u8 {
        (self.0 & 0xF) as u8
    }
}

/// Rectangle of mask cells, `u`/`v` along the face's tangent axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadRect {
    /// First cell along U.
    pub u: usize,
    /// First cell along V.
    pub v: usize,
    /// Cells along U.
    pub width: usize,
    /// Cells along V.
    pub height: usize,
}

/// One 32x32 slice of face keys, indexed `[v][u]`.
#[derive(Clone)]
pub struct SliceMask {
    cells: [[MaskKey; CHUNK_SIZE]; CHUNK_SIZE],
}

impl Default for SliceMask {
    fn default() -> Self {
        Self::new()
    }
}

impl SliceMask {
    /// Creates a mask with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[MaskKey::EMPTY; CHUNK_SIZE]; CHUNK_SIZE],
        }
    }

    /// Key at (u, v).
    #[inline]
    #[must_use]
    pub fn get(&self, u: usize, v: usize) -> MaskKey {
        self.cells[v][u]
    }

    /// Sets the key at (u, v).
    #[inline]
    pub fn set(&mut self, u: usize, v: usize, key: MaskKey) {
        self.cells[v][u] = key;
    }

    /// Extracts greedy rectangles in scan order, clearing the mask.
    ///
    /// Row-major from (0, 0). Each unvisited key grows along U while the key
    /// matches, then along V while the entire next row span matches.
    pub fn drain_rects(&mut self, mut emit: impl FnMut(QuadRect, MaskKey)) {
        for v in 0..CHUNK_SIZE {
            let mut u = 0;
            while u < CHUNK_SIZE {
                let key = self.cells[v][u];
                if key.is_empty() {
                    u += 1;
                    continue;
                }

                let mut width = 1;
                while u + width < CHUNK_SIZE && self.cells[v][u + width] == key {
                    width += 1;
                }

                let mut height = 1;
                while v + height < CHUNK_SIZE
                    && self.cells[v + height][u..u + width]
                        .iter()
                        .all(|&cell| cell == key)
                {
                    height += 1;
                }

                for row in &mut self.cells[v..v + height] {
                    row[u..u + width].fill(MaskKey::EMPTY);
                }

                emit(
                    QuadRect {
                        u,
                        v,
                        width,
                        height,
                    },
                    key,
                );
                u += width;
            }
        }
    }
}
