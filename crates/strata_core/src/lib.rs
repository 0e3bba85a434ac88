//! # STRATA Core
//!
//! The voxel storage surface consumed by the mesher and the clipmap index.
//!
//! ## Contents
//!
//! - `Voxel`: two-byte value type (kind tag + optional base-color index)
//! - `Chunk`: 32x32x32 dense voxels with an 8x8x8 macro-cell occupancy table
//! - `ChunkGrid`: ordered chunk list; a chunk's index is its position
//! - `Aabb`: world-space bounds
//!
//! ## Example
//!
//! ```rust
//! use strata_core::{Chunk, ChunkCoord, Voxel, VoxelKind};
//!
//! let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
//! chunk.set_voxel(1, 2, 3, Voxel::new(VoxelKind::Stone));
//!
//! assert!(chunk.is_solid(1, 2, 3));
//! assert!(!chunk.is_solid(-1, 2, 3)); // outside the chunk is never solid
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bounds;
pub mod chunk;
pub mod grid;
pub mod voxel;

pub use bounds::Aabb;
pub use chunk::{
    Chunk, ChunkCoord, CHUNK_SIZE, CHUNK_SIZE_I32, CHUNK_VOLUME, MACRO_CELLS_PER_AXIS,
    MACRO_CELL_COUNT, MACRO_CELL_SIZE,
};
pub use grid::ChunkGrid;
pub use voxel::{Voxel, VoxelKind, MAX_BASE_COLOR, NO_BASE_COLOR};
