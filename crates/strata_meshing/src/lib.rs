//! # STRATA Meshing
//!
//! Turns a 32x32x32 chunk into packed vertex and index buffers.
//!
//! ## Pipeline
//!
//! ```text
//! Chunk → exposed faces → (naive | greedy) → PackedVoxelVertex + u32 indices
//!              ↓
//!        per-corner AO, material, base color
//! ```
//!
//! ## MANDATE
//!
//! - Same chunk and options in, byte-identical buffers out
//! - Faces between two solid voxels are never emitted
//! - Greedy output never exceeds naive output
//! - No state survives a call

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod ao;
pub mod face;
mod greedy;
pub mod lod;
pub mod mask;
pub mod material;
pub mod mesh;
mod naive;
pub mod options;
pub mod vertex;

pub use face::Face;
pub use lod::{build_chunk_lod_meshes, ChunkLodMeshes, LOD_TIER_COUNT};
pub use material::{resolve_material, MaterialId};
pub use mesh::{ChunkMeshData, MeshStats};
pub use options::{MeshingMode, MeshingOptions};
pub use vertex::{PackedVoxelVertex, VertexAttributes};

use strata_core::Chunk;

/// Meshes `chunk` with the selected algorithm.
#[must_use]
pub fn build_chunk_mesh(chunk: &Chunk, options: &MeshingOptions) -> ChunkMeshData {
    build_chunk_mesh_with_stats(chunk, options).0
}

/// Meshes `chunk` and reports the work done.
#[must_use]
pub fn build_chunk_mesh_with_stats(
    chunk: &Chunk,
    options: &MeshingOptions,
) -> (ChunkMeshData, MeshStats) {
    let lod = options.effective_lod();
    let (mesh, stats) = match options.mode {
        MeshingMode::Naive => naive::mesh_naive(chunk, lod),
        MeshingMode::Greedy => greedy::mesh_greedy(chunk, lod),
    };

    tracing::trace!(
        coord = ?chunk.coord(),
        mode = ?options.mode,
        quads = stats.quads,
        faces = stats.merged_faces,
        fallback = stats.fallback_rects,
        "chunk meshed"
    );

    (mesh, stats)
}
