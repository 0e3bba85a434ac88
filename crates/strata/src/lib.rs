//! # STRATA
//!
//! Camera-centered voxel streaming core.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ camera ─► ClipmapIndex ─► dirty bricks                   │
//! │              │                 │                         │
//! │              ▼                 ▼                         │
//! │        broad phase ─► visible ∩ dirty ─► mesher ─► GPU   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use strata::{Aabb, Chunk, ChunkCoord, ChunkGrid, FramePlanner, StrataConfig, Voxel, VoxelKind};
//!
//! let mut grid = ChunkGrid::new();
//! grid.push(Chunk::filled(ChunkCoord::new(0, 0, 0), Voxel::new(VoxelKind::Stone)));
//!
//! let mut planner = FramePlanner::new(StrataConfig::default());
//! planner.rebuild(&grid);
//!
//! let view = Aabb::new([-64.0; 3], [64.0; 3]);
//! let plan = planner.plan_frame([16.0, 16.0, 16.0], &view);
//! assert_eq!(plan.remesh_chunks, vec![0]);
//!
//! let meshes = planner.mesh_chunks(&grid, &plan.remesh_chunks);
//! assert_eq!(meshes[0].1.quad_count(), 6);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod frame;

pub use config::StrataConfig;
pub use error::{StrataError, StrataResult};
pub use frame::{FramePlan, FramePlanner};

pub use strata_core::{Aabb, Chunk, ChunkCoord, ChunkGrid, Voxel, VoxelKind, CHUNK_SIZE};
pub use strata_meshing::{
    build_chunk_lod_meshes, build_chunk_mesh, build_chunk_mesh_with_stats, ChunkLodMeshes,
    ChunkMeshData, MeshStats, MeshingMode, MeshingOptions, PackedVoxelVertex,
};
pub use strata_spatial::{ChunkQuery, ClipmapConfig, ClipmapIndex, DirtyBrick, SpatialQueryStats};

/// Re-exported units.
pub mod units {
    pub use strata_core as core;
    pub use strata_meshing as meshing;
    pub use strata_spatial as spatial;
}
