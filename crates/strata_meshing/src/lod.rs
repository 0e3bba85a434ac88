//! LOD tiers.

use strata_core::Chunk;

use crate::mesh::ChunkMeshData;
use crate::options::MeshingOptions;

/// Number of LOD tiers per chunk.
pub const LOD_TIER_COUNT: usize = 4;

/// Per-tier meshes of one chunk.
///
/// Tier 0 is full resolution. Tiers 1-3 are reserved and stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkLodMeshes {
    /// Meshes indexed by tier.
    pub tiers: [ChunkMeshData; LOD_TIER_COUNT],
}

impl ChunkLodMeshes {
    /// Mesh of `tier`, if the tier exists.
    #[must_use]
    pub fn tier(&self, tier: usize) -> Option<&ChunkMeshData> {
        self.tiers.get(tier)
    }

    /// Number of tiers holding geometry.
    #[must_use]
    pub fn populated_tiers(&self) -> usize {
        self.tiers.iter().filter(|mesh| !mesh.is_empty()).count()
    }
}

/// Meshes every LOD tier of `chunk`. Only tier 0 is populated.
#[must_use]
pub fn build_chunk_lod_meshes(chunk: &Chunk, options: &MeshingOptions) -> ChunkLodMeshes {
    let mut meshes = ChunkLodMeshes::default();
    meshes.tiers[0] = crate::build_chunk_mesh(chunk, &options.with_lod_level(0));
    meshes
}
