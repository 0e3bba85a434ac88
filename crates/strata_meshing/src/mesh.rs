//! Mesh output buffers.

use crate::face::Face;
use crate::vertex::{PackedVoxelVertex, VertexAttributes};

/// Index pattern of one quad: two CCW triangles over corners 0-1-2 and 0-2-3.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Vertex and index buffers of one chunk, ready for upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkMeshData {
    /// Packed vertices, four per quad.
    pub vertices: Vec<PackedVoxelVertex>,
    /// Triangle list indices, six per quad.
    pub indices: Vec<u32>,
}

/// Per-face attributes shared by all four corners except AO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceStyle {
    pub material: u8,
    pub base_color: u8,
    pub ao: [u8; 4],
    pub lod: u8,
}

impl ChunkMeshData {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad. `corners` are the owning voxels of corners 0..3.
    pub(crate) fn push_quad(&mut self, face: Face, corners: [[u8; 3]; 4], style: FaceStyle) {
        // Quad count is bounded by 6 * 32^3, far below u32::MAX / 4.
        let base = self.vertices.len() as u32;
        for (corner, position) in corners.into_iter().enumerate() {
            self.vertices.push(PackedVoxelVertex::pack(VertexAttributes {
                position,
                face: face.id(),
                corner: corner as u8,
                ao: style.ao[corner],
                material: style.material,
                base_color: style.base_color,
                lod: style.lod,
            }));
        }
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    /// True if the mesh has no quads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of quads.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer as raw bytes.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Work counters of one meshing call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Quads emitted.
    pub quads: u32,
    /// Exposed voxel faces covered by those quads.
    pub merged_faces: u32,
    /// Merged rectangles re-emitted as unit quads.
    pub fallback_rects: u32,
}

impl MeshStats {
    /// Exposed faces per emitted quad. 1.0 for naive output.
    #[must_use]
    pub fn merge_ratio(&self) -> f32 {
        if self.quads == 0 {
            return 0.0;
        }
        self.merged_faces as f32 / self.quads as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_quad_layout() {
        let mut mesh = ChunkMeshData::new();
        let style = FaceStyle {
            material: 1,
            base_color: 0,
            ao: [0, 1, 2, 3],
            lod: 0,
        };
        mesh.push_quad(Face::PosZ, [[0, 0, 0]; 4], style);
        mesh.push_quad(Face::NegZ, [[1, 1, 1]; 4], style);

        assert_eq!(mesh.quad_count(), 2);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert_eq!(mesh.vertex_bytes().len(), 32);
        assert_eq!(mesh.index_bytes().len(), 48);

        for (i, vertex) in mesh.vertices.iter().enumerate() {
            assert_eq!(usize::from(vertex.corner()), i % 4);
            assert_eq!(vertex.ao(), style.ao[i % 4]);
        }
        assert_eq!(mesh.vertices[4].face(), Face::NegZ.id());
    }

    #[test]
    fn test_merge_ratio() {
        assert!(MeshStats::default().merge_ratio().abs() < f32::EPSILON);
        let stats = MeshStats {
            quads: 6,
            merged_faces: 6 * 1024,
            fallback_rects: 0,
        };
        assert!((stats.merge_ratio() - 1024.0).abs() < f32::EPSILON);
    }
}
