//! Greedy meshing.
//!
//! ## Algorithm
//!
//! 1. For each face direction (+X, -X, +Y, -Y, +Z, -Z):
//! 2. Sweep the 32 slices perpendicular to the face axis
//! 3. Build a 2D mask of exposed-face keys (material, AO signature, color)
//! 4. Greedily extract maximal same-key rectangles
//! 5. Emit one quad per rectangle, or unit quads if its corners cannot pack

use strata_core::{Chunk, CHUNK_SIZE};

use crate::ao::{face_ao, pack_signature};
use crate::face::Face;
use crate::mask::{MaskKey, QuadRect, SliceMask};
use crate::material::resolve_material;
use crate::mesh::{ChunkMeshData, FaceStyle, MeshStats};

/// Largest coordinate the 5-bit vertex position can hold.
const MAX_PACKED_COORD: usize = 31;

// =============================================================================
// SWEEP
// =============================================================================

/// Meshes `chunk` into merged quads.
pub(crate) fn mesh_greedy(chunk: &Chunk, lod: u8) -> (ChunkMeshData, MeshStats) {
    let mut mesh = ChunkMeshData::new();
    let mut stats = MeshStats::default();

    if chunk.is_empty() {
        return (mesh, stats);
    }

    let mut mask = SliceMask::new();
    for face in Face::ALL {
        for depth in 0..CHUNK_SIZE {
            if build_mask(chunk, face, depth, &mut mask) == 0 {
                continue;
            }
            mask.drain_rects(|rect, key| {
                emit_rect(chunk, face, depth, rect, key, lod, &mut mesh, &mut stats);
            });
        }
    }

    (mesh, stats)
}

/// Voxel coordinate for slice `depth` at mask cell (u, v).
#[inline]
fn slice_voxel(face: Face, depth: usize, u: usize, v: usize) -> [usize; 3] {
    let [u_axis, v_axis] = face.tangent_axes();
    let mut pos = [0; 3];
    pos[face.normal_axis()] = depth;
    pos[u_axis] = u;
    pos[v_axis] = v;
    pos
}

/// Fills `mask` with the exposed faces of slice `depth`.
///
/// Every cell is overwritten. Returns the number of exposed faces.
pub(crate) fn build_mask(chunk: &Chunk, face: Face, depth: usize, mask: &mut SliceMask) -> u32 {
    let normal = face.normal();
    let mut exposed = 0;

    for v in 0..CHUNK_SIZE {
        for u in 0..CHUNK_SIZE {
            let pos = slice_voxel(face, depth, u, v).map(|c| c as i32);
            let neighbor_solid =
                chunk.is_solid(pos[0] + normal[0], pos[1] + normal[1], pos[2] + normal[2]);

            let key = match resolve_material(chunk.voxel_at(pos[0], pos[1], pos[2])) {
                Some((material, color)) if !neighbor_solid => {
                    exposed += 1;
                    MaskKey::new(material, pack_signature(face_ao(chunk, pos, face)), color)
                }
                _ => MaskKey::EMPTY,
            };
            mask.set(u, v, key);
        }
    }

    exposed
}

// =============================================================================
// EMISSION
// =============================================================================

/// Owning voxels of the four corners of `rect`, or `None` if any coordinate
/// does not fit the packed position range.
pub(crate) fn corner_voxels(face: Face, depth: usize, rect: QuadRect) -> Option<[[u8; 3]; 4]> {
    if rect.width == 0 || rect.height == 0 {
        return None;
    }
    let u_max = rect.u + rect.width - 1;
    let v_max = rect.v + rect.height - 1;
    if depth > MAX_PACKED_COORD || u_max > MAX_PACKED_COORD || v_max > MAX_PACKED_COORD {
        return None;
    }
    let corner = |u, v| slice_voxel(face, depth, u, v).map(|c| c as u8);
    Some([
        corner(rect.u, rect.v),
        corner(u_max, rect.v),
        corner(u_max, v_max),
        corner(rect.u, v_max),
    ])
}

#[allow(clippy::too_many_arguments)]
fn emit_rect(
    chunk: &Chunk,
    face: Face,
    depth: usize,
    rect: QuadRect,
    key: MaskKey,
    lod: u8,
    mesh: &mut ChunkMeshData,
    stats: &mut MeshStats,
) {
    let style = FaceStyle {
        material: key.material(),
        base_color: key.base_color(),
        ao: key.ao_levels(),
        lod,
    };

    if let Some(corners) = corner_voxels(face, depth, rect) {
        mesh.push_quad(face, corners, style);
        stats.quads += 1;
        stats.merged_faces += (rect.width * rect.height) as u32;
    } else {
        stats.fallback_rects += 1;
        tracing::trace!(?face, depth, ?rect, "merged quad out of packed range, emitting unmerged");
        emit_unmerged(chunk, face, depth, rect, lod, mesh, stats);
    }
}

/// Emits every cell of `rect` as its own quad with per-voxel AO.
///
/// Cells outside the chunk are skipped.
pub(crate) fn emit_unmerged(
    chunk: &Chunk,
    face: Face,
    depth: usize,
    rect: QuadRect,
    lod: u8,
    mesh: &mut ChunkMeshData,
    stats: &mut MeshStats,
) {
    for v in rect.v..rect.v + rect.height {
        for u in rect.u..rect.u + rect.width {
            let cell = QuadRect {
                u,
                v,
                width: 1,
                height: 1,
            };
            let Some(corners) = corner_voxels(face, depth, cell) else {
                continue;
            };
            let pos = corners[0].map(i32::from);
            let Some((material, base_color)) = resolve_material(chunk.voxel_at(pos[0], pos[1], pos[2]))
            else {
                continue;
            };
            let style = FaceStyle {
                material: material.id(),
                base_color,
                ao: face_ao(chunk, pos, face),
                lod,
            };
            mesh.push_quad(face, corners, style);
            stats.quads += 1;
            stats.merged_faces += 1;
        }
    }
}
