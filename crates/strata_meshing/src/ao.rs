//! Per-corner ambient occlusion.
//!
//! Each face corner samples three voxels in the plane just outside the face:
//! the two edge neighbors along U and V toward the corner, and the diagonal
//! between them. Samples outside the chunk are not solid.

use strata_core::Chunk;

use crate::face::{Face, CORNER_UV};

/// Brightest AO level (no occlusion).
pub const AO_UNOCCLUDED: u8 = 3;

/// AO signature of a face with all four corners unoccluded.
pub const AO_SIGNATURE_OPEN: u8 = 0xFF;

/// AO level from the three corner samples.
///
/// Both edges solid is fully dark regardless of the diagonal.
#[inline]
#[must_use]
pub const fn vertex_ao(edge_a: bool, edge_b: bool, diagonal: bool) -> u8 {
    if edge_a && edge_b {
        return 0;
    }
    AO_UNOCCLUDED - (edge_a as u8 + edge_b as u8 + diagonal as u8)
}

/// AO level of one corner of the `face` of voxel `pos`.
#[must_use]
pub fn corner_ao(chunk: &Chunk, pos: [i32; 3], face: Face, corner: usize) -> u8 {
    let normal = face.normal();
    let [u_axis, v_axis] = face.tangent_axes();
    let [cu, cv] = CORNER_UV[corner];
    let su = if cu == 0 { -1 } else { 1 };
    let sv = if cv == 0 { -1 } else { 1 };

    let plane = [pos[0] + normal[0], pos[1] + normal[1], pos[2] + normal[2]];
    let mut edge_a = plane;
    edge_a[u_axis] += su;
    let mut edge_b = plane;
    edge_b[v_axis] += sv;
    let mut diagonal = edge_a;
    diagonal[v_axis] += sv;

    let solid = |p: [i32; 3]| chunk.is_solid(p[0], p[1], p[2]);
    vertex_ao(solid(edge_a), solid(edge_b), solid(diagonal))
}

/// AO levels of all four corners of a face.
#[must_use]
pub fn face_ao(chunk: &Chunk, pos: [i32; 3], face: Face) -> [u8; 4] {
    [0, 1, 2, 3].map(|corner| corner_ao(chunk, pos, face, corner))
}

/// Packs four corner levels into an 8-bit signature, corner 0 in the low bits.
#[inline]
#[must_use]
pub const fn pack_signature(levels: [u8; 4]) -> u8 {
    (levels[0] & 3) | (levels[1] & 3) << 2 | (levels[2] & 3) << 4 | (levels[3] & 3) << 6
}

/// Inverse of [`pack_signature`].
#[inline]
#[must_use]
pub const fn unpack_signature(signature: u8) -> [u8; 4] {
    [
        signature & 3,
        (signature >> 2) & 3,
        (signature >> 4) & 3,
        (signature >> 6) & 3,
    ]
}
