//! Reference mesher: one quad per exposed voxel face.

use strata_core::{Chunk, MACRO_CELLS_PER_AXIS, MACRO_CELL_SIZE};

use crate::ao::face_ao;
use crate::face::Face;
use crate::material::resolve_material;
use crate::mesh::{ChunkMeshData, FaceStyle, MeshStats};

/// Meshes `chunk` face by face.
///
/// Visits macro cells in Z-Y-X order, skipping empty ones, then the voxels of
/// each cell in Z-Y-X order, then faces in id order.
pub(crate) fn mesh_naive(chunk: &Chunk, lod: u8) -> (ChunkMeshData, MeshStats) {
    let mut mesh = ChunkMeshData::new();
    let mut stats = MeshStats::default();

    if chunk.is_empty() {
        return (mesh, stats);
    }

    for mz in 0..MACRO_CELLS_PER_AXIS {
        for my in 0..MACRO_CELLS_PER_AXIS {
            for mx in 0..MACRO_CELLS_PER_AXIS {
                if chunk.is_macro_cell_empty(mx, my, mz) {
                    continue;
                }
                let base = [mx, my, mz].map(|m| (m * MACRO_CELL_SIZE) as i32);
                for dz in 0..MACRO_CELL_SIZE as i32 {
                    for dy in 0..MACRO_CELL_SIZE as i32 {
                        for dx in 0..MACRO_CELL_SIZE as i32 {
                            let pos = [base[0] + dx, base[1] + dy, base[2] + dz];
                            mesh_voxel(chunk, pos, lod, &mut mesh, &mut stats);
                        }
                    }
                }
            }
        }
    }

    (mesh, stats)
}

fn mesh_voxel(
    chunk: &Chunk,
    pos: [i32; 3],
    lod: u8,
    mesh: &mut ChunkMeshData,
    stats: &mut MeshStats,
) {
    let Some((material, base_color)) = resolve_material(chunk.voxel_at(pos[0], pos[1], pos[2]))
    else {
        return;
    };
    let local = pos.map(|p| p as u8);

    for face in Face::ALL {
        let n = face.normal();
        if chunk.is_solid(pos[0] + n[0], pos[1] + n[1], pos[2] + n[2]) {
            continue;
        }
        let style = FaceStyle {
            material: material.id(),
            base_color,
            ao: face_ao(chunk, pos, face),
            lod,
        };
        mesh.push_quad(face, [local; 4], style);
        stats.quads += 1;
        stats.merged_faces += 1;
    }
}
