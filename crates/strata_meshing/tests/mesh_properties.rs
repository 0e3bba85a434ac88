//! # Mesh Property Tests
//!
//! Checks the mesher's surface guarantees on hand-built and seeded random
//! chunks: culling, merge bounds, determinism and attribute fidelity.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{Chunk, ChunkCoord, Voxel, VoxelKind, CHUNK_SIZE_I32};
use strata_meshing::{
    build_chunk_mesh, build_chunk_mesh_with_stats, resolve_material, ChunkMeshData, Face,
    MeshingMode, MeshingOptions,
};

fn naive() -> MeshingOptions {
    MeshingOptions::new(MeshingMode::Naive)
}

fn greedy() -> MeshingOptions {
    MeshingOptions::new(MeshingMode::Greedy)
}

fn solid_chunk() -> Chunk {
    Chunk::filled(ChunkCoord::new(0, 0, 0), Voxel::new(VoxelKind::Stone))
}

/// Sparse random chunk, deterministic per seed.
fn random_chunk(seed: u64, fill: f64) -> Chunk {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
    for z in 0..CHUNK_SIZE_I32 {
        for y in 0..CHUNK_SIZE_I32 {
            for x in 0..CHUNK_SIZE_I32 {
                if !rng.gen_bool(fill) {
                    continue;
                }
                let kind = VoxelKind::SOLID[rng.gen_range(0..VoxelKind::SOLID.len())];
                let voxel = if rng.gen_bool(0.2) {
                    Voxel::with_base_color(kind, rng.gen_range(0..16))
                } else {
                    Voxel::new(kind)
                };
                chunk.set_voxel(x, y, z, voxel);
            }
        }
    }
    chunk
}

/// Every (voxel, face) cell covered by the mesh's quads.
fn covered_faces(mesh: &ChunkMeshData) -> BTreeSet<([u8; 3], u8)> {
    let mut cells = BTreeSet::new();
    for quad in mesh.vertices.chunks_exact(4) {
        let face = quad[0].face();
        let a = quad[0].position();
        let b = quad[2].position();
        for x in a[0].min(b[0])..=a[0].max(b[0]) {
            for y in a[1].min(b[1])..=a[1].max(b[1]) {
                for z in a[2].min(b[2])..=a[2].max(b[2]) {
                    assert!(cells.insert(([x, y, z], face)), "face covered twice");
                }
            }
        }
    }
    cells
}

#[test]
fn test_empty_chunk_emits_nothing() {
    let chunk = Chunk::new(ChunkCoord::new(3, -1, 7));
    for options in [naive(), greedy()] {
        let mesh = build_chunk_mesh(&chunk, &options);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.indices.len(), 0);
    }
}

#[test]
fn test_single_voxel_modes_match() {
    for pos in [[0, 0, 0], [31, 31, 31], [7, 20, 13]] {
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
        chunk.set_voxel(pos[0], pos[1], pos[2], Voxel::new(VoxelKind::Grass));

        let a = build_chunk_mesh(&chunk, &naive());
        let b = build_chunk_mesh(&chunk, &greedy());
        assert_eq!(a.vertex_count(), 24);
        assert_eq!(a.indices.len(), 36);
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());
    }
}

#[test]
fn test_solid_chunk_collapses_to_six_quads() {
    let chunk = solid_chunk();
    let mesh = build_chunk_mesh(&chunk, &greedy());
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices.len(), 36);

    let faces: BTreeSet<u8> = mesh.vertices.iter().map(|v| v.face()).collect();
    assert_eq!(faces.len(), 6);
    assert!(mesh.vertices.iter().all(|v| v.ao() == 3));

    let naive_mesh = build_chunk_mesh(&chunk, &naive());
    assert_eq!(naive_mesh.quad_count(), 6 * 32 * 32);
}

#[test]
fn test_cavity_exposes_six_faces() {
    let full = solid_chunk();
    let mut cavity = solid_chunk();
    cavity.set_voxel(3, 3, 3, Voxel::EMPTY);

    // Greedy: 6 boundary quads plus the 6 faces around the hole.
    let mesh = build_chunk_mesh(&cavity, &greedy());
    assert_eq!(mesh.vertex_count(), 48);
    assert_eq!(mesh.indices.len(), 72);

    // Naive: exactly +24 vertices / +36 indices over the solid chunk.
    let before = build_chunk_mesh(&full, &naive());
    let after = build_chunk_mesh(&cavity, &naive());
    assert_eq!(after.vertex_count() - before.vertex_count(), 24);
    assert_eq!(after.indices.len() - before.indices.len(), 36);

    // The cavity faces are fully enclosed, so both edge samples are solid.
    let inner: Vec<_> = mesh
        .vertices
        .iter()
        .filter(|v| v.position().iter().all(|&c| (2..=4).contains(&c)))
        .collect();
    assert_eq!(inner.len(), 24);
    assert!(inner.iter().all(|v| v.ao() == 0));
}

#[test]
fn test_meshing_is_deterministic() {
    let chunk = random_chunk(7, 0.35);
    for options in [naive(), greedy()] {
        let a = build_chunk_mesh(&chunk, &options);
        let b = build_chunk_mesh(&chunk.clone(), &options);
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());
    }
}

#[test]
fn test_greedy_never_exceeds_naive() {
    for seed in 0..12 {
        let fill = 0.1 + (seed as f64) * 0.07;
        let chunk = random_chunk(seed, fill);
        let (a, a_stats) = build_chunk_mesh_with_stats(&chunk, &naive());
        let (b, b_stats) = build_chunk_mesh_with_stats(&chunk, &greedy());

        assert!(b.vertex_count() <= a.vertex_count(), "seed {seed}");
        assert!(b.indices.len() <= a.indices.len(), "seed {seed}");
        assert_eq!(a_stats.merged_faces, b_stats.merged_faces, "seed {seed}");
        assert_eq!(b_stats.fallback_rects, 0);
    }
}

#[test]
fn test_modes_cover_same_surface() {
    let chunk = random_chunk(99, 0.4);
    let a = covered_faces(&build_chunk_mesh(&chunk, &naive()));
    let b = covered_faces(&build_chunk_mesh(&chunk, &greedy()));
    assert_eq!(a, b);
}

#[test]
fn test_no_internal_faces() {
    let chunk = random_chunk(3, 0.5);
    let mesh = build_chunk_mesh(&chunk, &greedy());
    for (pos, face_id) in covered_faces(&mesh) {
        let face = Face::from_id(face_id).expect("valid face id");
        let n = face.normal();
        let [x, y, z] = pos.map(i32::from);
        assert!(chunk.is_solid(x, y, z));
        assert!(!chunk.is_solid(x + n[0], y + n[1], z + n[2]));
    }
}

#[test]
fn test_quads_never_span_materials() {
    // Alternating stripes of stone and palette colors.
    let mut chunk = Chunk::new(ChunkCoord::new(0, 0, 0));
    for x in 0..CHUNK_SIZE_I32 {
        let voxel = match x % 3 {
            0 => Voxel::new(VoxelKind::Stone),
            1 => Voxel::with_base_color(VoxelKind::Stone, 2),
            _ => Voxel::with_base_color(VoxelKind::Stone, 3),
        };
        for y in 0..4 {
            for z in 0..4 {
                chunk.set_voxel(x, y, z, voxel);
            }
        }
    }

    let mesh = build_chunk_mesh(&chunk, &greedy());
    for quad in mesh.vertices.chunks_exact(4) {
        let a = quad[0].position();
        let b = quad[2].position();
        for x in a[0].min(b[0])..=a[0].max(b[0]) {
            for y in a[1].min(b[1])..=a[1].max(b[1]) {
                for z in a[2].min(b[2])..=a[2].max(b[2]) {
                    let voxel = chunk.voxel_at(i32::from(x), i32::from(y), i32::from(z));
                    let (material, color) = resolve_material(voxel).expect("solid voxel");
                    assert_eq!(material.id(), quad[0].material());
                    assert_eq!(color, quad[0].base_color());
                }
            }
        }
    }
}
