//! # Seam Welding
//!
//! Merges vertices that share a position after quantization.
//!
//! ## Algorithm
//!
//! 1. Each position is scaled by `10^precision_points`, rounded, and used as
//!    a hash key
//! 2. The first vertex seen for a key survives with its normal and UV;
//!    later vertices with the same key are remapped onto it
//! 3. Triangles are remapped; triangles that collapse onto fewer than three
//!    distinct vertices are dropped
//!
//! A full-circle torus has a duplicated first/last ring and column, so its
//! `(R + 1) * (T + 1)` vertices weld down to `R * T` while keeping every
//! triangle.

use std::collections::HashMap;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MAX_WELD_PRECISION_POINTS;
use glam::DVec3;

/// Merges coincident vertices of `mesh` into a new mesh.
///
/// # Arguments
///
/// * `mesh` - Mesh to weld; it is left untouched
/// * `precision_points` - Decimal digits compared when matching positions
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when `precision_points` exceeds
/// [`MAX_WELD_PRECISION_POINTS`].
///
/// # Example
///
/// ```rust
/// use torus_mesh::{generate, ops::weld, Heightmap, TorusParams};
///
/// let pixels = vec![0u8; 8 * 8 * 4];
/// let heightmap = Heightmap::new(&pixels, 8, 8).unwrap();
/// let raw = generate(&heightmap, &TorusParams::new(10.0, 3.0, 8, 6)).unwrap();
/// let welded = weld(&raw, 4).unwrap();
/// assert_eq!(welded.vertex_count(), 8 * 6);
/// assert_eq!(welded.triangle_count(), raw.triangle_count());
/// ```
pub fn weld(mesh: &Mesh, precision_points: u32) -> MeshResult<Mesh> {
    if precision_points > MAX_WELD_PRECISION_POINTS {
        return Err(MeshError::invalid_parameter(
            "precision_points",
            f64::from(precision_points),
            format!("must be <= {MAX_WELD_PRECISION_POINTS}"),
        ));
    }
    let scale = 10f64.powi(precision_points as i32);

    let source_normals = mesh.normals();
    let source_uvs = mesh.uvs();
    let mut lookup: HashMap<[i64; 3], u32> = HashMap::with_capacity(mesh.vertex_count());
    let mut remap = Vec::with_capacity(mesh.vertex_count());
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();

    for (index, position) in mesh.positions().iter().enumerate() {
        let target = *lookup.entry(quantize(*position, scale)).or_insert_with(|| {
            let next = positions.len() as u32;
            positions.push(*position);
            normals.push(source_normals[index]);
            uvs.push(source_uvs[index]);
            next
        });
        remap.push(target);
    }

    let mut indices = Vec::with_capacity(mesh.indices().len());
    let mut collapsed = 0usize;
    for triangle in mesh.indices().chunks_exact(3) {
        let a = remap[triangle[0] as usize];
        let b = remap[triangle[1] as usize];
        let c = remap[triangle[2] as usize];
        if a == b || b == c || a == c {
            collapsed += 1;
            continue;
        }
        indices.extend_from_slice(&[a, b, c]);
    }

    log::debug!(
        "welded {} vertices into {} ({} collapsed triangles dropped)",
        mesh.vertex_count(),
        positions.len(),
        collapsed
    );

    Ok(Mesh::from_buffers(positions, normals, uvs, indices))
}

/// Rounds each coordinate at the requested precision.
///
/// `-0.0` and `0.0` share a key because the cast drops the sign of zero.
fn quantize(position: DVec3, scale: f64) -> [i64; 3] {
    [
        (position.x * scale).round() as i64,
        (position.y * scale).round() as i64,
        (position.z * scale).round() as i64,
    ]
}
