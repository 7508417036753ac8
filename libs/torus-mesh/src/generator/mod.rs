//! # Heightmap Torus Generator
//!
//! Bakes a heightmap into the tube radius of a torus and emits an indexed
//! triangle mesh.
//!
//! ## Algorithm
//!
//! For every grid cell `(j, i)` with `j in 0..=R` (around the main ring) and
//! `i in 0..=T` (around the tube):
//!
//! 1. Sample the heightmap at the wrapped pixel for the cell
//! 2. `tube' = tube + sample / displacement_scale`
//! 3. `u = i / T * arc`, `v = j / R * 2PI`
//! 4. `p = ((radius + tube' cos v) cos u, (radius + tube' cos v) sin u, tube' sin v)`
//! 5. `n = normalize(p - (radius cos u, radius sin u, 0))`
//! 6. `uv = (i / T, j / R)`
//!
//! The first and last ring/column are emitted separately even when they
//! coincide; see [`crate::ops::weld`] to merge them.

mod indices;
mod vertices;

use crate::error::MeshResult;
use crate::heightmap::Heightmap;
use crate::mesh::Mesh;
use crate::params::TorusParams;
use config::constants::MesherConfig;

/// Generates a heightmap-displaced torus with the default configuration.
///
/// Deterministic and free of side effects: identical inputs always produce
/// identical meshes.
///
/// # Errors
///
/// Returns [`crate::MeshError::InvalidParameter`] when the torus parameters
/// are out of range after defaults are applied. Heightmap dimensions are
/// checked when the [`Heightmap`] is constructed.
///
/// # Example
///
/// ```rust
/// use torus_mesh::{generate, Heightmap, TorusParams};
///
/// let pixels = vec![128u8; 96 * 64 * 4];
/// let heightmap = Heightmap::new(&pixels, 96, 64).unwrap();
/// let mesh = generate(&heightmap, &TorusParams::new(10.0, 3.0, 64, 100)).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 65 * 101);
/// assert_eq!(mesh.indices().len(), 6 * 64 * 100);
/// ```
pub fn generate(heightmap: &Heightmap<'_>, params: &TorusParams) -> MeshResult<Mesh> {
    generate_with_config(heightmap, params, &MesherConfig::default())
}

/// Generates a heightmap-displaced torus with an explicit configuration.
///
/// Use this to change the displacement sensitivity; the weld precision in
/// `config` is not applied here.
///
/// # Errors
///
/// Returns [`crate::MeshError::Config`] when `config` holds an invalid
/// displacement scale, otherwise behaves like [`generate`].
pub fn generate_with_config(
    heightmap: &Heightmap<'_>,
    params: &TorusParams,
    config: &MesherConfig,
) -> MeshResult<Mesh> {
    let config = MesherConfig::new(config.displacement_scale, config.weld_precision_points)?;
    let torus = params.resolve()?;

    log::debug!(
        "generating torus: radius={} tube={} segments={}x{} arc={} heightmap={}x{}",
        torus.radius,
        torus.tube,
        torus.radial_segments,
        torus.tubular_segments,
        torus.arc,
        heightmap.width(),
        heightmap.height()
    );

    let buffers = vertices::build(heightmap, &torus, config.displacement_scale);
    let indices = indices::build(&torus);

    log::debug!(
        "generated {} vertices, {} triangles",
        buffers.positions.len(),
        indices.len() / 3
    );

    Ok(Mesh::from_buffers(
        buffers.positions,
        buffers.normals,
        buffers.uvs,
        indices,
    ))
}
