//! Per-vertex positions, normals and UVs.

use std::f64::consts::TAU;

use crate::heightmap::Heightmap;
use crate::params::ResolvedTorus;
use glam::{DVec2, DVec3};

#[cfg(feature = "parallel")]
use config::constants::PARALLEL_RING_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One generated vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GridVertex {
    pub position: DVec3,
    pub normal: DVec3,
    pub uv: DVec2,
}

/// Index-aligned attribute buffers.
pub(crate) struct VertexBuffers {
    pub positions: Vec<DVec3>,
    pub normals: Vec<DVec3>,
    pub uvs: Vec<DVec2>,
}

pub(crate) fn build(heightmap: &Heightmap<'_>, torus: &ResolvedTorus, scale: f64) -> VertexBuffers {
    #[cfg(feature = "parallel")]
    {
        if torus.radial_segments >= PARALLEL_RING_THRESHOLD {
            log::trace!("building {} rings in parallel", torus.radial_segments + 1);
            return split(build_parallel(heightmap, torus, scale));
        }
    }

    split(build_serial(heightmap, torus, scale))
}

pub(crate) fn build_serial(
    heightmap: &Heightmap<'_>,
    torus: &ResolvedTorus,
    scale: f64,
) -> Vec<GridVertex> {
    (0..=torus.radial_segments)
        .flat_map(|j| {
            (0..=torus.tubular_segments).map(move |i| grid_vertex(heightmap, torus, scale, j, i))
        })
        .collect()
}

/// Rings are independent once the heightmap is shared read-only; the
/// order-preserving collect keeps the output identical to the serial path.
#[cfg(feature = "parallel")]
pub(crate) fn build_parallel(
    heightmap: &Heightmap<'_>,
    torus: &ResolvedTorus,
    scale: f64,
) -> Vec<GridVertex> {
    (0..=torus.radial_segments)
        .into_par_iter()
        .flat_map_iter(|j| {
            (0..=torus.tubular_segments).map(move |i| grid_vertex(heightmap, torus, scale, j, i))
        })
        .collect()
}

/// Computes the vertex for grid cell `(j, i)`.
///
/// The normal points from the *undisplaced* ring center toward the displaced
/// vertex. On a heightmap with varying values this differs from the true
/// surface normal; renderers rely on this exact shading. When the difference
/// rounds away entirely the unit tube direction at `(u, v)` is used.
pub(crate) fn grid_vertex(
    heightmap: &Heightmap<'_>,
    torus: &ResolvedTorus,
    scale: f64,
    j: u32,
    i: u32,
) -> GridVertex {
    let radial = f64::from(torus.radial_segments);
    let tubular = f64::from(torus.tubular_segments);

    let height = heightmap.sample_cell(j, i, torus.radial_segments, torus.tubular_segments);
    let tube = torus.tube + f64::from(height) / scale;

    let u = f64::from(i) / tubular * torus.arc;
    let v = f64::from(j) / radial * TAU;
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_v, cos_v) = v.sin_cos();

    let ring = torus.radius + tube * cos_v;
    let position = DVec3::new(ring * cos_u, ring * sin_u, tube * sin_v);
    let center = DVec3::new(torus.radius * cos_u, torus.radius * sin_u, 0.0);

    // p - center is tube * direction in exact arithmetic; the subtraction can
    // cancel to zero when radius dwarfs the tube.
    let direction = DVec3::new(cos_v * cos_u, cos_v * sin_u, sin_v);

    GridVertex {
        position,
        normal: (position - center).try_normalize().unwrap_or(direction),
        uv: DVec2::new(f64::from(i) / tubular, f64::from(j) / radial),
    }
}

fn split(vertices: Vec<GridVertex>) -> VertexBuffers {
    let mut buffers = VertexBuffers {
        positions: Vec::with_capacity(vertices.len()),
        normals: Vec::with_capacity(vertices.len()),
        uvs: Vec::with_capacity(vertices.len()),
    };
    for vertex in vertices {
        buffers.positions.push(vertex.position);
        buffers.normals.push(vertex.normal);
        buffers.uvs.push(vertex.uv);
    }
    buffers
}
