//! # Mesh Data Structure
//!
//! Indexed triangle mesh with per-vertex normals and UVs.

use crate::error::{MeshError, MeshResult};
use config::constants::NORMAL_TOLERANCE;
use glam::{DVec2, DVec3};

/// An indexed triangle mesh with index-aligned vertex attributes.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the rendering boundary via the `*_f32` helpers.
///
/// Fields are private: once produced the mesh is immutable, and every
/// constructor guarantees
///
/// - `positions`, `normals` and `uvs` have the same length
/// - `indices.len()` is a multiple of 3
/// - every index is `< positions.len()`
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use torus_mesh::Mesh;
///
/// let mesh = Mesh::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z; 3],
///     vec![DVec2::ZERO, DVec2::X, DVec2::Y],
///     vec![0, 1, 2],
/// )
/// .unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    uvs: Vec<DVec2>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh from buffers the caller already knows to be consistent.
    pub(crate) fn from_buffers(
        positions: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert_eq!(indices.len() % 3, 0);
        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Builds a mesh from external buffers, checking the layout invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ValidationFailed`] when the attribute buffers
    /// differ in length, the index count is not a multiple of 3, or an index
    /// is out of range.
    pub fn from_parts(
        positions: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        indices: Vec<u32>,
    ) -> MeshResult<Self> {
        if normals.len() != positions.len() || uvs.len() != positions.len() {
            return Err(MeshError::validation(format!(
                "attribute lengths differ: {} positions, {} normals, {} uvs",
                positions.len(),
                normals.len(),
                uvs.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::validation(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        let vertex_count = positions.len();
        if let Some(index) = indices.iter().find(|&&index| index as usize >= vertex_count) {
            return Err(MeshError::validation(format!(
                "index {index} out of range for {vertex_count} vertices"
            )));
        }
        Ok(Self::from_buffers(positions, normals, uvs, indices))
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Unit vertex normals, index-aligned with [`Mesh::positions`].
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Texture coordinates, index-aligned with [`Mesh::positions`].
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Triangle list; every 3 consecutive entries form one triangle.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the triangle at the given index, or `None` past
    /// [`Mesh::triangle_count`].
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let base = index.checked_mul(3)?;
        match self.indices.get(base..base.checked_add(3)?)? {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Consumes the mesh and returns `(positions, normals, uvs, indices)`.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<DVec3>, Vec<DVec2>, Vec<u32>) {
        (self.positions, self.normals, self.uvs, self.indices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.positions.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.positions[1..]
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Validates the mesh contents.
    ///
    /// Checks:
    /// - All indices are in range
    /// - All positions, normals and UVs are finite
    /// - All normals have unit length
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ValidationFailed`] describing the first problem.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();
        if let Some(index) = self.indices.iter().find(|&&index| index as usize >= vertex_count) {
            return Err(MeshError::validation(format!(
                "index {index} out of range for {vertex_count} vertices"
            )));
        }

        for (n, position) in self.positions.iter().enumerate() {
            if !position.is_finite() {
                return Err(MeshError::validation(format!("position {n} is not finite")));
            }
        }

        for (n, normal) in self.normals.iter().enumerate() {
            if !normal.is_finite() || (normal.length() - 1.0).abs() > NORMAL_TOLERANCE {
                return Err(MeshError::validation(format!(
                    "normal {n} is not unit length: {normal}"
                )));
            }
        }

        for (n, uv) in self.uvs.iter().enumerate() {
            if !uv.is_finite() {
                return Err(MeshError::validation(format!("uv {n} is not finite")));
            }
        }

        Ok(())
    }

    /// Merges vertices that share a position; see [`crate::ops::weld`].
    pub fn weld(&self, precision_points: u32) -> MeshResult<Mesh> {
        crate::ops::weld(self, precision_points)
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Exports UVs as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }
}

#[cfg(test)]
mod tests;
