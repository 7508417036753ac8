//! # Torus Mesh
//!
//! Generates a torus whose tube radius is displaced by a heightmap, sampled
//! by wrapping image columns around the main ring and image rows around the
//! tube.
//!
//! ## Architecture
//!
//! ```text
//! pixel buffer → Heightmap ─┐
//!                           ├→ generate → Mesh → (optional) weld
//! TorusParams → resolve() ──┘
//! ```
//!
//! The displacement is baked into vertex positions once; the resulting
//! [`Mesh`] is inert data (positions, normals, UVs, triangle indices) for
//! any renderer that accepts position/normal/uv streams and an index list.
//!
//! ## Usage
//!
//! ```rust
//! use torus_mesh::{generate, Heightmap, TorusParams};
//!
//! // 96x64 RGBA heightmap, all pixels at half intensity.
//! let pixels = vec![128u8; 96 * 64 * 4];
//! let heightmap = Heightmap::new(&pixels, 96, 64)?;
//!
//! let mesh = generate(&heightmap, &TorusParams::new(10.0, 3.0, 64, 100))?;
//! assert_eq!(mesh.vertex_count(), 65 * 101);
//!
//! // Merge the duplicated seam vertices before rendering.
//! let welded = mesh.weld(4)?;
//! assert_eq!(welded.vertex_count(), 64 * 100);
//! # Ok::<(), torus_mesh::MeshError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): builds large meshes ring-by-ring with `rayon`
//! - `image`: builds heightmaps from `image` buffers and decodes PNG bytes

pub mod error;
pub mod generator;
pub mod heightmap;
pub mod mesh;
pub mod ops;
pub mod params;

pub use error::{MeshError, MeshResult};
pub use generator::{generate, generate_with_config};
pub use heightmap::Heightmap;
pub use mesh::Mesh;
pub use params::{ResolvedTorus, TorusParams};

pub use config::constants::MesherConfig;
