//! # Mesh Operations
//!
//! Post-processing applied to generated meshes.

pub mod weld;

pub use weld::weld;
