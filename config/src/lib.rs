//! # Config Crate
//!
//! Centralized configuration constants for the heightmap torus mesher.
//! Torus defaults, the displacement scale and every other tunable value are
//! defined here so the mesher and the WASM boundary agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_RADIAL_SEGMENTS, DISPLACEMENT_SCALE};
//!
//! // A mid-gray red channel displaces the tube by exactly one unit.
//! let displacement = 128.0 / DISPLACEMENT_SCALE;
//! assert_eq!(displacement, 1.0);
//!
//! // Zero segment counts fall back to the documented default.
//! let requested = 0;
//! let segments = if requested > 0 { requested } else { DEFAULT_RADIAL_SEGMENTS };
//! assert_eq!(segments, 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Documented Defaults**: Falsy torus inputs resolve to the values below

pub mod constants;
