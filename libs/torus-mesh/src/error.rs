//! # Mesh Errors
//!
//! Error types for torus generation. Every failure is detected before any
//! geometry is produced, so a caller never receives a partially built mesh.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while generating or post-processing a mesh.
///
/// ## Example
///
/// ```rust
/// use torus_mesh::{generate, Heightmap, MeshError, TorusParams};
///
/// let pixels = vec![0u8; 4 * 4 * 4];
/// let heightmap = Heightmap::new(&pixels, 4, 4).unwrap();
/// let params = TorusParams { radius: -1.0, ..TorusParams::default() };
///
/// match generate(&heightmap, &params) {
///     Err(MeshError::InvalidParameter { name, .. }) => assert_eq!(name, "radius"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A torus shape parameter is out of range after defaults were applied.
    #[error("Invalid parameter `{name}` ({value}): {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value after normalization.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// The pixel buffer does not match the declared dimensions.
    #[error("Invalid heightmap: {message}")]
    InvalidHeightmap {
        /// Description of the mismatch.
        message: String,
    },

    /// Mesh buffers violate the attribute layout.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the first violation found.
        message: String,
    },

    /// The mesher configuration snapshot is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// An encoded image could not be decoded into pixels.
    #[error("Image decode error: {message}")]
    ImageDecode {
        /// Message reported by the decoder.
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid heightmap error.
    pub fn invalid_heightmap(message: impl Into<String>) -> Self {
        Self::InvalidHeightmap {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Creates an image decode error.
    pub fn image_decode(message: impl Into<String>) -> Self {
        Self::ImageDecode {
            message: message.into(),
        }
    }
}

/// Result type alias for mesher operations.
pub type MeshResult<T> = Result<T, MeshError>;
