//! Centralized configuration values shared across the torus mesher crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::TAU;
use std::fmt;

// =============================================================================
// TORUS DEFAULTS
// =============================================================================

/// Radius substituted when the caller passes zero or leaves it unset.
///
/// Distance from the torus center to the centerline of the tube.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert_eq!(DEFAULT_RADIUS, 1.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Undisplaced tube radius substituted when the caller passes zero.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_RADIUS, DEFAULT_TUBE};
/// assert!(DEFAULT_TUBE < DEFAULT_RADIUS);
/// ```
pub const DEFAULT_TUBE: f64 = 0.4;

/// Subdivisions around the main ring when the caller passes zero.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIAL_SEGMENTS;
/// assert_eq!(DEFAULT_RADIAL_SEGMENTS, 8);
/// ```
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 8;

/// Subdivisions around the tube cross-section when the caller passes zero.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TUBULAR_SEGMENTS;
/// assert_eq!(DEFAULT_TUBULAR_SEGMENTS, 6);
/// ```
pub const DEFAULT_TUBULAR_SEGMENTS: u32 = 6;

/// Angular sweep of the torus in radians (a full circle).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ARC;
/// assert!((DEFAULT_ARC - 2.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub const DEFAULT_ARC: f64 = TAU;

// =============================================================================
// HEIGHTMAP SAMPLING
// =============================================================================

/// Divisor applied to a sampled channel value before it is added to the tube
/// radius.
///
/// A channel value of 128 displaces the tube by one unit; 255 by just under
/// two. Callers that need a different sensitivity go through
/// [`MesherConfig`] instead of editing this value.
///
/// # Examples
/// ```
/// use config::constants::DISPLACEMENT_SCALE;
/// let offset = 255.0 / DISPLACEMENT_SCALE;
/// assert!(offset < 2.0);
/// ```
pub const DISPLACEMENT_SCALE: f64 = 128.0;

/// Bytes per pixel of a decoded browser image (R, G, B, A).
///
/// # Examples
/// ```
/// use config::constants::RGBA_CHANNEL_STRIDE;
/// let (width, height) = (96, 64);
/// assert_eq!(width * height * RGBA_CHANNEL_STRIDE, 24_576);
/// ```
pub const RGBA_CHANNEL_STRIDE: usize = 4;

/// Channel within each pixel group that carries the height value (red).
pub const HEIGHT_CHANNEL: usize = 0;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Decimal digits kept when quantizing positions for seam welding.
///
/// Two vertices whose coordinates agree after rounding to this many decimal
/// places are merged into one.
///
/// # Examples
/// ```
/// use config::constants::WELD_PRECISION_POINTS;
/// let scale = 10f64.powi(WELD_PRECISION_POINTS as i32);
/// assert_eq!((1.00004_f64 * scale).round(), (1.0_f64 * scale).round());
/// ```
pub const WELD_PRECISION_POINTS: u32 = 4;

/// Largest number of decimal digits accepted for welding.
///
/// Beyond this the quantized coordinates of ordinary meshes overflow `i64`.
pub const MAX_WELD_PRECISION_POINTS: u32 = 12;

/// Tolerance used when checking that generated normals have unit length.
///
/// # Examples
/// ```
/// use config::constants::NORMAL_TOLERANCE;
/// let length: f64 = 1.0 + 1e-12;
/// assert!((length - 1.0).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// LIMITS
// =============================================================================

/// Ring count at which vertex and index generation switch to the parallel
/// path (when the `parallel` feature is enabled).
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_RING_THRESHOLD;
/// assert!(PARALLEL_RING_THRESHOLD >= 2);
/// ```
pub const PARALLEL_RING_THRESHOLD: u32 = 64;

/// Maximum number of vertices in a single generated mesh.
///
/// Safety limit so a typo in a segment count cannot exhaust memory. Also
/// keeps every index representable as `u32`.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// let (radial, tubular) = (64usize, 100usize);
/// assert!((radial + 1) * (tubular + 1) < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 16_000_000;

// =============================================================================
// MESHER CONFIG
// =============================================================================

/// Immutable snapshot of the tunables that change generated geometry.
///
/// # Examples
/// ```
/// use config::constants::MesherConfig;
/// let config = MesherConfig::default();
/// assert_eq!(config.displacement_scale, 128.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MesherConfig {
    /// Divisor applied to sampled channel values.
    pub displacement_scale: f64,
    /// Decimal digits kept when welding seam vertices.
    pub weld_precision_points: u32,
}

impl MesherConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MesherConfig;
    /// let cfg = MesherConfig::new(64.0, 3).expect("valid config");
    /// assert_eq!(cfg.weld_precision_points, 3);
    /// assert!(MesherConfig::new(0.0, 3).is_err());
    /// ```
    pub fn new(displacement_scale: f64, weld_precision_points: u32) -> Result<Self, ConfigError> {
        if !displacement_scale.is_finite() || displacement_scale <= 0.0 {
            return Err(ConfigError::InvalidDisplacementScale(displacement_scale));
        }
        if weld_precision_points > MAX_WELD_PRECISION_POINTS {
            return Err(ConfigError::InvalidWeldPrecision(weld_precision_points));
        }
        Ok(Self {
            displacement_scale,
            weld_precision_points,
        })
    }
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            displacement_scale: DISPLACEMENT_SCALE,
            weld_precision_points: WELD_PRECISION_POINTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the displacement divisor is zero, negative or not finite.
    InvalidDisplacementScale(f64),
    /// Raised when the weld precision exceeds [`MAX_WELD_PRECISION_POINTS`].
    InvalidWeldPrecision(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDisplacementScale(value) => {
                write!(f, "displacement_scale must be positive and finite: {value}")
            }
            ConfigError::InvalidWeldPrecision(value) => {
                write!(
                    f,
                    "weld_precision_points must be <= {MAX_WELD_PRECISION_POINTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
