//! # Torus Parameters
//!
//! Raw shape inputs and their normalization into a validated torus.
//!
//! ## Normalization Rules
//!
//! | Field | Unset / zero / NaN becomes | Rejected when |
//! |-------|----------------------------|---------------|
//! | `radius` | [`DEFAULT_RADIUS`] | `<= 0` or infinite |
//! | `tube` | [`DEFAULT_TUBE`] | `<= 0` or infinite |
//! | `radial_segments` | [`DEFAULT_RADIAL_SEGMENTS`] | `< 1` after truncation |
//! | `tubular_segments` | [`DEFAULT_TUBULAR_SEGMENTS`] | `< 1` after truncation |
//! | `arc` | [`DEFAULT_ARC`] | infinite |
//!
//! Segment counts are truncated toward zero before the zero check, so `0.7`
//! and `-0.5` resolve to the default while `2.9` resolves to `2`.

use crate::error::{MeshError, MeshResult};
use config::constants::{
    DEFAULT_ARC, DEFAULT_RADIAL_SEGMENTS, DEFAULT_RADIUS, DEFAULT_TUBE,
    DEFAULT_TUBULAR_SEGMENTS, MAX_VERTICES,
};
use serde::{Deserialize, Serialize};

/// Torus shape as supplied by a caller.
///
/// Fields are plain `f64` so values coming from a dynamic boundary (JSON,
/// JavaScript) keep their "zero means default" meaning until
/// [`TorusParams::resolve`] interprets them. Missing JSON fields take the
/// documented defaults.
///
/// # Example
///
/// ```rust
/// use torus_mesh::TorusParams;
///
/// let params = TorusParams::new(10.0, 3.0, 64, 100);
/// let torus = params.resolve().unwrap();
/// assert_eq!(torus.vertex_count(), 65 * 101);
///
/// let from_json: TorusParams = serde_json::from_str(r#"{"radius": 10}"#).unwrap();
/// assert_eq!(from_json.resolve().unwrap().radial_segments, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TorusParams {
    /// Distance from the torus center to the tube centerline.
    pub radius: f64,
    /// Undisplaced tube radius.
    pub tube: f64,
    /// Subdivisions around the main ring.
    pub radial_segments: f64,
    /// Subdivisions around the tube cross-section.
    pub tubular_segments: f64,
    /// Angular sweep of the tube around the main axis, in radians.
    pub arc: f64,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            tube: DEFAULT_TUBE,
            radial_segments: f64::from(DEFAULT_RADIAL_SEGMENTS),
            tubular_segments: f64::from(DEFAULT_TUBULAR_SEGMENTS),
            arc: DEFAULT_ARC,
        }
    }
}

impl TorusParams {
    /// Creates a full-circle torus with integral segment counts.
    pub fn new(radius: f64, tube: f64, radial_segments: u32, tubular_segments: u32) -> Self {
        Self {
            radius,
            tube,
            radial_segments: f64::from(radial_segments),
            tubular_segments: f64::from(tubular_segments),
            arc: DEFAULT_ARC,
        }
    }

    /// Sets the angular sweep in radians.
    pub fn with_arc(mut self, arc: f64) -> Self {
        self.arc = arc;
        self
    }

    /// Applies the documented defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] naming the first field that is
    /// out of range after defaults were applied, or when the resulting grid
    /// would exceed [`MAX_VERTICES`].
    pub fn resolve(&self) -> MeshResult<ResolvedTorus> {
        let radius = or_default(self.radius, DEFAULT_RADIUS);
        let tube = or_default(self.tube, DEFAULT_TUBE);
        let arc = or_default(self.arc, DEFAULT_ARC);

        require_positive("radius", radius)?;
        require_positive("tube", tube)?;
        if !arc.is_finite() {
            return Err(MeshError::invalid_parameter("arc", arc, "must be finite"));
        }

        let radial_segments =
            segments_or_default("radial_segments", self.radial_segments, DEFAULT_RADIAL_SEGMENTS)?;
        let tubular_segments = segments_or_default(
            "tubular_segments",
            self.tubular_segments,
            DEFAULT_TUBULAR_SEGMENTS,
        )?;

        // u32::MAX + 1 squared does not fit in u64
        let rings = u64::from(radial_segments) + 1;
        let ring_stride = u64::from(tubular_segments) + 1;
        rings
            .checked_mul(ring_stride)
            .filter(|&count| count <= MAX_VERTICES as u64)
            .ok_or_else(|| {
                MeshError::invalid_parameter(
                    "radial_segments x tubular_segments",
                    rings as f64 * ring_stride as f64,
                    format!("grid exceeds {MAX_VERTICES} vertices"),
                )
            })?;

        Ok(ResolvedTorus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
            arc,
        })
    }
}

/// Torus shape after defaults and validation.
///
/// Only [`TorusParams::resolve`] creates one, so every instance satisfies
/// `radius > 0`, `tube > 0`, both segment counts `>= 1` and a finite arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTorus {
    /// Distance from the torus center to the tube centerline.
    pub radius: f64,
    /// Undisplaced tube radius.
    pub tube: f64,
    /// Subdivisions around the main ring (`R`).
    pub radial_segments: u32,
    /// Subdivisions around the tube cross-section (`T`).
    pub tubular_segments: u32,
    /// Angular sweep in radians.
    pub arc: f64,
}

impl ResolvedTorus {
    /// Vertices per ring: `T + 1`.
    #[inline]
    pub fn ring_stride(&self) -> u32 {
        self.tubular_segments + 1
    }

    /// Total vertex count: `(R + 1) * (T + 1)`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.radial_segments as usize + 1) * (self.tubular_segments as usize + 1)
    }

    /// Total index count: `6 * R * T`.
    #[inline]
    pub fn index_count(&self) -> usize {
        6 * self.radial_segments as usize * self.tubular_segments as usize
    }
}

/// Zero, negative zero and NaN count as unset.
fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        default
    } else {
        value
    }
}

fn require_positive(name: &'static str, value: f64) -> MeshResult<()> {
    if value <= 0.0 {
        return Err(MeshError::invalid_parameter(name, value, "must be positive"));
    }
    if !value.is_finite() {
        return Err(MeshError::invalid_parameter(name, value, "must be finite"));
    }
    Ok(())
}

fn segments_or_default(name: &'static str, value: f64, default: u32) -> MeshResult<u32> {
    let whole = value.trunc();
    if whole == 0.0 || whole.is_nan() {
        return Ok(default);
    }
    if whole < 1.0 {
        return Err(MeshError::invalid_parameter(name, whole, "must be at least 1"));
    }
    if whole > f64::from(u32::MAX) {
        return Err(MeshError::invalid_parameter(name, whole, "is too large"));
    }
    Ok(whole as u32)
}
