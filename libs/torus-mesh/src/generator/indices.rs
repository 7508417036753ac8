//! Triangle index generation.
//!
//! Each grid quad ending at `(j, i)` is split along the `b`-`d` diagonal:
//!
//! ```text
//!   b ---- c      ring j - 1
//!   | \    |
//!   |   \  |
//!   a ---- d      ring j
//! i - 1    i
//! ```
//!
//! emitting `(a, b, d)` and `(b, c, d)`, counter-clockwise seen from outside
//! the tube.

use crate::params::ResolvedTorus;

#[cfg(feature = "parallel")]
use config::constants::PARALLEL_RING_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) fn build(torus: &ResolvedTorus) -> Vec<u32> {
    #[cfg(feature = "parallel")]
    {
        if torus.radial_segments >= PARALLEL_RING_THRESHOLD {
            return build_parallel(torus);
        }
    }

    build_serial(torus)
}

pub(crate) fn build_serial(torus: &ResolvedTorus) -> Vec<u32> {
    let stride = torus.ring_stride();
    let mut indices = Vec::with_capacity(torus.index_count());
    for j in 1..=torus.radial_segments {
        for i in 1..=torus.tubular_segments {
            indices.extend_from_slice(&quad(stride, j, i));
        }
    }
    indices
}

#[cfg(feature = "parallel")]
pub(crate) fn build_parallel(torus: &ResolvedTorus) -> Vec<u32> {
    let stride = torus.ring_stride();
    let tubular = torus.tubular_segments;
    (1..=torus.radial_segments)
        .into_par_iter()
        .flat_map_iter(|j| (1..=tubular).flat_map(move |i| quad(stride, j, i)))
        .collect()
}

/// Two triangles for the quad whose far corner is `(j, i)`; `j, i >= 1`.
#[inline]
pub(crate) fn quad(stride: u32, j: u32, i: u32) -> [u32; 6] {
    let a = stride * j + i - 1;
    let b = stride * (j - 1) + i - 1;
    let c = stride * (j - 1) + i;
    let d = stride * j + i;
    [a, b, d, b, c, d]
}
