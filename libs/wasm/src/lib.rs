//! WASM-facing entry points for heightmap torus generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The browser reads the heightmap pixels out of a canvas
//! (`getImageData`) and hands the RGBA bytes straight to [`generate_torus`].
//! Native tests go through [`generate_torus_internal`] to avoid depending on
//! a JS host.
//!
//! ```
//! use torus_mesh::TorusParams;
//!
//! let pixels = vec![128u8; 4 * 4 * 4];
//! let mesh = torus_wasm::generate_torus_internal(&pixels, 4, 4, &TorusParams::default(), false)
//!     .unwrap();
//! assert_eq!(mesh.vertex_count(), 9 * 7);
//! ```

use config::constants::WELD_PRECISION_POINTS;
use torus_mesh::{generate, Heightmap, MeshError, MeshResult, TorusParams};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "torus_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default torus parameters as a camelCase JSON object.
///
/// UI code uses this to seed its controls so the defaults live in one place.
///
/// # Examples
/// ```
/// let json = torus_wasm::default_params_json();
/// assert!(json.contains("\"radialSegments\":8"));
/// ```
#[wasm_bindgen]
pub fn default_params_json() -> String {
    // Plain numbers only, serialization cannot fail.
    serde_json::to_string(&TorusParams::default()).unwrap_or_default()
}

/// Generates a heightmap-displaced torus from RGBA canvas pixels.
///
/// Zero, negative-zero and NaN parameters fall back to their defaults, so a
/// UI can pass raw slider values through. When `weld` is set the duplicated
/// seam vertices are merged before the buffers are handed back.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the heightmap or parameters are invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const { data, width, height } = ctx.getImageData(0, 0, w, h);
/// // const mesh = generate_torus(data, width, height, 10, 3, 64, 100, 0, true);
/// // geometry.setAttribute("position", new THREE.BufferAttribute(mesh.positions(), 3));
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn generate_torus(
    pixels: &[u8],
    width: u32,
    height: u32,
    radius: f64,
    tube: f64,
    radial_segments: f64,
    tubular_segments: f64,
    arc: f64,
    weld: bool,
) -> Result<MeshHandle, JsValue> {
    let params = TorusParams {
        radius,
        tube,
        radial_segments,
        tubular_segments,
        arc,
    };
    generate_torus_internal(pixels, width, height, &params, weld).map_err(to_js_error)
}

/// Same as [`generate_torus`] but takes the parameters as a JSON object.
///
/// Missing fields take their defaults, e.g. `{"radius": 10, "tube": 3}`.
///
/// # Errors
/// Returns a JavaScript error value when the JSON is malformed or
/// generation fails.
#[wasm_bindgen]
pub fn generate_torus_json(
    pixels: &[u8],
    width: u32,
    height: u32,
    params_json: &str,
    weld: bool,
) -> Result<MeshHandle, JsValue> {
    let params = parse_params_json(params_json).map_err(to_js_error)?;
    generate_torus_internal(pixels, width, height, &params, weld).map_err(to_js_error)
}

/// Host-only helper behind [`generate_torus`] that exposes Rust error types.
///
/// # Errors
/// Returns [`MeshError`] when the heightmap buffer is inconsistent with its
/// dimensions or the parameters cannot be resolved.
pub fn generate_torus_internal(
    pixels: &[u8],
    width: u32,
    height: u32,
    params: &TorusParams,
    weld: bool,
) -> MeshResult<MeshHandle> {
    let heightmap = Heightmap::new(pixels, width, height)?;
    let mesh = generate(&heightmap, params)?;
    let mesh = if weld {
        mesh.weld(WELD_PRECISION_POINTS)?
    } else {
        mesh
    };

    log::debug!(
        "torus ready: {} vertices, {} triangles (welded: {weld})",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Parses a camelCase parameter object such as `{"radialSegments": 32}`.
///
/// # Errors
/// Returns [`MeshError::InvalidParameter`] naming the JSON problem.
pub fn parse_params_json(params_json: &str) -> MeshResult<TorusParams> {
    serde_json::from_str(params_json).map_err(|err| {
        MeshError::invalid_parameter("params", f64::NAN, format!("malformed JSON: {err}"))
    })
}

fn to_js_error(err: MeshError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
