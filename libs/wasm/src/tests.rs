//! Tests for the WASM-facing generation helpers.

use super::*;

fn flat_pixels(width: u32, height: u32, value: u8) -> Vec<u8> {
    vec![value; (width * height * 4) as usize]
}

/// Defaults produce the 9x7 grid with 2 triangles per cell.
#[test]
fn generate_uses_defaults_for_zero_params() {
    let pixels = flat_pixels(4, 4, 0);
    let params = TorusParams {
        radius: 0.0,
        tube: 0.0,
        radial_segments: 0.0,
        tubular_segments: 0.0,
        arc: 0.0,
    };
    let mesh = generate_torus_internal(&pixels, 4, 4, &params, false).expect("generation succeeds");

    assert_eq!(mesh.vertex_count(), 9 * 7);
    assert_eq!(mesh.triangle_count(), 2 * 8 * 6);
    assert_eq!(mesh.positions().len(), 9 * 7 * 3);
    assert_eq!(mesh.normals().len(), 9 * 7 * 3);
    assert_eq!(mesh.uvs().len(), 9 * 7 * 2);
    assert_eq!(mesh.indices().len(), 2 * 8 * 6 * 3);
}

#[test]
fn generate_welds_seams_on_request() {
    let pixels = flat_pixels(8, 8, 128);
    let params = TorusParams::new(10.0, 3.0, 16, 12);

    let raw = generate_torus_internal(&pixels, 8, 8, &params, false).expect("raw mesh");
    let welded = generate_torus_internal(&pixels, 8, 8, &params, true).expect("welded mesh");

    assert_eq!(raw.vertex_count(), 17 * 13);
    assert_eq!(welded.vertex_count(), 16 * 12);
    assert_eq!(welded.triangle_count(), raw.triangle_count());
}

#[test]
fn generate_rejects_short_pixel_buffer() {
    let pixels = flat_pixels(2, 2, 0);
    let err = generate_torus_internal(&pixels, 4, 4, &TorusParams::default(), false).unwrap_err();
    assert!(matches!(err, MeshError::InvalidHeightmap { .. }));
}

#[test]
fn generate_rejects_negative_radius() {
    let pixels = flat_pixels(2, 2, 0);
    let params = TorusParams {
        radius: -1.0,
        ..TorusParams::default()
    };
    let err = generate_torus_internal(&pixels, 2, 2, &params, false).unwrap_err();
    assert!(err.to_string().contains("radius"));
}

#[test]
fn buffers_are_finite_and_indices_in_range() {
    let pixels: Vec<u8> = (0..16 * 16 * 4).map(|n| (n % 251) as u8).collect();
    let mesh = generate_torus_internal(&pixels, 16, 16, &TorusParams::new(5.0, 1.0, 24, 18), false)
        .expect("generation succeeds");

    assert!(mesh.positions().iter().all(|v| v.is_finite()));
    assert!(mesh.normals().iter().all(|v| v.is_finite()));
    let vertex_count = mesh.vertex_count();
    assert!(mesh.indices().iter().all(|&index| index < vertex_count));
    assert!(!mesh.is_empty());
}

#[test]
fn default_params_json_round_trips() {
    let params = parse_params_json(&default_params_json()).expect("defaults parse");
    assert_eq!(params, TorusParams::default());
}

#[test]
fn params_json_fills_missing_fields() {
    let params = parse_params_json(r#"{"radius": 10, "radialSegments": 32}"#).expect("parses");
    assert_eq!(params.radius, 10.0);
    assert_eq!(params.radial_segments, 32.0);
    assert_eq!(params.tube, TorusParams::default().tube);
}

#[test]
fn params_json_rejects_malformed_input() {
    let err = parse_params_json("{radius: ").unwrap_err();
    assert!(err.to_string().contains("malformed JSON"));
}

#[test]
fn handle_getters_are_repeatable() {
    let pixels = flat_pixels(4, 4, 64);
    let mesh = generate_torus_internal(&pixels, 4, 4, &TorusParams::default(), false)
        .expect("generation succeeds");

    assert_eq!(mesh.positions(), mesh.positions());
    assert_eq!(mesh.indices(), mesh.indices());
    assert_eq!(mesh.uvs().len(), mesh.vertex_count() as usize * 2);
}
