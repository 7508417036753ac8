//! End-to-end generation from a synthetic heightmap through to GPU buffers.

use std::sync::Arc;
use std::thread;

use torus_mesh::{generate, Heightmap, Mesh, TorusParams};

const WIDTH: u32 = 96;
const HEIGHT: u32 = 64;

/// Concentric rings of brightness, roughly what a terrain heightmap looks like.
fn terrain_pixels() -> Vec<u8> {
    let mut pixels = Vec::with_capacity((WIDTH * HEIGHT * 4) as usize);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let dx = x as f64 - WIDTH as f64 / 2.0;
            let dy = y as f64 - HEIGHT as f64 / 2.0;
            let value = ((dx * dx + dy * dy).sqrt() * 8.0) as u32 % 256;
            pixels.extend_from_slice(&[value as u8, value as u8, value as u8, 255]);
        }
    }
    pixels
}

fn terrain_mesh(pixels: &[u8]) -> Mesh {
    let heightmap = Heightmap::new(pixels, WIDTH, HEIGHT).unwrap();
    generate(&heightmap, &TorusParams::new(10.0, 3.0, 64, 100)).unwrap()
}

#[test]
fn generates_renderable_buffers() {
    let pixels = terrain_pixels();
    let mesh = terrain_mesh(&pixels);

    assert_eq!(mesh.vertex_count(), 65 * 101);
    assert_eq!(mesh.triangle_count(), 2 * 64 * 100);
    assert!(mesh.validate().is_ok());

    assert_eq!(mesh.positions_f32().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.normals_f32().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.uvs_f32().len(), mesh.vertex_count() * 2);
    assert!(mesh.positions_f32().iter().all(|v| v.is_finite()));
}

#[test]
fn displacement_stays_within_channel_range() {
    let pixels = terrain_pixels();
    let mesh = terrain_mesh(&pixels);

    // tube 3 plus at most 255 / 128 of displacement
    let max_reach = 10.0 + 3.0 + 255.0 / 128.0;
    let min_reach = 10.0 - 3.0 - 255.0 / 128.0;
    for position in mesh.positions() {
        let from_axis = position.truncate().length();
        assert!(from_axis <= max_reach + 1e-9);
        assert!(from_axis >= min_reach - 1e-9);
        assert!(position.z.abs() <= 3.0 + 255.0 / 128.0 + 1e-9);
    }
}

#[test]
fn welded_mesh_closes_the_seams() {
    let pixels = terrain_pixels();
    let raw = terrain_mesh(&pixels);
    let welded = raw.weld(4).unwrap();

    assert_eq!(welded.vertex_count(), 64 * 100);
    assert_eq!(welded.triangle_count(), raw.triangle_count());
    assert!(welded.validate().is_ok());

    // Closed surface: every edge is shared by exactly two triangles.
    let mut edges = std::collections::HashMap::new();
    for n in 0..welded.triangle_count() {
        let [a, b, c] = welded.triangle(n).unwrap();
        for (start, end) in [(a, b), (b, c), (c, a)] {
            *edges.entry((start.min(end), start.max(end))).or_insert(0u32) += 1;
        }
    }
    assert!(edges.values().all(|&count| count == 2));
}

#[test]
fn mesh_can_be_built_off_the_render_thread() {
    let pixels = Arc::new(terrain_pixels());
    let worker_pixels = Arc::clone(&pixels);

    let mesh = thread::spawn(move || terrain_mesh(&worker_pixels))
        .join()
        .unwrap();

    assert_eq!(mesh, terrain_mesh(&pixels));
}
