use super::*;

fn unit_triangle() -> Mesh {
    Mesh::from_parts(
        vec![DVec3::ZERO, DVec3::X, DVec3::Y],
        vec![DVec3::Z; 3],
        vec![DVec2::ZERO, DVec2::X, DVec2::Y],
        vec![0, 1, 2],
    )
    .unwrap()
}

#[test]
fn test_from_parts_counts() {
    let mesh = unit_triangle();
    assert!(!mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangle(0), Some([0, 1, 2]));
}

#[test]
fn test_from_parts_rejects_misaligned_attributes() {
    let result = Mesh::from_parts(
        vec![DVec3::ZERO, DVec3::X],
        vec![DVec3::Z],
        vec![DVec2::ZERO, DVec2::X],
        vec![],
    );
    assert!(matches!(result, Err(MeshError::ValidationFailed { .. })));
}

#[test]
fn test_from_parts_rejects_partial_triangle() {
    let result = Mesh::from_parts(vec![DVec3::ZERO], vec![DVec3::Z], vec![DVec2::ZERO], vec![0, 0]);
    assert!(result.is_err());
}

#[test]
fn test_from_parts_rejects_out_of_range_index() {
    let result = Mesh::from_parts(
        vec![DVec3::ZERO],
        vec![DVec3::Z],
        vec![DVec2::ZERO],
        vec![0, 0, 3],
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("index 3"));
}

#[test]
fn test_empty_mesh() {
    let mesh = Mesh::from_parts(vec![], vec![], vec![], vec![]).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_bounding_box() {
    let mesh = Mesh::from_parts(
        vec![DVec3::new(-1.0, -2.0, -3.0), DVec3::new(4.0, 5.0, 6.0), DVec3::ZERO],
        vec![DVec3::Z; 3],
        vec![DVec2::ZERO; 3],
        vec![0, 1, 2],
    )
    .unwrap();
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
    assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
}

#[test]
fn test_validate_rejects_non_unit_normal() {
    let mesh = Mesh::from_parts(
        vec![DVec3::ZERO],
        vec![DVec3::new(0.0, 0.0, 2.0)],
        vec![DVec2::ZERO],
        vec![],
    )
    .unwrap();
    let err = mesh.validate().unwrap_err();
    assert!(err.to_string().contains("normal 0"));
}

#[test]
fn test_validate_rejects_nan_position() {
    let mesh = Mesh::from_parts(
        vec![DVec3::new(f64::NAN, 0.0, 0.0)],
        vec![DVec3::Z],
        vec![DVec2::ZERO],
        vec![],
    )
    .unwrap();
    assert!(mesh.validate().is_err());
}

#[test]
fn test_f32_exports() {
    let mesh = unit_triangle();
    assert_eq!(mesh.positions_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(mesh.normals_f32().len(), 9);
    assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_into_parts() {
    let (positions, normals, uvs, indices) = unit_triangle().into_parts();
    assert_eq!(positions.len(), 3);
    assert_eq!(normals.len(), 3);
    assert_eq!(uvs.len(), 3);
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_mesh_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Mesh>();
}

#[test]
fn test_triangle_past_end_is_none() {
    let mesh = unit_triangle();
    assert_eq!(mesh.triangle(1), None);
    assert_eq!(mesh.triangle(usize::MAX), None);
}
