/// Tests for SphereMesh and Geometry

use super::*;
use crate::error::Error;
use crate::renderer::HeadlessRenderer;
use glam::Vec3;

#[test]
fn test_section_layout_offsets() {
    let layout = SectionLayout::for_vertex_count(10);
    assert_eq!(layout.position_offset, 0);
    assert_eq!(layout.normal_offset, 120);
    assert_eq!(layout.uv_offset, 240);
    assert_eq!(SectionLayout::total_size(10), 320);
}

#[test]
fn test_sphere_vertex_count() {
    let mesh = SphereMesh::generate(32, 32);
    assert_eq!(mesh.vertex_count(), 32 * 32 * 6);
    assert_eq!(mesh.normals().len(), mesh.positions().len());
    assert_eq!(mesh.uvs().len(), mesh.positions().len());
}

#[test]
fn test_sphere_tessellation_is_clamped() {
    let mesh = SphereMesh::generate(1, 0);
    assert_eq!(mesh.vertex_count(), 3 * 2 * 6);
}

#[test]
fn test_sphere_points_lie_on_unit_sphere() {
    let mesh = SphereMesh::generate(8, 6);
    for (position, normal) in mesh.positions().iter().zip(mesh.normals()) {
        let p = Vec3::from_array(*position);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert_eq!(position, normal);
    }
    for uv in mesh.uvs() {
        assert!((0.0..=1.0).contains(&uv[0]));
        assert!((0.0..=1.0).contains(&uv[1]));
    }
}

#[test]
fn test_section_bytes_order() {
    let mesh = SphereMesh::generate(4, 3);
    let bytes = mesh.to_section_bytes();
    let n = mesh.vertex_count();
    assert_eq!(bytes.len() as u64, SectionLayout::total_size(n));

    let layout = SectionLayout::for_vertex_count(n);
    let floats: Vec<f32> = bytes.chunks_exact(4)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    let normal_start = (layout.normal_offset / 4) as usize;
    let uv_start = (layout.uv_offset / 4) as usize;
    assert_eq!(&floats[0..3], &mesh.positions()[0][..]);
    assert_eq!(&floats[normal_start..normal_start + 3], &mesh.normals()[0][..]);
    assert_eq!(&floats[uv_start..uv_start + 2], &mesh.uvs()[0][..]);
}

#[test]
fn test_upload_sphere() {
    let mut renderer = HeadlessRenderer::new();
    let mesh = SphereMesh::generate(8, 8);
    let geometry = Geometry::upload_sphere(&mut renderer, "sphere", &mesh).unwrap();

    assert_eq!(geometry.name(), "sphere");
    assert_eq!(geometry.vertex_count(), mesh.vertex_count());
    assert_eq!(geometry.buffer().size(), SectionLayout::total_size(mesh.vertex_count()));
    assert_eq!(geometry.topology(), PrimitiveTopology::TriangleList);
    assert_eq!(renderer.stats().buffers, 1);
}

#[test]
fn test_from_buffer_rejects_partial_triangles() {
    let mut renderer = HeadlessRenderer::new();
    let buffer = renderer.create_buffer(BufferDesc {
        name: "b".to_string(),
        data: vec![0; 1024],
    }).unwrap();
    let result = Geometry::from_buffer("bad", 4, buffer);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_from_buffer_rejects_small_buffer() {
    let mut renderer = HeadlessRenderer::new();
    let buffer = renderer.create_buffer(BufferDesc {
        name: "b".to_string(),
        data: vec![0; 32 * 3 - 1],
    }).unwrap();
    assert!(Geometry::from_buffer("small", 3, buffer).is_err());
}
