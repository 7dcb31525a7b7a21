/// Tests for ResourceManager

use super::*;
use crate::error::Error;
use crate::renderer::HeadlessRenderer;
use glam::Vec3;

fn create_manager() -> ResourceManager {
    ResourceManager::new(Arc::new(Mutex::new(HeadlessRenderer::new())))
}

fn pixel_texture(name: &str) -> TextureDesc {
    TextureDesc::rgba8(name, 1, 1, vec![255, 255, 255, 255])
}

#[test]
fn test_create_sphere_geometry() {
    let mut manager = create_manager();
    let key = manager.create_sphere_geometry("sphere", 8, 4).unwrap();

    let geometry = manager.geometry(key).unwrap();
    assert_eq!(geometry.vertex_count(), 8 * 4 * 6);
    assert_eq!(manager.geometry_key("sphere"), Some(key));
    assert_eq!(manager.geometry_count(), 1);
    assert_eq!(manager.renderer().lock().unwrap().stats().buffers, 1);
}

#[test]
fn test_duplicate_geometry_name_fails_before_upload() {
    let mut manager = create_manager();
    manager.create_sphere_geometry("sphere", 8, 4).unwrap();
    let result = manager.create_sphere_geometry("sphere", 8, 4);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert_eq!(manager.renderer().lock().unwrap().stats().buffers, 1);
}

#[test]
fn test_create_texture_and_lookup() {
    let mut manager = create_manager();
    let key = manager.create_texture(pixel_texture("sun")).unwrap();

    assert_eq!(manager.texture_key("sun"), Some(key));
    assert_eq!(manager.texture_name(key), Some("sun"));
    assert!(manager.texture(key).is_some());
    assert_eq!(manager.texture_count(), 1);
    assert!(manager.texture_key("moon").is_none());
}

#[test]
fn test_duplicate_texture_name_fails() {
    let mut manager = create_manager();
    manager.create_texture(pixel_texture("sun")).unwrap();
    assert!(manager.create_texture(pixel_texture("sun")).is_err());
}

#[test]
fn test_invalid_texture_data_propagates_backend_error() {
    let mut manager = create_manager();
    let result = manager.create_texture(TextureDesc::rgba8("bad", 4, 4, vec![0; 3]));
    assert!(result.is_err());
    assert_eq!(manager.texture_count(), 0);
}

#[test]
fn test_create_material_resolves_texture() {
    let mut manager = create_manager();
    let key = manager.create_texture(pixel_texture("earth")).unwrap();

    let material = manager.create_material(&MaterialDesc::lit("earth", 0.2, 0.9, 0.0)).unwrap();
    assert_eq!(material.texture(), Some(key));
    assert_eq!(material.kd(), 0.9);
}

#[test]
fn test_create_material_unknown_texture_fails() {
    let manager = create_manager();
    let result = manager.create_material(&MaterialDesc::lit("pluto", 0.2, 0.8, 0.0));
    assert!(matches!(result, Err(Error::InvalidResource(ref msg)) if msg.contains("pluto")));
}

#[test]
fn test_create_untextured_material() {
    let manager = create_manager();
    let desc = MaterialDesc {
        color: Vec3::new(0.5, 0.5, 0.5),
        ka: 0.3,
        kd: 0.7,
        ks: 0.0,
        alpha: 1.0,
        texture: None,
    };
    let material = manager.create_material(&desc).unwrap();
    assert!(material.texture().is_none());
}
