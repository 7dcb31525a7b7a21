/// Tests for SceneGraph
///
/// Linking rules (single parent, no cycles), pre-order iteration, depth
/// and validation against a ResourceManager.

use super::*;
use crate::error::Error;
use crate::renderer::{HeadlessRenderer, TextureDesc};
use crate::resource::Material;
use glam::Vec3;
use std::sync::{Arc, Mutex};

// ============================================================================
// Helper Functions
// ============================================================================

fn material() -> Material {
    Material::new(Vec3::ZERO, 0.2, 0.8, 0.0, 1.0).unwrap()
}

fn node(name: &str) -> SceneNode {
    SceneNode::new(name, material())
}

fn create_resources() -> ResourceManager {
    ResourceManager::new(Arc::new(Mutex::new(HeadlessRenderer::new())))
}

/// root -> (a -> (c), b)
fn create_small_tree() -> (SceneGraph, [NodeKey; 4]) {
    let mut graph = SceneGraph::new();
    let root = graph.insert(node("root")).unwrap();
    let a = graph.insert(node("a")).unwrap();
    let b = graph.insert(node("b")).unwrap();
    let c = graph.insert(node("c")).unwrap();
    graph.set_root(root).unwrap();
    graph.add_child(root, a).unwrap();
    graph.add_child(root, b).unwrap();
    graph.add_child(a, c).unwrap();
    (graph, [root, a, b, c])
}

// ============================================================================
// Linking
// ============================================================================

#[test]
fn test_insert_and_find() {
    let mut graph = SceneGraph::new();
    assert!(graph.is_empty());
    let key = graph.insert(node("sun")).unwrap();
    assert_eq!(graph.find("sun"), Some(key));
    assert_eq!(graph.node(key).unwrap().name(), "sun");
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_duplicate_name_rejected() {
    let mut graph = SceneGraph::new();
    graph.insert(node("sun")).unwrap();
    assert!(matches!(graph.insert(node("sun")), Err(Error::InvalidScene(_))));
}

#[test]
fn test_children_keep_insertion_order() {
    let (graph, [root, a, b, c]) = create_small_tree();
    assert_eq!(graph.node(root).unwrap().children(), &[a, b]);
    assert_eq!(graph.node(a).unwrap().children(), &[c]);
    assert_eq!(graph.node(c).unwrap().parent(), Some(a));
}

#[test]
fn test_reparenting_rejected() {
    let (mut graph, [_, _, b, c]) = create_small_tree();
    assert!(graph.add_child(b, c).is_err());
}

#[test]
fn test_same_child_twice_rejected() {
    let (mut graph, [_, a, _, c]) = create_small_tree();
    assert!(graph.add_child(a, c).is_err());
    assert_eq!(graph.node(a).unwrap().children().len(), 1);
}

#[test]
fn test_cycle_rejected() {
    let mut graph = SceneGraph::new();
    let x = graph.insert(node("x")).unwrap();
    let y = graph.insert(node("y")).unwrap();
    graph.add_child(x, y).unwrap();
    let result = graph.add_child(y, x);
    assert!(matches!(result, Err(Error::InvalidScene(ref msg)) if msg.contains("cycle")));
}

#[test]
fn test_self_link_rejected() {
    let mut graph = SceneGraph::new();
    let x = graph.insert(node("x")).unwrap();
    assert!(graph.add_child(x, x).is_err());
}

#[test]
fn test_root_cannot_become_child() {
    let (mut graph, [root, _, _, c]) = create_small_tree();
    assert!(graph.add_child(c, root).is_err());
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_pre_order() {
    let (graph, [root, a, b, c]) = create_small_tree();
    assert_eq!(graph.pre_order(), vec![root, a, c, b]);
}

#[test]
fn test_pre_order_without_root_is_empty() {
    let mut graph = SceneGraph::new();
    graph.insert(node("orphan")).unwrap();
    assert!(graph.pre_order().is_empty());
}

#[test]
fn test_depth() {
    let (graph, [root, a, b, c]) = create_small_tree();
    assert_eq!(graph.depth(root), Some(0));
    assert_eq!(graph.depth(a), Some(1));
    assert_eq!(graph.depth(b), Some(1));
    assert_eq!(graph.depth(c), Some(2));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_requires_geometry() {
    let (graph, _) = create_small_tree();
    let resources = create_resources();
    let result = graph.validate(&resources);
    assert!(matches!(result, Err(Error::InvalidScene(ref msg)) if msg.contains("no geometry")));
}

#[test]
fn test_validate_detects_unreachable_nodes() {
    let mut resources = create_resources();
    let sphere = resources.create_sphere_geometry("sphere", 4, 3).unwrap();
    let mut graph = SceneGraph::new();
    let root = graph.insert(node("root").with_geometry(sphere)).unwrap();
    graph.insert(node("lost").with_geometry(sphere)).unwrap();
    graph.set_root(root).unwrap();

    let result = graph.validate(&resources);
    assert!(matches!(result, Err(Error::InvalidScene(ref msg)) if msg.contains("lost")));
}

#[test]
fn test_validate_complete_graph() {
    let mut resources = create_resources();
    let sphere = resources.create_sphere_geometry("sphere", 4, 3).unwrap();
    let texture = resources.create_texture(TextureDesc::rgba8("t", 1, 1, vec![0; 4])).unwrap();

    let mut graph = SceneGraph::new();
    let root = graph.insert(node("root").with_geometry(sphere)).unwrap();
    let textured = SceneNode::new("moon", material().with_texture(texture)).with_geometry(sphere);
    let moon = graph.insert(textured).unwrap();
    graph.set_root(root).unwrap();
    graph.add_child(root, moon).unwrap();

    assert!(graph.validate(&resources).is_ok());
}

#[test]
fn test_validate_requires_root() {
    let graph = SceneGraph::new();
    assert!(graph.validate(&create_resources()).is_err());
}

#[test]
fn test_validate_lists_every_detached_node_of_a_wide_graph() {
    let mut resources = create_resources();
    let sphere = resources.create_sphere_geometry("sphere", 4, 3).unwrap();
    let mut graph = SceneGraph::new();
    let root = graph.insert(node("root").with_geometry(sphere)).unwrap();
    graph.set_root(root).unwrap();
    for i in 0..2000 {
        let child = graph.insert(node(&format!("body{}", i)).with_geometry(sphere)).unwrap();
        graph.add_child(root, child).unwrap();
    }
    graph.insert(node("stray_a").with_geometry(sphere)).unwrap();
    graph.insert(node("stray_b").with_geometry(sphere)).unwrap();

    match graph.validate(&resources) {
        Err(Error::InvalidScene(msg)) => {
            assert!(msg.contains("stray_a"));
            assert!(msg.contains("stray_b"));
            assert!(!msg.contains("body"));
        }
        other => panic!("expected InvalidScene, got {:?}", other),
    }
}
