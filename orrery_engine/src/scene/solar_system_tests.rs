/// Tests for the solar system body table

use super::*;
use crate::renderer::{HeadlessRenderer, TextureDesc};
use crate::resource::ResourceManager;
use crate::scene::scene_graph::SceneGraph;
use std::sync::{Arc, Mutex};

fn build() -> (SceneGraph, ResourceManager) {
    let mut resources = ResourceManager::new(Arc::new(Mutex::new(HeadlessRenderer::new())));
    resources.create_sphere_geometry(SPHERE_GEOMETRY, 8, 6).unwrap();
    for name in texture_names() {
        resources.create_texture(TextureDesc::rgba8(&name, 1, 1, vec![128; 4])).unwrap();
    }
    let graph = solar_system().build(&resources).unwrap();
    (graph, resources)
}

fn names_in_draw_order(graph: &SceneGraph) -> Vec<String> {
    graph.pre_order().into_iter()
        .map(|key| graph.node(key).unwrap().name().to_string())
        .collect()
}

#[test]
fn test_draw_order() {
    let (graph, _) = build();
    assert_eq!(names_in_draw_order(&graph), vec![
        "sky", "pivot",
        "sun", "mercury", "venus", "earth", "moon",
        "mars", "jupiter", "saturn", "uranus", "neptune",
        "sun_two", "pandora", "coruscant", "diana", "anubis", "loki",
    ]);
    assert_eq!(graph.len(), 18);
}

#[test]
fn test_texture_names_are_distinct() {
    let names = texture_names();
    assert_eq!(names[0], "stars");
    assert_eq!(names.iter().filter(|name| name.as_str() == "sun").count(), 1);
    assert!(names.contains(&"death_star".to_string()));
    assert_eq!(names.len(), 17);
}

#[test]
fn test_light_roles() {
    let (graph, _) = build();
    let role = |name: &str| graph.node(graph.find(name).unwrap()).unwrap().light_role();
    assert_eq!(role("sky"), LightRole::Secondary);
    assert_eq!(role("pivot"), LightRole::None);
    assert_eq!(role("sun"), LightRole::None);
    assert_eq!(role("earth"), LightRole::Secondary);
    assert_eq!(role("loki"), LightRole::Primary);
}

#[test]
fn test_moon_depth() {
    let (graph, _) = build();
    assert_eq!(graph.depth(graph.find("moon").unwrap()), Some(4));
}

#[test]
fn test_light_anchors() {
    let (graph, _) = build();
    let [primary, secondary] = light_anchors(&graph).unwrap();
    assert_eq!(graph.node(primary).unwrap().name(), "sun_two");
    assert_eq!(graph.node(secondary).unwrap().name(), "sun");
    assert!(light_anchors(&SceneGraph::new()).is_err());
}

#[test]
fn test_bodies_with_satellites_propagate_their_orbit() {
    let (graph, _) = build();
    for name in ["sun", "earth", "sun_two"] {
        let node = graph.node(graph.find(name).unwrap()).unwrap();
        assert_eq!(node.orbit().unwrap().propagation, Propagation::Orbit, "{}", name);
    }
    let sky = graph.node(graph.find("sky").unwrap()).unwrap();
    assert_eq!(*sky.propagated_matrix(), glam::Mat4::IDENTITY);
}

#[test]
fn test_earth_material() {
    let (graph, _) = build();
    let earth = graph.node(graph.find("earth").unwrap()).unwrap();
    assert_eq!(earth.material().packed_constants(), glam::Vec4::new(0.2, 0.9, 0.0, 1.0));
}
