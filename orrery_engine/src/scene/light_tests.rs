/// Tests for FrameLights and TwoLightSelector

use super::*;
use crate::resource::Material;

fn node_with_role(role: LightRole) -> SceneNode {
    let material = Material::new(Vec3::ZERO, 0.2, 0.8, 0.0, 1.0).unwrap();
    SceneNode::new("body", material).with_light_role(role)
}

#[test]
fn test_two_lights_are_white() {
    let lights = FrameLights::two(Vec3::X, Vec3::Y);
    assert_eq!(lights.len(), 2);
    assert_eq!(lights.position(0), Some(Vec3::X));
    assert_eq!(lights.position(1), Some(Vec3::Y));
    assert_eq!(lights.position(2), None);
    assert_eq!(lights.color(), Vec3::ONE);
}

#[test]
fn test_primary_uses_first_light() {
    let selector = TwoLightSelector::new();
    assert_eq!(selector.light_index(&node_with_role(LightRole::Primary)), 0);
}

#[test]
fn test_other_roles_use_second_light() {
    let selector = TwoLightSelector::new();
    assert_eq!(selector.light_index(&node_with_role(LightRole::Secondary)), 1);
    assert_eq!(selector.light_index(&node_with_role(LightRole::None)), 1);
}
