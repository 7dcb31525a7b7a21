/// Per-frame lights and the policy assigning them to nodes.

use glam::Vec3;
use super::node::{LightRole, SceneNode};

/// Light positions of the current frame, all sharing one color
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLights {
    positions: Vec<Vec3>,
    color: Vec3,
}

impl FrameLights {
    /// Primary light at index 0, secondary at index 1, white
    pub fn two(primary: Vec3, secondary: Vec3) -> Self {
        Self::new(vec![primary, secondary])
    }

    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            color: Vec3::ONE,
        }
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Policy choosing the light index used to draw a node.
///
/// The traversal asks the selector once per node; the index must be valid
/// for the FrameLights of that frame.
pub trait LightSelector: Send + Sync {
    fn light_index(&self, node: &SceneNode) -> usize;
}

/// Primary-tagged nodes use light 0, every other node uses light 1
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoLightSelector;

impl TwoLightSelector {
    pub fn new() -> Self {
        Self
    }
}

impl LightSelector for TwoLightSelector {
    fn light_index(&self, node: &SceneNode) -> usize {
        match node.light_role() {
            LightRole::Primary => 0,
            LightRole::None | LightRole::Secondary => 1,
        }
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
