/// SceneNode - one body of the scene hierarchy.
///
/// A node carries two independent transforms:
/// - `local_matrix` places and sizes the node's own draw,
/// - `propagated_matrix` is what its children inherit.
///
/// Children are owned by the node through keys into the SceneGraph arena.
/// Geometry and texture are non-owning keys into the ResourceManager.

use glam::Mat4;
use slotmap::new_key_type;
use crate::error::Result;
use crate::engine_bail;
use crate::resource::{GeometryKey, Material};
use super::orbit::Orbit;

new_key_type! {
    /// Stable key of a node in a SceneGraph
    pub struct NodeKey;
}

// ============================================================================
// LIGHT ROLE
// ============================================================================

/// Which of the frame lights illuminates a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightRole {
    #[default]
    None,
    Primary,
    Secondary,
}

impl LightRole {
    /// Convert a numeric tag (0 = None, 1 = Primary, 2 = Secondary)
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(LightRole::None),
            1 => Ok(LightRole::Primary),
            2 => Ok(LightRole::Secondary),
            _ => engine_bail!(@InvalidScene, "orrery::LightRole", "Unknown light role tag {}", tag),
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            LightRole::None => 0,
            LightRole::Primary => 1,
            LightRole::Secondary => 2,
        }
    }
}

// ============================================================================
// SCENE NODE
// ============================================================================

#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    local_matrix: Mat4,
    propagated_matrix: Mat4,
    geometry: Option<GeometryKey>,
    material: Material,
    light_role: LightRole,
    orbit: Option<Orbit>,
    pub(super) parent: Option<NodeKey>,
    pub(super) children: Vec<NodeKey>,
}

impl SceneNode {
    /// Create a detached node with identity transforms and no geometry
    pub fn new(name: &str, material: Material) -> Self {
        Self {
            name: name.to_string(),
            local_matrix: Mat4::IDENTITY,
            propagated_matrix: Mat4::IDENTITY,
            geometry: None,
            material,
            light_role: LightRole::None,
            orbit: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_geometry(mut self, geometry: GeometryKey) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_light_role(mut self, role: LightRole) -> Self {
        self.light_role = role;
        self
    }

    pub fn with_local_matrix(mut self, matrix: Mat4) -> Self {
        self.local_matrix = matrix;
        self
    }

    pub fn with_propagated_matrix(mut self, matrix: Mat4) -> Self {
        self.propagated_matrix = matrix;
        self
    }

    /// Attach orbital motion; both transforms are set for time 0
    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.local_matrix = orbit.local_matrix(0.0);
        self.propagated_matrix = orbit.propagated_matrix(0.0);
        self.orbit = Some(orbit);
        self
    }

    // ===== GETTERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local_matrix(&self) -> &Mat4 {
        &self.local_matrix
    }

    pub fn propagated_matrix(&self) -> &Mat4 {
        &self.propagated_matrix
    }

    /// `None` marks a node that cannot be drawn
    pub fn geometry(&self) -> Option<GeometryKey> {
        self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn light_role(&self) -> LightRole {
        self.light_role
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Children in traversal order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    // ===== SETTERS =====

    pub fn set_local_matrix(&mut self, matrix: Mat4) {
        self.local_matrix = matrix;
    }

    pub fn set_propagated_matrix(&mut self, matrix: Mat4) {
        self.propagated_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
