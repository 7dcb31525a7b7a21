/// SceneBuilder - declarative construction of a SceneGraph.
///
/// Each BodyDesc names its parent; the single body without a parent becomes
/// the root. Bodies may be declared in any order. Children keep the order in
/// which they were declared, which is also their draw order.

use crate::error::Result;
use crate::{engine_bail, engine_debug};
use crate::resource::{MaterialDesc, ResourceManager};
use super::node::{LightRole, NodeKey, SceneNode};
use super::orbit::Orbit;
use super::scene_graph::SceneGraph;

/// One body of a hierarchy
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub name: String,
    /// `None` for the root
    pub parent: Option<String>,
    pub geometry: String,
    pub material: MaterialDesc,
    pub light_role: LightRole,
    pub orbit: Orbit,
}

impl BodyDesc {
    pub fn new(name: &str, geometry: &str, material: MaterialDesc, orbit: Orbit) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            geometry: geometry.to_string(),
            material,
            light_role: LightRole::None,
            orbit,
        }
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_light_role(mut self, role: LightRole) -> Self {
        self.light_role = role;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    bodies: Vec<BodyDesc>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, body: BodyDesc) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn push(&mut self, body: BodyDesc) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[BodyDesc] {
        &self.bodies
    }

    /// Resolve resources, link every body under its parent and validate.
    ///
    /// # Errors
    ///
    /// `InvalidScene` for an unknown parent, geometry or texture, a
    /// duplicate name, a missing or repeated root, or a cycle.
    pub fn build(&self, resources: &ResourceManager) -> Result<SceneGraph> {
        let mut graph = SceneGraph::new();
        let mut keys: Vec<NodeKey> = Vec::with_capacity(self.bodies.len());
        let mut root: Option<NodeKey> = None;

        for body in &self.bodies {
            let node = self.create_node(body, resources)?;
            let key = graph.insert(node)?;
            if body.parent.is_none() {
                if root.is_some() {
                    engine_bail!(@InvalidScene, "orrery::SceneBuilder",
                        "Body '{}' is a second root", body.name);
                }
                root = Some(key);
            }
            keys.push(key);
        }

        let root = match root {
            Some(root) => root,
            None => engine_bail!(@InvalidScene, "orrery::SceneBuilder", "No body without a parent"),
        };
        graph.set_root(root)?;

        for (body, &key) in self.bodies.iter().zip(&keys) {
            if let Some(parent_name) = &body.parent {
                let parent = match graph.find(parent_name) {
                    Some(parent) => parent,
                    None => engine_bail!(@InvalidScene, "orrery::SceneBuilder",
                        "Body '{}' has unknown parent '{}'", body.name, parent_name),
                };
                graph.add_child(parent, key)?;
            }
        }

        graph.validate(resources)?;
        engine_debug!("orrery::SceneBuilder", "Built scene graph with {} nodes", graph.len());
        Ok(graph)
    }

    fn create_node(&self, body: &BodyDesc, resources: &ResourceManager) -> Result<SceneNode> {
        let geometry = match resources.geometry_key(&body.geometry) {
            Some(geometry) => geometry,
            None => engine_bail!(@InvalidScene, "orrery::SceneBuilder",
                "Body '{}' uses unknown geometry '{}'", body.name, body.geometry),
        };
        if let Some(texture) = &body.material.texture {
            if resources.texture_key(texture).is_none() {
                engine_bail!(@InvalidScene, "orrery::SceneBuilder",
                    "Body '{}' uses unknown texture '{}'", body.name, texture);
            }
        }
        body.orbit.params.validate()?;
        let material = resources.create_material(&body.material)?;

        Ok(SceneNode::new(&body.name, material)
            .with_geometry(geometry)
            .with_light_role(body.light_role)
            .with_orbit(body.orbit))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
