/// SceneGraph - arena holding the node tree.
///
/// Nodes live in a SlotMap and are addressed by stable NodeKeys. A parent
/// owns the ordered list of its children's keys; a node has at most one
/// parent, and `add_child` refuses any link that would make a node its own
/// ancestor, so the graph is always a forest.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use crate::error::Result;
use crate::engine_bail;
use crate::resource::ResourceManager;
use super::node::{NodeKey, SceneNode};

pub struct SceneGraph {
    nodes: SlotMap<NodeKey, SceneNode>,
    names: FxHashMap<String, NodeKey>,
    root: Option<NodeKey>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            names: FxHashMap::default(),
            root: None,
        }
    }

    /// Insert a detached node. Names are unique within a graph.
    pub fn insert(&mut self, node: SceneNode) -> Result<NodeKey> {
        if self.names.contains_key(node.name()) {
            engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Duplicate node name '{}'", node.name());
        }
        let name = node.name().to_string();
        let mut node = node;
        node.parent = None;
        node.children.clear();
        let key = self.nodes.insert(node);
        self.names.insert(name, key);
        Ok(key)
    }

    /// Make a detached node the root of the drawn tree
    pub fn set_root(&mut self, key: NodeKey) -> Result<()> {
        let node = match self.nodes.get(key) {
            Some(node) => node,
            None => engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Root key is not in the graph"),
        };
        if node.parent.is_some() {
            engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Node '{}' has a parent and cannot be the root", node.name());
        }
        self.root = Some(key);
        Ok(())
    }

    /// Append `child` to the children of `parent`.
    ///
    /// # Errors
    ///
    /// Fails if either key is unknown, if `child` already has a parent, is
    /// the root, or is an ancestor of `parent`.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<()> {
        if !self.nodes.contains_key(parent) {
            engine_bail!(@InvalidScene, "orrery::SceneGraph", "Parent key is not in the graph");
        }
        let child_node = match self.nodes.get(child) {
            Some(node) => node,
            None => engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Child key is not in the graph"),
        };
        if child_node.parent.is_some() {
            engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Node '{}' already has a parent", child_node.name());
        }
        if self.root == Some(child) {
            engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Root node '{}' cannot become a child", child_node.name());
        }

        // Walk up from the parent: reaching the child means a cycle
        let mut cursor = Some(parent);
        while let Some(key) = cursor {
            if key == child {
                engine_bail!(@InvalidScene, "orrery::SceneGraph",
                    "Linking '{}' under '{}' would create a cycle",
                    child_node.name(), self.nodes[parent].name());
            }
            cursor = self.nodes.get(key).and_then(|node| node.parent);
        }

        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    // ===== ACCESS =====

    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    pub fn find(&self, name: &str) -> Option<NodeKey> {
        self.names.get(name).copied()
    }

    /// Iterate over every node, attached or not, in storage order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeKey, &mut SceneNode)> {
        self.nodes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of ancestors of `key` (the root has depth 0)
    pub fn depth(&self, key: NodeKey) -> Option<usize> {
        let mut node = self.nodes.get(key)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Keys reachable from the root: parent first, siblings left to right
    pub fn pre_order(&self) -> Vec<NodeKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut pending: Vec<NodeKey> = self.root.into_iter().collect();
        while let Some(key) = pending.pop() {
            if let Some(node) = self.nodes.get(key) {
                order.push(key);
                pending.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    /// Check that the graph can be drawn against `resources`.
    ///
    /// Every node must be reachable from the root and reference a live
    /// geometry; a textured material must reference a live texture.
    pub fn validate(&self, resources: &ResourceManager) -> Result<()> {
        if self.root.is_none() {
            engine_bail!(@InvalidScene, "orrery::SceneGraph", "Scene has no root");
        }
        let reachable = self.pre_order();
        if reachable.len() != self.nodes.len() {
            let visited: FxHashSet<NodeKey> = reachable.iter().copied().collect();
            let detached: Vec<&str> = self.nodes.iter()
                .filter(|(key, _)| !visited.contains(key))
                .map(|(_, node)| node.name())
                .collect();
            engine_bail!(@InvalidScene, "orrery::SceneGraph",
                "Nodes not reachable from the root: {}", detached.join(", "));
        }
        for key in reachable {
            let node = &self.nodes[key];
            match node.geometry() {
                None => engine_bail!(@InvalidScene, "orrery::SceneGraph",
                    "Node '{}' has no geometry", node.name()),
                Some(geometry) if resources.geometry(geometry).is_none() => engine_bail!(
                    @InvalidScene, "orrery::SceneGraph",
                    "Node '{}' references a missing geometry", node.name()),
                Some(_) => {}
            }
            if let Some(texture) = node.material().texture() {
                if resources.texture(texture).is_none() {
                    engine_bail!(@InvalidScene, "orrery::SceneGraph",
                        "Node '{}' references a missing texture", node.name());
                }
            }
        }
        Ok(())
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
