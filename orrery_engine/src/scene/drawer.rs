/// Drawing strategies.
///
/// A Drawer walks a SceneGraph and records one draw per node into a
/// command list. `HierarchyDrawer` is the transform-propagating traversal:
///
/// ```text
/// model          = top * node.local
/// push(top * node.propagated)
///     visit children left to right
/// pop()
/// ```
///
/// A node's own scale never reaches its children, and whatever a subtree
/// pushes is popped before its next sibling is visited.

use glam::{Mat3, Mat4, Vec3};
use crate::error::Result;
use crate::{engine_bail, engine_trace};
use crate::renderer::{CommandList, UniformValue};
use crate::resource::{ResourceManager, SceneProgram, SectionLayout};
use super::light::{FrameLights, LightSelector, TwoLightSelector};
use super::node::NodeKey;
use super::scene_graph::SceneGraph;

// ============================================================================
// FRAME VIEW
// ============================================================================

/// Camera and light inputs of one traversal
#[derive(Debug, Clone)]
pub struct FrameView {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub lights: FrameLights,
}

// ============================================================================
// TRANSFORM STACK
// ============================================================================

/// Stack of accumulated transforms, seeded with the identity.
///
/// The seed can never be popped.
#[derive(Debug, Clone)]
pub struct TransformStack {
    matrices: Vec<Mat4>,
    pushes: usize,
    pops: usize,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            matrices: vec![Mat4::IDENTITY],
            pushes: 0,
            pops: 0,
        }
    }

    pub fn top(&self) -> Mat4 {
        self.matrices.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Push `top * matrix`
    pub fn push_composed(&mut self, matrix: Mat4) {
        let composed = self.top() * matrix;
        self.matrices.push(composed);
        self.pushes += 1;
    }

    pub fn pop(&mut self) -> Result<Mat4> {
        if self.matrices.len() <= 1 {
            engine_bail!(@PreconditionFailed, "orrery::TransformStack", "Pop on the identity seed");
        }
        self.pops += 1;
        Ok(self.matrices.pop().unwrap_or(Mat4::IDENTITY))
    }

    /// Number of entries, seed included
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn push_count(&self) -> usize {
        self.pushes
    }

    pub fn pop_count(&self) -> usize {
        self.pops
    }

    /// Only the seed is left and every push was popped
    pub fn is_balanced(&self) -> bool {
        self.matrices.len() == 1 && self.pushes == self.pops
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DRAW STATS
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub draw_calls: usize,
    pub vertices: u64,
    pub max_depth: usize,
    pub pushes: usize,
    pub pops: usize,
}

// ============================================================================
// DRAWER
// ============================================================================

/// Strategy for drawing a scene graph.
///
/// `&self` because drawing does not mutate the drawer; the same drawer is
/// reused across frames.
pub trait Drawer: Send + Sync {
    fn draw(
        &self,
        scene: &SceneGraph,
        resources: &ResourceManager,
        program: &SceneProgram,
        frame: &FrameView,
        cmd: &mut dyn CommandList,
    ) -> Result<DrawStats>;
}

/// Pre-order traversal composing local and propagated transforms
pub struct HierarchyDrawer {
    selector: Box<dyn LightSelector>,
}

impl HierarchyDrawer {
    pub fn new() -> Self {
        Self::with_selector(Box::new(TwoLightSelector::new()))
    }

    pub fn with_selector(selector: Box<dyn LightSelector>) -> Self {
        Self { selector }
    }
}

impl Default for HierarchyDrawer {
    fn default() -> Self {
        Self::new()
    }
}

struct Traversal<'a> {
    scene: &'a SceneGraph,
    resources: &'a ResourceManager,
    program: &'a SceneProgram,
    frame: &'a FrameView,
    selector: &'a dyn LightSelector,
    view_projection: Mat4,
}

impl Traversal<'_> {
    fn visit(
        &self,
        key: NodeKey,
        depth: usize,
        stack: &mut TransformStack,
        stats: &mut DrawStats,
        cmd: &mut dyn CommandList,
    ) -> Result<()> {
        let node = match self.scene.node(key) {
            Some(node) => node,
            None => engine_bail!(@PreconditionFailed, "orrery::HierarchyDrawer",
                "Visited a stale node key"),
        };
        let geometry_key = match node.geometry() {
            Some(geometry) => geometry,
            None => engine_bail!(@PreconditionFailed, "orrery::HierarchyDrawer",
                "Node '{}' has no geometry", node.name()),
        };
        let geometry = match self.resources.geometry(geometry_key) {
            Some(geometry) => geometry,
            None => engine_bail!(@PreconditionFailed, "orrery::HierarchyDrawer",
                "Node '{}' references a released geometry", node.name()),
        };
        let texture = match node.material().texture() {
            None => None,
            Some(texture_key) => match self.resources.texture(texture_key) {
                Some(texture) => Some(texture),
                None => engine_bail!(@PreconditionFailed, "orrery::HierarchyDrawer",
                    "Node '{}' references a released texture", node.name()),
            },
        };
        let light_index = self.selector.light_index(node);
        let light_position = match self.frame.lights.position(light_index) {
            Some(position) => position,
            None => engine_bail!(@PreconditionFailed, "orrery::HierarchyDrawer",
                "Node '{}' selects light {} but only {} lights exist",
                node.name(), light_index, self.frame.lights.len()),
        };

        let model = stack.top() * *node.local_matrix();
        let mvp = self.view_projection * model;
        let inv_model_3x3 = Mat3::from_mat4(model).inverse().transpose();
        let locations = self.program.locations();
        let layout = geometry.layout();
        let material = node.material();

        cmd.bind_vertex_buffer(geometry.buffer())?;
        cmd.set_vertex_attribute(
            locations.position,
            SectionLayout::POSITION_COMPONENTS,
            layout.position_offset,
        )?;
        cmd.set_vertex_attribute(
            locations.normal,
            SectionLayout::NORMAL_COMPONENTS,
            layout.normal_offset,
        )?;
        cmd.set_vertex_attribute(locations.uv, SectionLayout::UV_COMPONENTS, layout.uv_offset)?;
        cmd.bind_texture(0, texture)?;

        cmd.set_uniform(locations.mvp, UniformValue::Mat4(mvp))?;
        cmd.set_uniform(locations.model, UniformValue::Mat4(model))?;
        cmd.set_uniform(locations.inv_model_3x3, UniformValue::Mat3(inv_model_3x3))?;
        cmd.set_uniform(locations.mtl_color, UniformValue::Vec3(material.color()))?;
        cmd.set_uniform(locations.mtl_cts, UniformValue::Vec4(material.packed_constants()))?;
        cmd.set_uniform(locations.light_pos, UniformValue::Vec3(light_position))?;
        cmd.set_uniform(locations.light_color, UniformValue::Vec3(self.frame.lights.color()))?;
        cmd.set_uniform(locations.camera_position, UniformValue::Vec3(self.frame.camera_position))?;

        cmd.draw(geometry.topology(), 0, geometry.vertex_count())?;
        stats.draw_calls += 1;
        stats.vertices += geometry.vertex_count() as u64;
        stats.max_depth = stats.max_depth.max(depth);

        stack.push_composed(*node.propagated_matrix());
        for &child in node.children() {
            self.visit(child, depth + 1, stack, stats, cmd)?;
        }
        stack.pop()?;
        Ok(())
    }
}

impl Drawer for HierarchyDrawer {
    fn draw(
        &self,
        scene: &SceneGraph,
        resources: &ResourceManager,
        program: &SceneProgram,
        frame: &FrameView,
        cmd: &mut dyn CommandList,
    ) -> Result<DrawStats> {
        let mut stats = DrawStats::default();
        let root = match scene.root() {
            Some(root) => root,
            None => return Ok(stats),
        };

        let traversal = Traversal {
            scene,
            resources,
            program,
            frame,
            selector: self.selector.as_ref(),
            view_projection: frame.projection * frame.view,
        };
        let mut stack = TransformStack::new();

        cmd.use_program(program.program())?;
        traversal.visit(root, 0, &mut stack, &mut stats, cmd)?;

        stats.pushes = stack.push_count();
        stats.pops = stack.pop_count();
        if !stack.is_balanced() {
            engine_bail!(@PreconditionFailed, "orrery::HierarchyDrawer",
                "Transform stack unbalanced after traversal ({} pushes, {} pops)",
                stats.pushes, stats.pops);
        }
        engine_trace!("orrery::HierarchyDrawer",
            "Drew {} nodes ({} vertices)", stats.draw_calls, stats.vertices);
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
