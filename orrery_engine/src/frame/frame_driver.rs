/// FrameDriver - advances the simulation and draws one frame at a time.
///
/// Per frame:
/// 1. apply camera input,
/// 2. advance simulated time by the configured step,
/// 3. let the Updater rewrite node transforms,
/// 4. read the two light anchors' positions from their local matrices,
/// 5. let the Drawer traverse the scene into the command list.

use glam::Vec3;
use crate::camera::{Camera, CameraInput};
use crate::config::OrreryConfig;
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_trace};
use crate::renderer::CommandList;
use crate::resource::{ResourceManager, SceneProgram};
use crate::scene::{
    Drawer, DrawStats, FrameLights, FrameView, HierarchyDrawer, NodeKey, OrbitalUpdater,
    SceneGraph, Updater,
};

pub struct FrameDriver {
    config: OrreryConfig,
    scene: SceneGraph,
    resources: ResourceManager,
    program: SceneProgram,
    updater: Box<dyn Updater>,
    drawer: Box<dyn Drawer>,
    camera: Camera,
    /// Nodes whose positions become light 0 and light 1
    light_anchors: [NodeKey; 2],
    time: f32,
    frame_index: u64,
}

impl FrameDriver {
    /// Assemble a driver with the orbital updater and the hierarchy drawer.
    ///
    /// # Errors
    ///
    /// The configuration must validate, the scene must be drawable against
    /// `resources`, and both light anchors must belong to the scene.
    pub fn new(
        config: OrreryConfig,
        scene: SceneGraph,
        resources: ResourceManager,
        program: SceneProgram,
        light_anchors: [NodeKey; 2],
    ) -> Result<Self> {
        config.validate()?;
        scene.validate(&resources)?;
        for anchor in light_anchors {
            if scene.node(anchor).is_none() {
                engine_bail!(@InitializationFailed, "orrery::FrameDriver",
                    "Light anchor is not part of the scene");
            }
        }
        let camera = Camera::from_config(&config);
        engine_debug!("orrery::FrameDriver", "Frame driver ready ({} nodes)", scene.len());
        Ok(Self {
            config,
            scene,
            resources,
            program,
            updater: Box::new(OrbitalUpdater::new()),
            drawer: Box::new(HierarchyDrawer::new()),
            camera,
            light_anchors,
            time: 0.0,
            frame_index: 0,
        })
    }

    pub fn with_updater(mut self, updater: Box<dyn Updater>) -> Self {
        self.updater = updater;
        self
    }

    pub fn with_drawer(mut self, drawer: Box<dyn Drawer>) -> Self {
        self.drawer = drawer;
        self
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneGraph {
        &mut self.scene
    }

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Simulated time of the last drawn frame
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of frames drawn so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Current light positions, read from the anchors' local translations
    pub fn lights(&self) -> Result<FrameLights> {
        let mut positions = [Vec3::ZERO; 2];
        for (position, &anchor) in positions.iter_mut().zip(&self.light_anchors) {
            *position = match self.scene.node(anchor) {
                Some(node) => node.local_matrix().w_axis.truncate(),
                None => engine_bail!(@PreconditionFailed, "orrery::FrameDriver",
                    "Light anchor was removed"),
            };
        }
        Ok(FrameLights::two(positions[0], positions[1]))
    }

    // ===== FRAME =====

    /// Advance by one time step and draw into `cmd`
    pub fn run_frame(
        &mut self,
        input: &CameraInput,
        cmd: &mut dyn CommandList,
    ) -> Result<DrawStats> {
        self.camera.apply_input(input);
        self.time += self.config.time_step;
        self.updater.update(&mut self.scene, self.time)?;

        let frame = FrameView {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            camera_position: self.camera.position(),
            lights: self.lights()?,
        };
        let stats = self.drawer.draw(&self.scene, &self.resources, &self.program, &frame, cmd)?;
        self.frame_index += 1;

        engine_trace!("orrery::FrameDriver",
            "Frame {} at t={:.2}: {} draws", self.frame_index, self.time, stats.draw_calls);
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "frame_driver_tests.rs"]
mod tests;
