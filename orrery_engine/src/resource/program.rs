/// Scene shader program with its resolved input locations.
///
/// All attribute and uniform locations are looked up once at load time.
/// A program that does not expose one of the required names is rejected
/// with a single error listing every missing input.

use std::sync::Arc;
use crate::error::Result;
use crate::{engine_bail, engine_info};
use crate::renderer::{ProgramDesc, Renderer, ShaderProgram};

pub const ATTR_POSITION: &str = "vPosition";
pub const ATTR_NORMAL: &str = "vNormal";
pub const ATTR_UV: &str = "Vuv";

pub const UNIFORM_MVP: &str = "uMVP";
pub const UNIFORM_MODEL: &str = "uModel";
pub const UNIFORM_INV_MODEL_3X3: &str = "uInvModel3x3";
pub const UNIFORM_MTL_COLOR: &str = "uMtlColor";
pub const UNIFORM_MTL_CTS: &str = "uMtlCts";
pub const UNIFORM_LIGHT_POS: &str = "uLightPos";
pub const UNIFORM_LIGHT_COLOR: &str = "uLightColor";
pub const UNIFORM_CAMERA_POSITION: &str = "uCameraPosition";

const VERTEX_SOURCE: &str = include_str!("../../shaders/scene.vert");
const FRAGMENT_SOURCE: &str = include_str!("../../shaders/scene.frag");

/// Locations of every input the traversal writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramLocations {
    pub position: u32,
    pub normal: u32,
    pub uv: u32,
    pub mvp: u32,
    pub model: u32,
    pub inv_model_3x3: u32,
    pub mtl_color: u32,
    pub mtl_cts: u32,
    pub light_pos: u32,
    pub light_color: u32,
    pub camera_position: u32,
}

pub struct SceneProgram {
    program: Arc<dyn ShaderProgram>,
    locations: ProgramLocations,
}

impl SceneProgram {
    /// Descriptor of the bundled scene shaders
    pub fn default_desc() -> ProgramDesc {
        ProgramDesc {
            name: "scene".to_string(),
            vertex_source: VERTEX_SOURCE.to_string(),
            fragment_source: FRAGMENT_SOURCE.to_string(),
        }
    }

    /// Compile `desc` and resolve its inputs
    pub fn load(renderer: &mut dyn Renderer, desc: ProgramDesc) -> Result<Self> {
        let name = desc.name.clone();
        let program = renderer.create_program(desc)?;
        let scene_program = Self::from_program(program)?;
        engine_info!("orrery::SceneProgram",
            "Program '{}' loaded (id {})", name, scene_program.program.id());
        Ok(scene_program)
    }

    /// Resolve the required inputs of an already linked program
    pub fn from_program(program: Arc<dyn ShaderProgram>) -> Result<Self> {
        let mut missing: Vec<&str> = Vec::new();
        let mut attribute = |name: &'static str| {
            program.attribute_location(name).unwrap_or_else(|| {
                missing.push(name);
                0
            })
        };
        let position = attribute(ATTR_POSITION);
        let normal = attribute(ATTR_NORMAL);
        let uv = attribute(ATTR_UV);

        let mut uniform = |name: &'static str| {
            program.uniform_location(name).unwrap_or_else(|| {
                missing.push(name);
                0
            })
        };
        let locations = ProgramLocations {
            position,
            normal,
            uv,
            mvp: uniform(UNIFORM_MVP),
            model: uniform(UNIFORM_MODEL),
            inv_model_3x3: uniform(UNIFORM_INV_MODEL_3X3),
            mtl_color: uniform(UNIFORM_MTL_COLOR),
            mtl_cts: uniform(UNIFORM_MTL_CTS),
            light_pos: uniform(UNIFORM_LIGHT_POS),
            light_color: uniform(UNIFORM_LIGHT_COLOR),
            camera_position: uniform(UNIFORM_CAMERA_POSITION),
        };

        if !missing.is_empty() {
            engine_bail!(@MissingShaderInput, "orrery::SceneProgram",
                "Program {} lacks {}", program.id(), missing.join(", "));
        }
        Ok(Self { program, locations })
    }

    pub fn program(&self) -> &Arc<dyn ShaderProgram> {
        &self.program
    }

    pub fn locations(&self) -> &ProgramLocations {
        &self.locations
    }
}

#[cfg(test)]
#[path = "program_tests.rs"]
mod tests;
