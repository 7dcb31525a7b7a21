/// CommandList trait - for recording rendering commands

use std::sync::Arc;
use glam::{Mat3, Mat4, Vec3, Vec4};
use crate::error::Result;
use crate::renderer::{Buffer, ShaderProgram, Texture};

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
}

/// Value uploaded to a uniform location
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Mat3(Mat3),
    Vec3(Vec3),
    Vec4(Vec4),
}

/// Command list for recording rendering commands
///
/// State set on the command list (program, vertex buffer, attributes,
/// texture, uniforms) persists until overwritten, as in an immediate-mode
/// API.
pub trait CommandList: Send {
    /// Make `program` current for subsequent uniforms and draws
    fn use_program(&mut self, program: &Arc<dyn ShaderProgram>) -> Result<()>;

    /// Bind the vertex buffer attribute pointers refer to
    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>) -> Result<()>;

    /// Point an attribute at a tightly packed float stream of the bound buffer
    ///
    /// # Arguments
    ///
    /// * `location` - Attribute location in the current program
    /// * `components` - Floats per vertex (2 or 3)
    /// * `byte_offset` - Offset of the stream's first element
    fn set_vertex_attribute(
        &mut self,
        location: u32,
        components: u32,
        byte_offset: u64,
    ) -> Result<()>;

    /// Bind a texture to a texture unit; `None` binds handle 0
    fn bind_texture(&mut self, unit: u32, texture: Option<&Arc<dyn Texture>>) -> Result<()>;

    /// Upload a uniform value to the current program
    fn set_uniform(&mut self, location: u32, value: UniformValue) -> Result<()>;

    /// Draw `vertex_count` vertices starting at `first_vertex`
    fn draw(
        &mut self,
        topology: PrimitiveTopology,
        first_vertex: u32,
        vertex_count: u32,
    ) -> Result<()>;
}
