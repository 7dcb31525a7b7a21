/// Renderer trait - main rendering factory interface

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{
    Buffer, Texture, ShaderProgram,
    BufferDesc, TextureDesc, ProgramDesc,
};

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Buffers created so far
    pub buffers: u32,
    /// Textures created so far
    pub textures: u32,
    /// Programs linked so far
    pub programs: u32,
    /// Bytes uploaded to GPU memory
    pub bytes_uploaded: u64,
}

/// Main renderer trait
///
/// This is the factory interface for creating GPU resources. Resources are
/// created once at startup; the per-frame path only records commands into a
/// [`crate::renderer::CommandList`].
pub trait Renderer: Send + Sync {
    /// Create a buffer initialized with `desc.data`
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create and upload a 2D texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Compile and link a program
    ///
    /// # Errors
    ///
    /// Compilation or link failures are reported here, once, rather than
    /// per draw.
    fn create_program(&mut self, desc: ProgramDesc) -> Result<Arc<dyn ShaderProgram>>;

    /// Statistics about created resources
    fn stats(&self) -> RendererStats;
}
