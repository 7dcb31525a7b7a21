/// Renderer module - GPU abstraction traits and the headless backend

// Module declarations
pub mod renderer;
pub mod buffer;
pub mod texture;
pub mod shader;
pub mod command_list;
pub mod headless;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use buffer::*;
pub use texture::*;
pub use shader::*;
pub use command_list::*;
pub use headless::{
    HeadlessRenderer, HeadlessBuffer, HeadlessTexture, HeadlessProgram,
    RecordingCommandList, RecordedCommand, DrawRecord,
};
