/*!
# Orrery Engine

Scene-graph renderer for a small animated solar system.

Bodies form a tree in which every node carries two transforms: a local one
used only for its own draw, and a propagated one inherited by its
satellites. Each frame an updater moves the bodies along their orbits and a
drawer walks the tree, composing transforms on a stack and recording one
draw per node into a command list.

## Architecture

- **Renderer**: factory trait for GPU buffers, textures and shader programs
- **CommandList**: immediate-mode command recording (program, buffer, texture, uniforms, draw)
- **ResourceManager**: shared geometry and texture tables, referenced by key
- **SceneGraph**: arena of nodes, built declaratively by `SceneBuilder`
- **Drawer / Updater**: per-frame strategies (transform propagation, orbital motion)
- **FrameDriver**: advances simulated time, updates, draws

A headless backend (`HeadlessRenderer`, `RecordingCommandList`) records
commands in memory and is used by the demo and the tests.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod camera;
pub mod frame;

// Main orrery namespace module
pub mod orrery {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging facade
    pub use crate::engine::Engine;

    // Session configuration
    pub use crate::config::OrreryConfig;

    // Renderer factory trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Frame loop sub-module
    pub mod frame {
        pub use crate::frame::*;
    }
}

// Re-export math library at crate root
pub use glam;
