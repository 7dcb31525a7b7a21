//! Resource management module
//!
//! Provides the shared geometry, textures, materials and the scene shader
//! program referenced by scene nodes.

mod resource_manager;
pub mod geometry;
pub mod material;
pub mod program;

pub use resource_manager::{ResourceManager, GeometryKey, TextureKey};
pub use geometry::{Geometry, SphereMesh, SectionLayout};
pub use material::{Material, MaterialDesc};
pub use program::{SceneProgram, ProgramLocations};
