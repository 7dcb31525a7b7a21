//! Scene management module
//!
//! Provides the node hierarchy, its declarative construction, and the
//! per-frame strategies (updating transforms, drawing the tree).

mod node;
mod orbit;
mod light;
mod scene_graph;
mod builder;
mod drawer;
mod updater;
pub mod solar_system;

pub use node::{SceneNode, NodeKey, LightRole};
pub use orbit::{Orbit, OrbitalParams, Propagation};
pub use light::{FrameLights, LightSelector, TwoLightSelector};
pub use scene_graph::SceneGraph;
pub use builder::{SceneBuilder, BodyDesc};
pub use drawer::{Drawer, HierarchyDrawer, TransformStack, DrawStats, FrameView};
pub use updater::{Updater, OrbitalUpdater, NoOpUpdater};
