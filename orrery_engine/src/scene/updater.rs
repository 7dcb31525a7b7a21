/// Update strategies.
///
/// An Updater rewrites node transforms once per frame, before drawing.

use crate::error::Result;
use super::scene_graph::SceneGraph;

/// Strategy for advancing scene transforms.
///
/// `&mut self` allows stateful implementations (accumulators, caches).
pub trait Updater: Send + Sync {
    /// Recompute transforms for simulated time `time`.
    ///
    /// Returns the number of nodes whose transforms were written.
    fn update(&mut self, scene: &mut SceneGraph, time: f32) -> Result<usize>;
}

/// No-op updater. Transforms keep whatever was set by hand.
pub struct NoOpUpdater;

impl NoOpUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl Updater for NoOpUpdater {
    fn update(&mut self, _scene: &mut SceneGraph, _time: f32) -> Result<usize> {
        Ok(0)
    }
}

/// Applies each node's orbit as a pure function of time.
///
/// Nodes without an orbit are left untouched.
pub struct OrbitalUpdater;

impl OrbitalUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrbitalUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl Updater for OrbitalUpdater {
    fn update(&mut self, scene: &mut SceneGraph, time: f32) -> Result<usize> {
        let mut updated = 0;
        for (_, node) in scene.iter_mut() {
            if let Some(orbit) = node.orbit().copied() {
                node.set_local_matrix(orbit.local_matrix(time));
                node.set_propagated_matrix(orbit.propagated_matrix(time));
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
