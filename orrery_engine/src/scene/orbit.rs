/// Orbital motion of a body around its parent.
///
/// ```text
/// local      = Rotate(speed * t, axis) * Translate(radius, 0, 0) * Scale(scale)
/// propagated = Rotate(speed * t, axis) * Translate(radius, 0, 0)   (Propagation::Orbit)
///            = Identity                                            (Propagation::Fixed)
/// ```
///
/// Satellites follow the orbital position of their parent but never its
/// scale.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::engine_bail;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParams {
    /// Angular speed in radians per unit of simulated time
    pub speed: f32,
    /// Signed distance to the parent along the rotated X axis
    pub radius: f32,
    /// Rotation axis, normalized when the matrices are built
    pub axis: Vec3,
    pub scale: Vec3,
}

impl OrbitalParams {
    /// Orbit around +Y with a uniform scale
    pub fn new(speed: f32, radius: f32, scale: f32) -> Self {
        Self {
            speed,
            radius,
            axis: Vec3::Y,
            scale: Vec3::splat(scale),
        }
    }

    /// Static body at the parent origin
    pub fn stationary(scale: f32) -> Self {
        Self::new(0.0, 0.0, scale)
    }

    pub fn with_axis(mut self, axis: Vec3) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Check that the matrices built from these parameters are invertible
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || !self.radius.is_finite() {
            engine_bail!(@InvalidScene, "orrery::OrbitalParams",
                "Speed and radius must be finite (speed {}, radius {})", self.speed, self.radius);
        }
        if !self.axis.is_finite() || self.axis.length_squared() == 0.0 {
            engine_bail!(@InvalidScene, "orrery::OrbitalParams",
                "Invalid rotation axis {:?}", self.axis);
        }
        if !self.scale.is_finite() || self.scale.cmpeq(Vec3::ZERO).any() {
            engine_bail!(@InvalidScene, "orrery::OrbitalParams", "Invalid scale {:?}", self.scale);
        }
        Ok(())
    }

    fn rotation(&self, time: f32) -> Mat4 {
        let axis = self.axis.try_normalize().unwrap_or(Vec3::Y);
        Mat4::from_axis_angle(axis, self.speed * time)
    }

    /// Rotation and translation only
    pub fn orbit_matrix(&self, time: f32) -> Mat4 {
        self.rotation(time) * Mat4::from_translation(Vec3::new(self.radius, 0.0, 0.0))
    }

    /// Orbit followed by the body's own scale
    pub fn body_matrix(&self, time: f32) -> Mat4 {
        self.orbit_matrix(time) * Mat4::from_scale(self.scale)
    }
}

/// What a body hands down to its satellites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Satellites follow the body's orbital position
    Orbit,
    /// Satellites stay in the parent's frame
    #[default]
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub params: OrbitalParams,
    pub propagation: Propagation,
}

impl Orbit {
    pub fn new(params: OrbitalParams, propagation: Propagation) -> Self {
        Self { params, propagation }
    }

    pub fn local_matrix(&self, time: f32) -> Mat4 {
        self.params.body_matrix(time)
    }

    pub fn propagated_matrix(&self, time: f32) -> Mat4 {
        match self.propagation {
            Propagation::Orbit => self.params.orbit_matrix(time),
            Propagation::Fixed => Mat4::IDENTITY,
        }
    }
}

#[cfg(test)]
#[path = "orbit_tests.rs"]
mod tests;
