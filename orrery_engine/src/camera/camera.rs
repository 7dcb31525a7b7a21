/// Camera - free-flying viewer with a yaw angle.
///
/// The camera's world transform is `RotateY(yaw) * Translate(position)`;
/// the view matrix is its inverse. Input moves the camera along the world
/// axes, matching the keyboard behavior of the original viewer.

use glam::{Mat4, Vec3};
use crate::config::OrreryConfig;

/// Per-frame movement request, every axis within [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    /// +1 moves toward +X, -1 toward -X
    pub right: f32,
    /// +1 moves toward -Z
    pub forward: f32,
    /// +1 moves toward +Y
    pub up: f32,
    /// +1 increases the yaw
    pub turn: f32,
}

impl CameraInput {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    fov_y_degrees: f32,
    aspect_ratio: f32,
    z_near: f32,
    z_far: f32,
    move_step: f32,
    turn_step: f32,
}

impl Camera {
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            position: config.camera_position,
            yaw: 0.0,
            fov_y_degrees: config.fov_y_degrees,
            aspect_ratio: config.aspect_ratio(),
            z_near: config.z_near,
            z_far: config.z_far,
            move_step: config.camera_move_step,
            turn_step: config.camera_turn_step,
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation around +Y in radians
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw) * Mat4::from_translation(self.position)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// OpenGL-style right-handed perspective projection
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.z_near,
            self.z_far,
        )
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Apply one frame of input using the configured step sizes
    pub fn apply_input(&mut self, input: &CameraInput) {
        let axis = |value: f32| value.clamp(-1.0, 1.0);
        self.position.x += axis(input.right) * self.move_step;
        self.position.z -= axis(input.forward) * self.move_step;
        self.position.y += axis(input.up) * self.move_step;
        self.yaw += axis(input.turn) * self.turn_step;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
