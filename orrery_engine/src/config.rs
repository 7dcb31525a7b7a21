//! Engine configuration
//!
//! A single plain struct holding every tunable constant of a session.
//! `Default` reproduces the original scene's fixed values.

use std::time::Duration;
use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;
use crate::log::LogSeverity;

/// Session configuration
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Application name (used as the log source prefix in the demo)
    pub app_name: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Target frames per second
    pub frame_rate: u32,
    /// Simulated time added per frame
    pub time_step: f32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane
    pub z_near: f32,
    /// Far clip plane
    pub z_far: f32,
    /// Sphere tessellation around the Y axis
    pub sphere_slices: u32,
    /// Sphere tessellation from pole to pole
    pub sphere_stacks: u32,
    /// Initial camera position
    pub camera_position: Vec3,
    /// Camera translation per frame while a move key is held
    pub camera_move_step: f32,
    /// Camera yaw change (radians) per frame while a turn key is held
    pub camera_turn_step: f32,
    /// Minimum log severity
    pub log_level: LogSeverity,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            app_name: "Orrery".to_string(),
            width: 1600,
            height: 900,
            frame_rate: 60,
            time_step: 0.01,
            fov_y_degrees: 45.0,
            z_near: 0.01,
            z_far: 1000.0,
            sphere_slices: 32,
            sphere_stacks: 32,
            camera_position: Vec3::new(0.5, 4.0, 20.0),
            camera_move_step: 0.1,
            camera_turn_step: 0.01,
            log_level: LogSeverity::Info,
        }
    }
}

impl OrreryConfig {
    /// Target wall-clock duration of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    /// Width / height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Reject configurations the frame driver cannot run with
    pub fn validate(&self) -> Result<()> {
        const SOURCE: &str = "orrery::Config";

        if self.width == 0 || self.height == 0 {
            engine_bail!(@InitializationFailed, SOURCE,
                "Invalid output size {}x{}", self.width, self.height);
        }
        if self.frame_rate == 0 {
            engine_bail!(@InitializationFailed, SOURCE, "Frame rate must be non-zero");
        }
        if !(self.time_step > 0.0) {
            engine_bail!(@InitializationFailed, SOURCE,
                "Time step must be positive (got {})", self.time_step);
        }
        if !(self.z_near > 0.0) || self.z_near >= self.z_far {
            engine_bail!(@InitializationFailed, SOURCE,
                "Invalid clip range [{}, {}]", self.z_near, self.z_far);
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            engine_bail!(@InitializationFailed, SOURCE,
                "Field of view must be in (0, 180) degrees (got {})", self.fov_y_degrees);
        }
        if self.sphere_slices < 3 || self.sphere_stacks < 2 {
            engine_bail!(@InitializationFailed, SOURCE,
                "Sphere tessellation {}x{} is below 3x2", self.sphere_slices, self.sphere_stacks);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
