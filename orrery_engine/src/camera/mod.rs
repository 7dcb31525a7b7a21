//! Camera module
//!
//! The viewer's pose, its view and projection matrices, and per-frame
//! movement input.

mod camera;

pub use camera::{Camera, CameraInput};
