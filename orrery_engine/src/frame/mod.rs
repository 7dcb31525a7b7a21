//! Frame module
//!
//! Drives the per-frame update/draw sequence and paces it to a fixed rate.

mod frame_driver;
mod frame_pacer;

pub use frame_driver::FrameDriver;
pub use frame_pacer::FramePacer;
