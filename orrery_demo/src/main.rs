//! Headless solar system demo
//!
//! Builds the solar system against the recording backend, then runs a
//! bounded number of paced frames and logs what each frame drew.
//!
//! Usage: orrery_demo [FRAMES]

use std::sync::{Arc, Mutex};
use std::time::Instant;
use orrery_engine::orrery::{Engine, OrreryConfig, Result};
use orrery_engine::orrery::camera::CameraInput;
use orrery_engine::orrery::frame::{FrameDriver, FramePacer};
use orrery_engine::orrery::render::{HeadlessRenderer, RecordingCommandList, TextureDesc};
use orrery_engine::orrery::resource::{ResourceManager, SceneProgram};
use orrery_engine::orrery::scene::solar_system::{self, SPHERE_GEOMETRY};
use orrery_engine::{engine_bail, engine_info};

const SOURCE: &str = "orrery::Demo";
const DEFAULT_FRAMES: u64 = 120;

fn frame_count() -> Result<u64> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_FRAMES),
        Some(arg) => match arg.parse::<u64>() {
            Ok(frames) => Ok(frames),
            Err(_) => engine_bail!(@InitializationFailed, SOURCE, "Invalid frame count '{}'", arg),
        },
    }
}

/// 2x2 placeholder texel block, tinted from the texture name
fn placeholder_texture(name: &str) -> TextureDesc {
    let seed = name.bytes().fold(0x811c_9dc5u32, |hash, byte| {
        (hash ^ byte as u32).wrapping_mul(0x0100_0193)
    });
    let texel = [(seed >> 16) as u8, (seed >> 8) as u8, seed as u8, 255];
    TextureDesc::rgba8(name, 2, 2, texel.repeat(4))
}

fn create_driver(config: OrreryConfig) -> Result<FrameDriver> {
    let renderer = Arc::new(Mutex::new(HeadlessRenderer::new()));
    let program = {
        let mut renderer = match renderer.lock() {
            Ok(renderer) => renderer,
            Err(_) => engine_bail!(@BackendError, SOURCE, "Renderer lock poisoned"),
        };
        SceneProgram::load(&mut *renderer, SceneProgram::default_desc())?
    };

    let mut resources = ResourceManager::new(renderer);
    resources.create_sphere_geometry(SPHERE_GEOMETRY, config.sphere_slices, config.sphere_stacks)?;
    for name in solar_system::texture_names() {
        resources.create_texture(placeholder_texture(&name))?;
    }

    let scene = solar_system::solar_system().build(&resources)?;
    let anchors = solar_system::light_anchors(&scene)?;
    FrameDriver::new(config, scene, resources, program, anchors)
}

fn main() -> Result<()> {
    let config = OrreryConfig::default();
    Engine::set_min_severity(config.log_level);

    let frames = frame_count()?;
    let pacer = FramePacer::from_config(&config);
    engine_info!(SOURCE, "{} starting: {} frames at {} FPS",
        config.app_name, frames, config.frame_rate);

    let mut driver = create_driver(config)?;
    let mut cmd = RecordingCommandList::new();
    // Slow yaw so the view matrix changes over the run
    let input = CameraInput { turn: 0.25, ..Default::default() };

    for _ in 0..frames {
        let frame_start = Instant::now();
        cmd.clear();
        let stats = driver.run_frame(&input, &mut cmd)?;
        engine_info!(SOURCE, "frame {} t={:.2}: {} draws, {} vertices, depth {}",
            driver.frame_index(), driver.time(), stats.draw_calls, stats.vertices, stats.max_depth);
        pacer.pace(frame_start);
    }

    engine_info!(SOURCE, "Done after {} frames (t={:.2})", driver.frame_index(), driver.time());
    Ok(())
}
