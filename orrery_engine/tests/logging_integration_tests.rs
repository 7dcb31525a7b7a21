//! Integration tests for Engine logging system
//!
//! These tests verify that engine components report through the active
//! logger. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests

use orrery_engine::orrery::Engine;
use orrery_engine::orrery::Error;
use orrery_engine::orrery::log::{Logger, LogEntry, LogSeverity};
use orrery_engine::orrery::render::HeadlessRenderer;
use orrery_engine::orrery::resource::{MaterialDesc, ResourceManager};
use orrery_engine::orrery::scene::{BodyDesc, Orbit, OrbitalParams, Propagation, SceneBuilder};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_min_severity(LogSeverity::Trace);
    entries
}

fn restore_logger() {
    Engine::reset_logger();
    Engine::set_min_severity(LogSeverity::Trace);
}

fn create_resources() -> ResourceManager {
    let mut resources = ResourceManager::new(Arc::new(Mutex::new(HeadlessRenderer::new())));
    resources.create_sphere_geometry("sphere", 6, 4).unwrap();
    resources
}

fn untextured() -> MaterialDesc {
    MaterialDesc { texture: None, ..MaterialDesc::emissive("") }
}

fn stationary() -> Orbit {
    Orbit::new(OrbitalParams::stationary(1.0), Propagation::Fixed)
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger_receives_macros() {
    let entries = install_logger();

    orrery_engine::engine_info!("test::module", "Loaded {} bodies", 18);
    orrery_engine::engine_warn!("test::module", "Frame {} ran late", 3);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Loaded 18 bodies");
        assert_eq!(captured[0].file, None);
        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[1].message, "Frame 3 ran late");
    }

    restore_logger();
}

#[test]
#[serial]
fn test_integration_engine_err_logs_with_location() {
    let entries = install_logger();

    let err = orrery_engine::engine_err!(@InvalidScene, "test::scene",
        "Cycle through '{}'", "moon");
    assert_eq!(err, Error::InvalidScene("Cycle through 'moon'".to_string()));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Error);
        assert_eq!(entry.source, "test::scene");
        assert_eq!(entry.message, "Cycle through 'moon'");
        assert!(entry.file.is_some());
        assert!(entry.line.is_some());
    }

    restore_logger();
}

#[test]
#[serial]
fn test_integration_scene_builder_error_is_logged() {
    let resources = create_resources();
    let entries = install_logger();

    let result = SceneBuilder::new()
        .body(BodyDesc::new("sky", "sphere", untextured(), stationary()))
        .body(BodyDesc::new("moon", "sphere", untextured(), stationary())
            .with_parent("earth"))
        .build(&resources);
    assert!(matches!(result, Err(Error::InvalidScene(_))));

    {
        let captured = entries.lock().unwrap();
        let errors: Vec<&LogEntry> = captured.iter()
            .filter(|entry| entry.severity == LogSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "orrery::SceneBuilder");
        assert!(errors[0].message.contains("earth"));
        assert!(errors[0].line.is_some());
    }

    restore_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_filters_entries() {
    let entries = install_logger();
    Engine::set_min_severity(LogSeverity::Warn);

    // ResourceManager reports uploads at INFO, which must be filtered
    let _resources = create_resources();
    Engine::log(LogSeverity::Debug, "test", "Debug message".to_string());
    Engine::log(LogSeverity::Warn, "test", "Warn message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message, "Warn message");
    }

    restore_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let entries = install_logger();

    Engine::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    restore_logger();

    // Goes to the default logger, not captured
    Engine::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);
}
