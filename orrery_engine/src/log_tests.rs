//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry formatting and DefaultLogger.

use crate::log::{format_entry, DefaultLogger, LogEntry, LogSeverity, Logger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "orrery::Test".to_string(),
        message: "hello".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_have_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
}

#[test]
fn test_log_severity_from_name() {
    assert_eq!(LogSeverity::from_name("trace"), Some(LogSeverity::Trace));
    assert_eq!(LogSeverity::from_name("DEBUG"), Some(LogSeverity::Debug));
    assert_eq!(LogSeverity::from_name(" Info "), Some(LogSeverity::Info));
    assert_eq!(LogSeverity::from_name("warning"), Some(LogSeverity::Warn));
    assert_eq!(LogSeverity::from_name("error"), Some(LogSeverity::Error));
    assert_eq!(LogSeverity::from_name("loud"), None);
}

// ============================================================================
// FORMATTING
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let line = format_entry(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[orrery::Test] hello"));
    assert!(!line.contains("("));
}

#[test]
fn test_format_entry_with_location() {
    let line = format_entry(&entry(LogSeverity::Error, Some("drawer.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("hello (drawer.rs:42)"));
}

#[test]
fn test_format_entry_requires_both_file_and_line() {
    let line = format_entry(&entry(LogSeverity::Warn, Some("drawer.rs"), None));
    assert!(!line.contains("drawer.rs"));
}

// ============================================================================
// DEFAULT LOGGER
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Debug, None, None));
    logger.log(&entry(LogSeverity::Info, None, None));
    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("log_tests.rs"), Some(1)));
}

/// Remove ANSI SGR sequences (`ESC [ ... m`)
fn strip_ansi(text: &str) -> String {
    let mut plain = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for code in chars.by_ref() {
                if code == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[test]
fn test_default_logger_line_matches_format_entry() {
    for entry in [
        entry(LogSeverity::Debug, None, None),
        entry(LogSeverity::Error, Some("scene_graph.rs"), Some(7)),
    ] {
        let colored = DefaultLogger::colored_line(&entry);
        assert_eq!(strip_ansi(&colored), format_entry(&entry));
    }
}
