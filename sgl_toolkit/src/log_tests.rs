//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry and DefaultLogger formatting.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "sglt::ShadowBox".to_string(),
        message: "bounds recomputed".to_string(),
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
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
    assert_eq!(LogSeverity::Error.label(), "ERROR");
}

#[test]
fn test_log_severity_copy() {
    let sev1 = LogSeverity::Warn;
    let sev2 = sev1;
    assert_eq!(sev1, sev2);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone() {
    let original = entry(LogSeverity::Error, Some("shader_processor.rs"), Some(12));
    let cloned = original.clone();
    assert_eq!(cloned.severity, LogSeverity::Error);
    assert_eq!(cloned.source, original.source);
    assert_eq!(cloned.message, original.message);
    assert_eq!(cloned.file, Some("shader_processor.rs"));
    assert_eq!(cloned.line, Some(12));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_format_plain_without_location() {
    let text = DefaultLogger::format_plain(&entry(LogSeverity::Info, None, None));
    assert!(text.contains("[INFO ]"));
    assert!(text.contains("[sglt::ShadowBox]"));
    assert!(text.ends_with("bounds recomputed"));
}

#[test]
fn test_format_plain_with_location() {
    let text = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("camera.rs"), Some(99)));
    assert!(text.contains("[ERROR]"));
    assert!(text.ends_with("(camera.rs:99)"));
}

#[test]
fn test_format_plain_requires_both_file_and_line() {
    let text = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("camera.rs"), None));
    assert!(!text.contains("camera.rs"));
}

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger::default();
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Error, Some("log.rs"), Some(1)));
}

#[test]
fn test_default_logger_as_trait_object() {
    let logger: Box<dyn Logger> = Box::new(DefaultLogger::default());
    logger.log(&entry(LogSeverity::Debug, None, None));
}

#[test]
fn test_default_logger_accepts_everything() {
    let logger = DefaultLogger::default();
    assert_eq!(logger.min_severity(), LogSeverity::Trace);
    assert!(logger.accepts(LogSeverity::Trace));
    assert!(logger.accepts(LogSeverity::Error));
}

#[test]
fn test_min_severity_drops_lower_entries() {
    let logger = DefaultLogger::with_min_severity(LogSeverity::Warn);
    assert!(!logger.accepts(LogSeverity::Trace));
    assert!(!logger.accepts(LogSeverity::Info));
    assert!(logger.accepts(LogSeverity::Warn));
    assert!(logger.accepts(LogSeverity::Error));

    // Dropped entries print nothing and must not panic
    logger.log(&entry(LogSeverity::Debug, None, None));
}

#[test]
fn test_format_plain_layout() {
    let text = DefaultLogger::format_plain(&entry(LogSeverity::Warn, Some("shadow_box.rs"), Some(7)));
    let after_timestamp = text.split_once("] ").map(|(_, rest)| rest);
    assert_eq!(
        after_timestamp,
        Some("[WARN ] [sglt::ShadowBox] bounds recomputed (shadow_box.rs:7)")
    );
}
