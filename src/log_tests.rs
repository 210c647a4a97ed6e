//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

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
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Trace, LogSeverity::Trace);
    assert_eq!(LogSeverity::Error, LogSeverity::Error);
    assert_ne!(LogSeverity::Trace, LogSeverity::Debug);
    assert_ne!(LogSeverity::Info, LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Debug), "Debug");
    assert_eq!(format!("{:?}", LogSeverity::Info), "Info");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "prism3d::Scene".to_string(),
        message: "Scene created".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "prism3d::Scene");
    assert_eq!(entry.message, "Scene created");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_creation_with_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "prism3d::Node".to_string(),
        message: "draw failed".to_string(),
        file: Some("node.rs"),
        line: Some(42),
    };

    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.file, Some("node.rs"));
    assert_eq!(entry.line, Some(42));
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "prism3d::Scene".to_string(),
        message: "draw list rebuilt".to_string(),
        file: None,
        line: None,
    };
    let cloned = entry.clone();

    assert_eq!(cloned.severity, entry.severity);
    assert_eq!(cloned.source, entry.source);
    assert_eq!(cloned.message, entry.message);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;

    logger.log(&LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "prism3d::Test".to_string(),
        message: "message without location".to_string(),
        file: None,
        line: None,
    });

    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "prism3d::Test".to_string(),
        message: "message with location".to_string(),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}

// ============================================================================
// CUSTOM LOGGER TESTS
// ============================================================================

#[test]
fn test_custom_logger_receives_entry() {
    use std::sync::Mutex;

    struct CaptureLogger {
        messages: Mutex<Vec<String>>,
    }

    impl Logger for CaptureLogger {
        fn log(&self, entry: &LogEntry) {
            self.messages.lock().unwrap().push(entry.message.clone());
        }
    }

    let logger = CaptureLogger { messages: Mutex::new(Vec::new()) };
    logger.log(&LogEntry {
        severity: LogSeverity::Debug,
        timestamp: SystemTime::now(),
        source: "prism3d::Test".to_string(),
        message: "captured".to_string(),
        file: None,
        line: None,
    });

    assert_eq!(logger.messages.lock().unwrap().as_slice(), ["captured"]);
}
