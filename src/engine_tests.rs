//! Unit tests for the Engine logging facade
//!
//! IMPORTANT: the logger is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially.

use crate::prism3d::Engine;
use crate::prism3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(TestLogger { entries: entries.clone() });
    entries
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_log_routes_to_installed_logger() {
    let entries = install_capture();

    Engine::log(LogSeverity::Info, "prism3d::Test", "hello".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "prism3d::Test");
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());

    drop(captured);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_file_and_line() {
    let entries = install_capture();

    Engine::log_detailed(
        LogSeverity::Error,
        "prism3d::Test",
        "boom".to_string(),
        "engine_tests.rs",
        7,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].file, Some("engine_tests.rs"));
    assert_eq!(captured[0].line, Some(7));

    drop(captured);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let entries = install_capture();

    crate::engine_trace!("prism3d::Test", "t {}", 1);
    crate::engine_debug!("prism3d::Test", "d");
    crate::engine_info!("prism3d::Test", "i");
    crate::engine_warn!("prism3d::Test", "w");
    crate::engine_error!("prism3d::Test", "e");

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 5);
    assert_eq!(captured[0].severity, LogSeverity::Trace);
    assert_eq!(captured[0].message, "t 1");
    assert_eq!(captured[4].severity, LogSeverity::Error);
    // engine_error! is the only macro with source location
    assert!(captured[4].file.is_some());
    assert!(captured[3].file.is_none());

    drop(captured);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let entries = install_capture();
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "prism3d::Test", "after reset".to_string());

    // Entry went to DefaultLogger, not the previous capture
    assert_eq!(entries.lock().unwrap().len(), 0);
}
