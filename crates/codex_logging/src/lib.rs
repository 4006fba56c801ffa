#![deny(missing_docs)]
//! Shared logging utilities for the codex workspace.
//!
//! This crate provides the `codex_*` logging macros used by the store, the API
//! client and the app, plus a minimal test initializer for the global logger.
//! The macros forward to the `log` facade, so callers must depend on `log` too.

use std::sync::{Mutex, PoisonError};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! codex_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! codex_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! codex_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! codex_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! codex_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Level used by [`initialize_for_tests`].
///
/// Debug builds log at debug level, release builds at info.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// A log record kept by the capturing test logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Level the record was logged at.
    pub level: log::Level,
    /// Formatted message.
    pub message: String,
}

static CAPTURED: Mutex<Vec<CapturedRecord>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= test_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        CAPTURED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedRecord {
                level: record.level(),
                message: record.args().to_string(),
            });
    }

    fn flush(&self) {}
}

static CAPTURING_LOGGER: CapturingLogger = CapturingLogger;

/// Installs a global logger that keeps every record for [`captured_records`].
///
/// Only one global logger can exist per process, so a test binary should use
/// either this or [`initialize_for_tests`], never both.
pub fn initialize_capturing_for_tests() {
    if log::set_logger(&CAPTURING_LOGGER).is_ok() {
        log::set_max_level(test_level());
    }
}

/// Records captured so far, oldest first.
pub fn captured_records() -> Vec<CapturedRecord> {
    CAPTURED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// True when a record at `level` containing `needle` has been captured.
pub fn was_logged(level: log::Level, needle: &str) -> bool {
    captured_records()
        .iter()
        .any(|record| record.level == level && record.message.contains(needle))
}
