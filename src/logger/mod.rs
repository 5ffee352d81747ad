//! Structured logging for the LoanRisk service
//!
//! Provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Dual output: colored console + file persistence
//!
//! ## Usage
//!
//! ```rust,ignore
//! use loanrisk::logger::{self, LogTag};
//!
//! logger::error(LogTag::Model, "Artifact corrupt");
//! logger::info(LogTag::Webserver, "Listening on 127.0.0.1:8000");
//! logger::debug(LogTag::Training, "Dataset ready"); // Only with --debug-training
//! ```
//!
//! Call `logger::init()` once at startup, after the directories exist.

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

// Re-export public types
pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Parses command-line arguments for verbosity/debug flags and opens the
/// log file. Call once in main, before any services start.
pub fn init() {
    config::init_from_args();
    file::init_file_logging();
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics)
///
/// Only shown when the matching --debug-<module> flag is provided.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (very detailed tracing)
///
/// Only shown when the --verbose flag is provided.
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Tagged log write with a free-form event type column.
///
/// Callers gate these with the per-module debug flags from `arguments`;
/// no level filtering is applied here.
pub fn log(tag: LogTag, log_type: &str, message: &str) {
    format::format_and_log(tag, log_type, message);
}

/// Force flush all pending log writes
///
/// Call during shutdown to ensure all logs are written to disk.
pub fn flush() {
    file::flush_file_logging();
}
