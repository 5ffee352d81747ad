//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with aligned tag and level columns
//! - Dual output (console + file)
//! - Broken pipe handling for piped commands

use super::file::write_to_file;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Column widths for alignment
const TAG_WIDTH: usize = 10;
const LOG_TYPE_WIDTH: usize = 20;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, log_type: &str, message: &str) {
    let now = Local::now();
    let time = now.format("%H:%M:%S").to_string();

    let console_line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_log_type(log_type),
        message
    );
    print_stdout_safe(&console_line);

    let file_line = format!(
        "{} [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        tag.to_plain_string(),
        log_type,
        message
    );
    write_to_file(&file_line);
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    match tag {
        LogTag::System => format!("{:<width$}", "SYSTEM", width = TAG_WIDTH)
            .bright_yellow()
            .bold(),
        LogTag::Model => format!("{:<width$}", "MODEL", width = TAG_WIDTH)
            .bright_cyan()
            .bold(),
        LogTag::Training => format!("{:<width$}", "TRAINING", width = TAG_WIDTH)
            .bright_magenta()
            .bold(),
        LogTag::Explain => format!("{:<width$}", "EXPLAIN", width = TAG_WIDTH)
            .bright_blue()
            .bold(),
        LogTag::Webserver => format!("{:<width$}", "WEBSERVER", width = TAG_WIDTH)
            .bright_green()
            .bold(),
        LogTag::Test => format!("{:<width$}", "TEST", width = TAG_WIDTH)
            .bright_blue()
            .bold(),
        LogTag::Other(ref s) => format!("{:<width$}", s, width = TAG_WIDTH).white().bold(),
    }
}

/// Format log type with appropriate color
fn format_log_type(log_type: &str) -> ColoredString {
    match log_type.to_uppercase().as_str() {
        "ERROR" => format!("{:<width$}", log_type, width = LOG_TYPE_WIDTH)
            .bright_red()
            .bold(),
        "WARNING" => format!("{:<width$}", log_type, width = LOG_TYPE_WIDTH)
            .bright_yellow()
            .bold(),
        _ => format!("{:<width$}", log_type, width = LOG_TYPE_WIDTH)
            .white()
            .bold(),
    }
}

/// Print to stdout but ignore broken pipe errors
fn print_stdout_safe(message: &str) {
    if let Err(e) = writeln!(stdout(), "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        let _ = writeln!(std::io::stderr(), "Logger stdout error: {}", e);
    }
    if let Err(e) = stdout().flush() {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}
