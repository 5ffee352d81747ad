/// File logging backend
///
/// Appends plain-text log lines to the service log file. Initialization is
/// best-effort: if the file cannot be opened, console logging still works.
use crate::paths;
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Open the log file for appending
pub fn init_file_logging() {
    let path = paths::get_log_file_path();
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            if let Ok(mut guard) = LOG_FILE.lock() {
                *guard = Some(file);
            }
        }
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
        }
    }
}

/// Append one line to the log file (no-op when uninitialized)
pub fn write_to_file(line: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
    }
}

/// Flush pending writes to disk
pub fn flush_file_logging() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let _ = file.flush();
        }
    }
}
