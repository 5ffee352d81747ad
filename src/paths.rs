//! Centralized path resolution for the LoanRisk service
//!
//! All file and directory paths are resolved through this module so behavior
//! stays consistent across platforms.
//!
//! ## Path Strategy
//!
//! Platform application-data locations, overridable with `--data-dir`:
//! - **macOS**: `~/Library/Application Support/LoanRisk/`
//! - **Windows**: `%LOCALAPPDATA%\LoanRisk\`
//! - **Linux**: `$XDG_DATA_HOME/LoanRisk/` (fallback `~/.local/share/LoanRisk/`)
//!
//! ## Directory Structure
//!
//! ```text
//! LoanRisk/
//! ├── data/
//! │   └── model_artifact.json
//! └── logs/
//!     └── loanrisk.log
//! ```

use once_cell::sync::Lazy;
use std::path::PathBuf;

use crate::arguments;

/// Lazy-initialized base directory (thread-safe)
static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(resolve_base_directory);

/// Resolves the base directory for all LoanRisk data
fn resolve_base_directory() -> PathBuf {
    const APP_DIR: &str = "LoanRisk";

    if let Some(dir) = arguments::get_data_dir_override() {
        return dir;
    }

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    // Last resort: relative to the working directory
    PathBuf::from("loanrisk-data")
}

/// Base directory for all service data
pub fn get_base_directory() -> PathBuf {
    BASE_DIRECTORY.clone()
}

/// Directory for persistent data (model artifact)
pub fn get_data_directory() -> PathBuf {
    BASE_DIRECTORY.join("data")
}

/// Directory for log files
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

/// Path of the model artifact, honoring `--model-path`
pub fn get_model_artifact_path() -> PathBuf {
    if let Some(path) = arguments::get_model_path_override() {
        return path;
    }
    get_data_directory().join("model_artifact.json")
}

/// Path of the service log file
pub fn get_log_file_path() -> PathBuf {
    get_logs_directory().join("loanrisk.log")
}

/// Create all required directories. Must run before logger initialization,
/// which opens a file in the logs directory.
pub fn ensure_all_directories() -> Result<(), std::io::Error> {
    std::fs::create_dir_all(get_data_directory())?;
    std::fs::create_dir_all(get_logs_directory())?;
    Ok(())
}
