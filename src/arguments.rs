/// Centralized argument handling for the LoanRisk service
///
/// Consolidates all command-line argument parsing and debug flag checking.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Value flags with defaults and clamping (--port, --host, ...)
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// =============================================================================

/// Webserver debug mode
pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Model prediction debug mode
pub fn is_debug_model_enabled() -> bool {
    has_arg("--debug-model")
}

/// Training and artifact debug mode
pub fn is_debug_training_enabled() -> bool {
    has_arg("--debug-training")
}

/// Explainer debug mode
pub fn is_debug_explain_enabled() -> bool {
    has_arg("--debug-explain")
}

/// Verbose output mode
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// Quiet mode - warnings and errors only
pub fn is_quiet_enabled() -> bool {
    has_arg("--quiet")
}

/// Force retraining of the model artifact, then exit
pub fn is_retrain_enabled() -> bool {
    has_arg("--retrain")
}

// =============================================================================
// VALUE FLAGS
// =============================================================================

/// Get configured listen port (defaults to 8000)
pub fn get_port() -> u16 {
    get_arg_value("--port")
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(crate::webserver::DEFAULT_PORT)
}

/// Get configured listen host (defaults to 127.0.0.1)
pub fn get_host() -> String {
    get_arg_value("--host").unwrap_or_else(|| crate::webserver::DEFAULT_HOST.to_string())
}

/// Optional override for the base data directory
pub fn get_data_dir_override() -> Option<PathBuf> {
    get_arg_value("--data-dir").map(PathBuf::from)
}

/// Optional override for the model artifact path
pub fn get_model_path_override() -> Option<PathBuf> {
    get_arg_value("--model-path").map(PathBuf::from)
}

pub mod patterns {
    use super::has_arg;

    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }
}

/// Print usage information
pub fn print_help() {
    println!("LoanRisk - loan default risk prediction service");
    println!();
    println!("USAGE:");
    println!("  loanrisk [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --host <HOST>        Listen address (default: 127.0.0.1)");
    println!("  --port <PORT>        Listen port (default: 8000)");
    println!("  --data-dir <DIR>     Base directory for data and logs");
    println!("  --model-path <FILE>  Model artifact path override");
    println!("  --retrain            Retrain the model, save the artifact and exit");
    println!("  --quiet              Warnings and errors only");
    println!("  --verbose            Very detailed trace output");
    println!("  --debug-<module>     Per-module debug logs");
    println!("                       (webserver, model, training, explain)");
    println!("  -h, --help           Show this help");
}

/// Print active debug modes at startup
pub fn print_debug_info() {
    let mut enabled: Vec<&str> = Vec::new();
    if is_debug_webserver_enabled() {
        enabled.push("webserver");
    }
    if is_debug_model_enabled() {
        enabled.push("model");
    }
    if is_debug_training_enabled() {
        enabled.push("training");
    }
    if is_debug_explain_enabled() {
        enabled.push("explain");
    }

    if !enabled.is_empty() {
        crate::logger::info(
            crate::logger::LogTag::System,
            &format!("🐛 Debug modes enabled: {}", enabled.join(", ")),
        );
    }
}
