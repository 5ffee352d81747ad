/// Logger configuration derived from command-line arguments
///
/// Holds the minimum level threshold plus the set of modules with
/// --debug-<module> enabled. Initialized once from the arguments at
/// startup; can be replaced by tests.
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::{get_cmd_args, is_quiet_enabled, is_verbose_enabled};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level that gets written (errors always pass)
    pub min_level: LogLevel,
    /// Modules with --debug-<module> set
    pub debug_tags: HashSet<String>,
    /// Modules with --verbose-<module> set
    pub verbose_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Current logger configuration (cloned)
pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .read()
        .map(|cfg| cfg.clone())
        .unwrap_or_default()
}

/// Replace the logger configuration (used by tests)
pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut cfg) = LOGGER_CONFIG.write() {
        *cfg = config;
    }
}

/// Build the configuration from command-line arguments
pub fn init_from_args() {
    let mut config = LoggerConfig::default();

    if is_quiet_enabled() {
        config.min_level = LogLevel::Warning;
    }
    if is_verbose_enabled() {
        config.min_level = LogLevel::Verbose;
    }

    for arg in get_cmd_args() {
        if let Some(module) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(module.to_lowercase());
        } else if let Some(module) = arg.strip_prefix("--verbose-") {
            config.verbose_tags.insert(module.to_lowercase());
        }
    }

    // Debug flags raise the threshold so gated messages can pass rule 2
    if !config.debug_tags.is_empty() && config.min_level < LogLevel::Debug {
        config.min_level = LogLevel::Debug;
    }

    set_logger_config(config);
}

/// Whether --debug-<module> was given for this tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config().debug_tags.contains(&tag.to_debug_key())
}

/// Whether --verbose-<module> was given for this tag
pub fn is_verbose_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .verbose_tags
        .contains(&tag.to_debug_key())
}
