/// Core logging implementation with automatic filtering
///
/// Decides whether a message should be written, then delegates to the
/// format module for formatting and output.
use super::config::{get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Check against minimum log level threshold
/// 3. Debug level requires --debug-<module> for that tag
/// 4. Verbose level requires --verbose OR --verbose-<module> for that tag
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag);
    }

    if level == LogLevel::Verbose {
        return config.min_level == LogLevel::Verbose || is_verbose_enabled_for_tag(tag);
    }

    true
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::config::set_logger_config;
    use crate::logger::LoggerConfig;
    use std::collections::HashSet;

    // One sequential test: the config is process-global, and parallel
    // mutations of it would race.
    #[test]
    fn filtering_rules() {
        // Quiet threshold: info filtered, warnings kept, errors always pass
        set_logger_config(LoggerConfig {
            min_level: LogLevel::Warning,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
        });
        assert!(should_log(&LogTag::Model, LogLevel::Error));
        assert!(should_log(&LogTag::System, LogLevel::Warning));
        assert!(!should_log(&LogTag::System, LogLevel::Info));

        // Debug requires the matching --debug-<module> flag
        let mut debug_tags = HashSet::new();
        debug_tags.insert("model".to_string());
        set_logger_config(LoggerConfig {
            min_level: LogLevel::Debug,
            debug_tags,
            verbose_tags: HashSet::new(),
        });
        assert!(should_log(&LogTag::Model, LogLevel::Debug));
        assert!(!should_log(&LogTag::Webserver, LogLevel::Debug));

        set_logger_config(LoggerConfig::default());
    }
}
