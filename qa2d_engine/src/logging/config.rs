//! Logging configuration: compile-time buffer limits plus runtime preferences

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install runtime preferences; may only happen once per process
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

pub fn include_pair_context() -> bool {
    get_runtime_preferences().include_pair_context
}

/// Capacity of in-memory event buffers
pub fn get_event_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

pub fn get_max_log_events_per_pair() -> usize {
    MAX_LOG_EVENTS_PER_PAIR
}

pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();
    format!(
        "Logging configuration:\n  min level: {}\n  structured: {}\n  console: {}\n  pair context: {}\n  buffer size: {}\n  events per pair: {}\n",
        preferences.min_log_level.as_str(),
        preferences.use_structured_logging,
        preferences.enable_console_logging,
        preferences.include_pair_context,
        LOG_BUFFER_SIZE,
        MAX_LOG_EVENTS_PER_PAIR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_limits_come_from_build_profile() {
        assert_eq!(get_event_buffer_size(), LOG_BUFFER_SIZE);
        assert!(get_max_log_events_per_pair() > 0);
    }

    #[test]
    fn test_summary_lists_limits() {
        let summary = get_config_summary();
        assert!(summary.contains("buffer size"));
        assert!(summary.contains("min level"));
    }
}
