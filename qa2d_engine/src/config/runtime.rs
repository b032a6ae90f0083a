// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisPreferences {
    /// Whether to log the derived question flags (quantity, time unit, idiom)
    pub log_derived_flags: bool,

    /// Whether to log the computed wh-span and insertion position
    pub log_placement_details: bool,
}

impl Default for AnalysisPreferences {
    fn default() -> Self {
        Self {
            log_derived_flags: env::var(env_vars::ANALYSIS_LOG_DERIVED_FLAGS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_placement_details: env::var(env_vars::ANALYSIS_LOG_PLACEMENT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPreferences {
    /// Whether to print progress while pairs are being converted
    pub progress_reporting: bool,

    /// Stop the batch at the first pair that fails to convert
    pub fail_fast: bool,
}

impl Default for BatchPreferences {
    fn default() -> Self {
        Self {
            progress_reporting: env::var(env_vars::BATCH_PROGRESS_REPORTING)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            fail_fast: env::var(env_vars::BATCH_FAIL_FAST)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to attach the current pair id to log events
    pub include_pair_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            include_pair_context: env::var(env_vars::LOGGING_INCLUDE_PAIR_CONTEXT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const ANALYSIS_LOG_DERIVED_FLAGS: &str = "QA2D_ANALYSIS_LOG_DERIVED_FLAGS";
    pub const ANALYSIS_LOG_PLACEMENT: &str = "QA2D_ANALYSIS_LOG_PLACEMENT";

    pub const BATCH_PROGRESS_REPORTING: &str = "QA2D_BATCH_PROGRESS_REPORTING";
    pub const BATCH_FAIL_FAST: &str = "QA2D_BATCH_FAIL_FAST";

    pub const LOGGING_USE_STRUCTURED: &str = "QA2D_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "QA2D_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "QA2D_LOGGING_MIN_LEVEL";
    pub const LOGGING_INCLUDE_PAIR_CONTEXT: &str = "QA2D_LOGGING_INCLUDE_PAIR_CONTEXT";
}
