//! Routes engine log events through the `log` facade
//!
//! The engine keeps its own structured events; the CLI forwards them to `log`
//! so `env_logger` (and `RUST_LOG`) decide what reaches the terminal.

use qa2d_engine::config::runtime::{self, LoggingPreferences};
use qa2d_engine::logging::{self, LogEvent, LogLevel, Logger, LoggingService};
use std::io::Write;
use std::sync::Arc;

/// Logger sink that re-emits each event as a `log` record
pub struct LogFacadeLogger {
    json: bool,
}

impl LogFacadeLogger {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn render(&self, event: &LogEvent) -> String {
        if self.json {
            event.format_json().unwrap_or_else(|_| event.format())
        } else {
            let mut context: Vec<_> = event.context.iter().collect();
            context.sort();
            let context: String = context
                .iter()
                .map(|(k, v)| format!(" {}={}", k, v))
                .collect();
            let span = event
                .span
                .as_ref()
                .map(|s| format!(" at tokens {}", s))
                .unwrap_or_default();
            format!("{} {}{}{}", event.code, event.message, span, context)
        }
    }
}

pub fn to_log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Error => log::Level::Error,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Info => log::Level::Info,
        LogLevel::Debug => log::Level::Debug,
    }
}

impl Logger for LogFacadeLogger {
    fn log(&self, event: &LogEvent) {
        log::log!(target: "qa2d", to_log_level(event.level), "{}", self.render(event));
    }
}

/// Install `env_logger` and the engine's global logging service.
///
/// `--quiet` caps output at warnings; otherwise `RUST_LOG` wins and the
/// default is `info`.
pub fn init(quiet: bool, json: bool) -> Result<(), String> {
    let default_filter = if quiet { "warn" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if json {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    } else {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        });
    }

    builder.try_init().map_err(|e| e.to_string())?;

    let defaults = LoggingPreferences::default();
    logging::config::init_runtime_preferences(LoggingPreferences {
        use_structured_logging: json,
        enable_console_logging: true,
        min_log_level: if quiet {
            runtime::LogLevel::Warning
        } else {
            defaults.min_log_level
        },
        ..defaults
    })?;

    let min_level = if quiet {
        LogLevel::Warning
    } else if log::log_enabled!(target: "qa2d", log::Level::Debug) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let service = LoggingService::new(Arc::new(LogFacadeLogger::new(json)), min_level);
    logging::init_global_logging_with_service(Arc::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa2d_engine::logging::codes;

    #[test]
    fn test_level_mapping() {
        assert_eq!(to_log_level(LogLevel::Error), log::Level::Error);
        assert_eq!(to_log_level(LogLevel::Warning), log::Level::Warn);
        assert_eq!(to_log_level(LogLevel::Debug), log::Level::Debug);
    }

    #[test]
    fn test_plain_rendering_sorts_context() {
        let event = LogEvent::error(codes::analysis::UNRESOLVED_WH, "No wh-word")
            .with_context("pair", "q7")
            .with_context("line", "3");
        let rendered = LogFacadeLogger::new(false).render(&event);
        assert_eq!(rendered, "E022 No wh-word line=3 pair=q7");
    }

    #[test]
    fn test_json_rendering() {
        let event = LogEvent::info("Batch progress");
        let rendered = LogFacadeLogger::new(true).render(&event);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["level"], "INFO");
    }
}
