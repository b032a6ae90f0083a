//! Global logging for the qa2d engine
//!
//! Thread-safe global service, per-thread pair context for batch runs, and a
//! small macro interface.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::utils::TokenRange;
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// The pair being converted on this thread and how many events it has emitted
struct PairContext {
    id: String,
    events: usize,
}

thread_local! {
    static PAIR_CONTEXT: RefCell<Option<PairContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    let logging_service = Arc::new(service::create_configured_service());
    init_global_logging_with_service(logging_service.clone())?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with a caller-provided service (CLI sinks, tests)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether a debug event would reach any sink
pub fn debug_enabled() -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(LogLevel::Debug))
        .unwrap_or(false)
}

// ============================================================================
// PAIR CONTEXT MANAGEMENT
// ============================================================================

pub fn set_pair_context(pair_id: &str) {
    PAIR_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(PairContext {
            id: pair_id.to_string(),
            events: 0,
        });
    });
}

pub fn clear_pair_context() {
    PAIR_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Run `f` with every event on this thread tagged with `pair_id`
pub fn with_pair_context<F, R>(pair_id: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_pair_context(pair_id);
    let result = f();
    clear_pair_context();
    result
}

pub fn get_current_pair_context() -> Option<String> {
    PAIR_CONTEXT.with(|ctx| ctx.borrow().as_ref().map(|pair| pair.id.clone()))
}

/// Count an event against the current pair's budget; errors always pass
fn admit_for_pair(level: LogLevel) -> bool {
    PAIR_CONTEXT.with(|ctx| match ctx.borrow_mut().as_mut() {
        Some(pair) => {
            pair.events += 1;
            level == LogLevel::Error || pair.events <= config::get_max_log_events_per_pair()
        }
        None => true,
    })
}

fn attach_pair_context(event: LogEvent) -> LogEvent {
    if !config::include_pair_context() {
        return event;
    }
    match get_current_pair_context() {
        Some(pair_id) => event.with_context("pair", &pair_id),
        None => event,
    }
}

fn dispatch(mut event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };
    if !logger.should_log(event.level) || !admit_for_pair(event.level) {
        return;
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    logger.log_event(attach_pair_context(event));
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Used by `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<TokenRange>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    dispatch(event, context);
}

/// Used by `log_success!`
pub fn log_success_with_context(
    code: Code,
    message: &str,
    span: Option<TokenRange>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::success(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    dispatch(event, context);
}

/// Used by `log_info!`, `log_warning!` and `log_debug!`
pub fn log_with_level(level: LogLevel, message: &str, context: Vec<(&str, &str)>) {
    let event = match level {
        LogLevel::Error => LogEvent::error(codes::system::INTERNAL_ERROR, message),
        LogLevel::Warning => LogEvent::warning(message),
        LogLevel::Info => LogEvent::info(message),
        LogLevel::Debug => LogEvent::debug(message),
    };
    dispatch(event, context);
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Error logging that falls back to stderr when uninitialized
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(attach_pair_context(LogEvent::error(code, message)));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Active level: {}\n", logger.min_level().as_str()));
    }
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}
