//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the CampusBuddy application.

use tracing::{info, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::LoggingConfig;
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;

/// Guard returned by [`init_logging`]; keeps the file appender flushing
/// until dropped.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let file_guard = if let Some(dir) = &config.file_path {
        let file_appender = tracing_appender::rolling::daily(dir, "campusbuddy.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(LoggingGuard { _file_guard: file_guard })
}

/// Log a single conversation turn with structured data
pub fn log_turn(session_id: Uuid, intent: &str, utterance: &str) {
    debug!(
        session_id = %session_id,
        intent = intent,
        utterance = %truncate_text(utterance, 80),
        "Turn processed"
    );
}

/// Log session lifecycle events
pub fn log_session_event(session_id: Uuid, event: &str) {
    info!(
        session_id = %session_id,
        event = event,
        "Session event occurred"
    );
}
