//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the back-office.

use tracing::{info, warn, debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{BdeError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "bde-office.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Exactly one stdout layer is active
    let json_stdout = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout));
    let text_stdout = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(json_stdout)
        .with(text_stdout)
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| BdeError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log storage operations
pub fn log_store_operation(operation: &str, collection: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            collection = collection,
            duration_ms = duration_ms,
            "Store operation completed"
        );
    } else {
        error!(
            operation = operation,
            collection = collection,
            duration_ms = duration_ms,
            "Store operation failed"
        );
    }
}

/// Log a read served from the local cache after a remote failure
pub fn log_stale_read(collection: &str, error: &str, cached_entries: usize) {
    warn!(
        collection = collection,
        error = error,
        cached_entries = cached_entries,
        "Remote read failed, serving local snapshot"
    );
}

/// Log the storage backend chosen at start-up
pub fn log_backend_selected(backend: &str, reason: &str) {
    info!(backend = backend, reason = reason, "Storage backend selected");
}
