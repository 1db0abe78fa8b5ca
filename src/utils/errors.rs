//! Error handling for BDE Office
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for BDE Office
#[derive(Error, Debug)]
pub enum BdeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{collection} entry not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("Unknown seat: {0}")]
    UnknownSeat(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Session expired")]
    SessionExpired,

    #[error("Session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for BDE Office operations
pub type Result<T> = std::result::Result<T, BdeError>;

impl BdeError {
    /// Shorthand for a missing entry in a collection
    pub fn not_found(collection: &str, id: &str) -> Self {
        BdeError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BdeError::Database(_) => true,
            BdeError::Migration(_) => false,
            BdeError::Config(_) => false,
            BdeError::InvalidInput(_) => false,
            BdeError::NotFound { .. } => false,
            BdeError::UnknownSeat(_) => false,
            BdeError::Authentication(_) => false,
            BdeError::SessionExpired => false,
            BdeError::Token(_) => false,
            BdeError::RemoteUnavailable(_) => true,
            BdeError::Serialization(_) => false,
            BdeError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BdeError::Migration(_) => ErrorSeverity::Critical,
            BdeError::Config(_) => ErrorSeverity::Critical,
            BdeError::Authentication(_) => ErrorSeverity::Warning,
            BdeError::SessionExpired => ErrorSeverity::Warning,
            BdeError::Token(_) => ErrorSeverity::Warning,
            BdeError::RemoteUnavailable(_) => ErrorSeverity::Warning,
            BdeError::InvalidInput(_) => ErrorSeverity::Info,
            BdeError::UnknownSeat(_) => ErrorSeverity::Info,
            BdeError::NotFound { .. } => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = BdeError::not_found("students", "abc");
        assert_eq!(err.to_string(), "students entry not found: abc");
        assert_eq!(err.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_remote_errors_are_recoverable() {
        assert!(BdeError::RemoteUnavailable("timeout".to_string()).is_recoverable());
        assert!(!BdeError::Config("missing".to_string()).is_recoverable());
        assert_eq!(BdeError::Config("missing".to_string()).severity().to_string(), "CRITICAL");
    }
}
