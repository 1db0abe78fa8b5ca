//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BdeError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_local_config(&settings.local)?;
    validate_auth_config(&settings.auth)?;
    validate_dues_config(&settings.dues)?;
    validate_logging_config(&settings.logging)?;

    if let Some(remote_config) = settings.remote_store() {
        validate_remote_config(remote_config)?;
    }

    Ok(())
}

/// Validate remote store configuration
fn validate_remote_config(config: &super::RemoteStoreConfig) -> Result<()> {
    if config.max_connections == 0 {
        return Err(BdeError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(BdeError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    if config.acquire_timeout_seconds == 0 {
        return Err(BdeError::Config(
            "Acquire timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate local storage configuration
fn validate_local_config(config: &super::LocalStoreConfig) -> Result<()> {
    if config.data_dir.trim().is_empty() {
        return Err(BdeError::Config(
            "Local data directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate login configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.username.trim().is_empty() || config.password.is_empty() {
        return Err(BdeError::Config(
            "Admin username and password are required".to_string()
        ));
    }

    if config.jwt_secret.len() < 16 {
        return Err(BdeError::Config(
            "JWT secret must be at least 16 characters".to_string()
        ));
    }

    if config.session_ttl_minutes <= 0 {
        return Err(BdeError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    if config.session_ttl_minutes > super::settings::MAX_SESSION_TTL_MINUTES {
        return Err(BdeError::Config(format!(
            "Session TTL cannot exceed {} minutes",
            super::settings::MAX_SESSION_TTL_MINUTES
        )));
    }

    Ok(())
}

/// Validate dues configuration
fn validate_dues_config(config: &super::DuesConfig) -> Result<()> {
    if config.amount == 0 {
        return Err(BdeError::Config(
            "Dues amount must be greater than 0".to_string()
        ));
    }

    if config.currency.is_empty() {
        return Err(BdeError::Config(
            "Dues currency is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BdeError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BdeError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
