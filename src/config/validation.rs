//! Configuration validation module
//!
//! This module provides validation functions for client configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{AbhivyaktiError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_payment_config(&settings.payment)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate API endpoint configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AbhivyaktiError::Config(
            "API base URL is required".to_string(),
        ));
    }

    if config.backend_url.is_empty() {
        return Err(AbhivyaktiError::Config(
            "Backend URL is required".to_string(),
        ));
    }

    Url::parse(&config.base_url)
        .map_err(|e| AbhivyaktiError::Config(format!("Invalid API base URL: {}", e)))?;
    Url::parse(&config.backend_url)
        .map_err(|e| AbhivyaktiError::Config(format!("Invalid backend URL: {}", e)))?;

    Ok(())
}

/// Validate hosted checkout configuration
fn validate_payment_config(config: &super::PaymentConfig) -> Result<()> {
    if config.phone_country_code.is_empty() || !config.phone_country_code.starts_with('+') {
        return Err(AbhivyaktiError::Config(
            "Phone country code must start with '+'".to_string(),
        ));
    }

    // The Razorpay key is only needed by the in-page checkout variant and
    // may stay empty for hosted-page deployments.
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AbhivyaktiError::Config("Log level is required".to_string()));
    }

    if config.file_path.is_empty() {
        return Err(AbhivyaktiError::Config(
            "Log file path is required".to_string(),
        ));
    }

    Ok(())
}
