//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CampusBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_chat_config(&settings.chat)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate chat shell configuration
fn validate_chat_config(config: &super::ChatConfig) -> Result<()> {
    if config.typing_delay_min_ms > config.typing_delay_max_ms {
        return Err(CampusBuddyError::Config(
            "Typing delay minimum cannot be greater than maximum".to_string()
        ));
    }

    Ok(())
}

/// Validate session configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.ttl_seconds == 0 {
        return Err(CampusBuddyError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChatConfig, LoggingConfig, SessionConfig};
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_inverted_delay_range_rejected() {
        let mut settings = Settings::default();
        settings.chat = ChatConfig {
            typing_delay_min_ms: 500,
            typing_delay_max_ms: 100,
        };
        assert_matches!(
            validate_settings(&settings),
            Err(CampusBuddyError::Config(_))
        );
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut settings = Settings::default();
        settings.session = SessionConfig { ttl_seconds: 0 };
        assert_matches!(
            validate_settings(&settings),
            Err(CampusBuddyError::Config(_))
        );
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut settings = Settings::default();
        settings.logging = LoggingConfig {
            level: "verbose".to_string(),
            file_path: None,
        };
        assert_matches!(
            validate_settings(&settings),
            Err(CampusBuddyError::Config(_))
        );
    }
}
