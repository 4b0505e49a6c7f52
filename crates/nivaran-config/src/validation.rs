// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and positive timeouts.

use thiserror::Error;

use crate::model::NivaranConfig;

/// A semantic configuration problem found after deserialization.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &NivaranConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ConfigError::new("service.name must not be empty"));
    }

    if !LOG_LEVELS.contains(&config.service.log_level.as_str()) {
        errors.push(ConfigError::new(format!(
            "service.log_level must be one of {LOG_LEVELS:?}, got `{}`",
            config.service.log_level
        )));
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::new("gemini.model must not be empty"));
    }

    if config.gemini.api_base.trim().is_empty() {
        errors.push(ConfigError::new("gemini.api_base must not be empty"));
    }

    if config.gemini.request_timeout_secs == 0 {
        errors.push(ConfigError::new(
            "gemini.request_timeout_secs must be positive",
        ));
    }

    if config.classifier.timeout_secs == 0 {
        errors.push(ConfigError::new("classifier.timeout_secs must be positive"));
    }

    if config.classifier.timeout_secs < config.gemini.request_timeout_secs {
        errors.push(ConfigError::new(format!(
            "classifier.timeout_secs ({}) must not be shorter than gemini.request_timeout_secs ({})",
            config.classifier.timeout_secs, config.gemini.request_timeout_secs
        )));
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::new("storage.database_path must not be empty"));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NivaranConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&NivaranConfig::default()).is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = NivaranConfig::default();
        config.classifier.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("timeout_secs")));
    }

    #[test]
    fn classifier_deadline_must_cover_request_timeout() {
        let mut config = NivaranConfig::default();
        config.classifier.timeout_secs = 2;
        config.gemini.request_timeout_secs = 10;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("must not be shorter"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = NivaranConfig::default();
        config.service.log_level = "loud".into();
        config.gemini.model = "  ".into();
        config.storage.database_path = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
