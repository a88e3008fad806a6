//! Configuration validation logic
//!
//! Range and format checks run after all sources are merged.

use crate::config::error::ConfigError;
use crate::config::settings::{HttpConfig, LoggerSettings, Settings, StoreConfig};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "store.path",
                "Settings store path cannot be empty.",
            ));
        }
        Ok(())
    }
}

impl HttpConfig {
    /// # Validation Rules
    /// - Both timeouts must be greater than 0
    /// - Connect timeout must not exceed the request timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "http.timeout_seconds",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "http.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigError::invalid(
                "http.connect_timeout_seconds",
                format!(
                    "Connect timeout ({}) cannot exceed request timeout ({}).",
                    self.connect_timeout_seconds, self.timeout_seconds
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        let format = self.file.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::invalid(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.file.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if self.file.enabled && self.file.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "logger.file.path",
                "Log file path cannot be empty when file output is enabled.",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::invalid(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut settings = Settings::default();
        settings.http.timeout_seconds = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("http.timeout_seconds"));
    }

    #[test]
    fn test_connect_timeout_above_request_timeout_rejected() {
        let mut settings = Settings::default();
        settings.http.timeout_seconds = 5;
        settings.http.connect_timeout_seconds = 10;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_store_path_rejected() {
        let mut settings = Settings::default();
        settings.store.path = "  ".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { field, .. }) if field == "store.path"
        ));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut settings = Settings::default();
        settings.logger.level = "DEBUG".to_string();
        assert!(settings.validate().is_ok());

        settings.logger.level = "verbose".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_all_outputs_disabled_rejected() {
        let mut settings = Settings::default();
        settings.logger.console.enabled = false;
        assert!(settings.validate().is_err());
    }
}
