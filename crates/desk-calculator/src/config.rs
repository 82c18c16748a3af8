//! Calculator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{parse_operand, ERROR_MARKER};

/// Window title used when none is configured
pub const DEFAULT_TITLE: &str = "Simple Calculator";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for this schema
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the calculator cannot use
    #[error("Configuration error: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Text shown after a failed calculation
    pub error_marker: String,
    /// Title drawn on the calculator frame
    pub title: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_marker: ERROR_MARKER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error marker
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Set the frame title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Parses and validates a JSON document; missing fields keep defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON config file
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded calculator config");
        Ok(config)
    }

    /// Checks that the error marker can never be mistaken for a number
    pub fn validate(&self) -> ConfigResult<()> {
        if self.error_marker.is_empty() {
            return Err(ConfigError::invalid("error marker must not be empty"));
        }
        if parse_operand(&self.error_marker).is_ok() {
            return Err(ConfigError::invalid(format!(
                "error marker {:?} reads as a number",
                self.error_marker
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.error_marker, "Error");
        assert_eq!(config.title, "Simple Calculator");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CalculatorConfig::new()
            .with_error_marker("E")
            .with_title("Desk");
        assert_eq!(config.error_marker, "E");
        assert_eq!(config.title, "Desk");
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let config = CalculatorConfig::from_json_str(r#"{"title": "Pocket"}"#).unwrap();
        assert_eq!(config.title, "Pocket");
        assert_eq!(config.error_marker, "Error");
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        let err = CalculatorConfig::from_json_str("{title").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let err = CalculatorConfig::new()
            .with_error_marker("")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_validate_rejects_numeric_marker() {
        let err = CalculatorConfig::from_json_str(r#"{"error_marker": "0"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"error_marker": "Err", "title": "Calc"}}"#).unwrap();
        let config = CalculatorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.error_marker, "Err");
        assert_eq!(config.title, "Calc");
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalculatorConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&CalculatorConfig::default()).unwrap();
        assert!(json.contains("\"error_marker\":\"Error\""));
    }
}
