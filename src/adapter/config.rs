//! Keypad presentation settings.
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "error_text": "Error",
//!   "error_dismiss_ms": 1500,
//!   "press_feedback_ms": 200
//! }
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Presentation policy owned by the keypad, never by the accumulator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Text shown while an evaluation error is latched
    pub error_text: String,

    /// How long the error text stays up before the keypad clears
    pub error_dismiss_ms: u64,

    /// How long a pressed button stays highlighted
    pub press_feedback_ms: u64,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            error_text: "Error".to_string(),
            error_dismiss_ms: 1500,
            press_feedback_ms: 200,
        }
    }
}

impl KeypadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error banner text
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set the error dismiss delay
    pub fn with_error_dismiss(mut self, delay: Duration) -> Self {
        self.error_dismiss_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the press highlight duration
    pub fn with_press_feedback(mut self, duration: Duration) -> Self {
        self.press_feedback_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn error_dismiss(&self) -> Duration {
        Duration::from_millis(self.error_dismiss_ms)
    }

    pub fn press_feedback(&self) -> Duration {
        Duration::from_millis(self.press_feedback_ms)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Keypad config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.error_text.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "error_text",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_keypad_behavior() {
        let config = KeypadConfig::default();
        assert_eq!(config.error_text, "Error");
        assert_eq!(config.error_dismiss(), Duration::from_millis(1500));
        assert_eq!(config.press_feedback(), Duration::from_millis(200));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = KeypadConfig::from_json(r#"{"error_dismiss_ms": 50}"#).unwrap();
        assert_eq!(config.error_dismiss_ms, 50);
        assert_eq!(config.error_text, "Error");
        assert_eq!(config.press_feedback_ms, 200);
    }

    #[test]
    fn blank_error_text_is_rejected() {
        let result = KeypadConfig::from_json(r#"{"error_text": "  "}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "error_text",
                ..
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            KeypadConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            KeypadConfig::from_json(r#"{"error_dismiss_ms": -1}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = KeypadConfig::load("/nonexistent/abacus/keypad.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = KeypadConfig::new()
            .with_error_text("Nope")
            .with_error_dismiss(Duration::from_secs(2))
            .with_press_feedback(Duration::from_millis(50));
        assert_eq!(config.error_text, "Nope");
        assert_eq!(config.error_dismiss_ms, 2000);
        assert_eq!(config.press_feedback_ms, 50);
    }
}
