//! Adapter error types.

use thiserror::Error;

/// Errors that can occur when loading keypad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors reported by a display surface
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SurfaceError {
    #[error("Display surface is unavailable: {0}")]
    Unavailable(String),
}
