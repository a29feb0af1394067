//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required fields are absent or falsy.
    #[error("Missing required configuration fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Config file could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML config file is malformed.
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON config file is malformed.
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
