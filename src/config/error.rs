//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
/// Webhook URL errors carry the setting name only, never the URL value
/// itself (the URLs are secrets).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid webhook URL for a named setting.
    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl {
        /// Name of the setting the URL came from
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid listen address.
    #[error("Invalid listen address '{value}': {reason}")]
    InvalidListen {
        /// The invalid address string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (zero or too large).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known setting names for webhook URL errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The pipeline webhook URL setting.
    pub const PIPELINE_WEBHOOK: &str = "pipeline_webhook";
    /// The scheduling webhook URL setting.
    pub const SCHEDULING_WEBHOOK: &str = "scheduling_webhook";
}
