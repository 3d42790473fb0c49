//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments and environment variables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Server configuration section
    #[serde(default)]
    pub server: ServerSection,

    /// Webhook target configuration section
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// Server configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Listen address, e.g. "127.0.0.1:8787"
    pub listen: Option<String>,

    /// Timeout in seconds for forwarding calls
    pub request_timeout: Option<u64>,

    /// Enable verbose (debug) logging
    #[serde(default)]
    pub verbose: bool,
}

/// Webhook target configuration section.
///
/// Both URLs are secrets; keeping them in a config file is supported but
/// the environment variables are the recommended channel.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Pipeline webhook URL
    pub pipeline_url: Option<String>,

    /// Scheduling webhook URL
    pub scheduling_url: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or contains
    /// unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Returns the commented configuration template written by `init`.
#[must_use]
pub const fn default_config_template() -> &'static str {
    r#"# n8n-relay configuration

[server]
# Address the relay listens on.
listen = "127.0.0.1:8787"

# Timeout in seconds for forwarding calls to the n8n webhooks.
request_timeout = 30

# Enable verbose (debug) logging.
# verbose = true

[webhook]
# Secret n8n webhook URLs. Prefer providing them via the
# N8N_PIPELINE_WEBHOOK and N8N_SCHEDULING_WEBHOOK environment
# variables; values set there override this file.
# pipeline_url = "https://n8n.example.com/webhook/screen"
# scheduling_url = "https://n8n.example.com/webhook/schedule"
"#
}
