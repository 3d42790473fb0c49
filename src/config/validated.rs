//! Validated configuration after merging CLI, environment, and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Environment-variable overrides for the secret webhook URLs.
///
/// Captured as a plain struct so tests can inject values without
/// touching the process environment.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    /// Value of `N8N_PIPELINE_WEBHOOK`, if set.
    pub pipeline_webhook: Option<String>,
    /// Value of `N8N_SCHEDULING_WEBHOOK`, if set.
    pub scheduling_webhook: Option<String>,
}

impl EnvOverrides {
    /// Environment variable naming the pipeline webhook URL.
    pub const PIPELINE_VAR: &'static str = "N8N_PIPELINE_WEBHOOK";
    /// Environment variable naming the scheduling webhook URL.
    pub const SCHEDULING_VAR: &'static str = "N8N_SCHEDULING_WEBHOOK";

    /// Reads the overrides from the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            pipeline_webhook: std::env::var(Self::PIPELINE_VAR).ok(),
            scheduling_webhook: std::env::var(Self::SCHEDULING_VAR).ok(),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration. The webhook
/// URLs remain optional by design: their absence is reported per request as
/// a configuration error rather than preventing startup.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args, environment
/// overrides, and optional TOML config. The function validates all inputs
/// and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Address the relay listens on
    pub listen: SocketAddr,

    /// Pipeline webhook URL (secret; absent means unconfigured)
    pub pipeline_webhook: Option<Url>,

    /// Scheduling webhook URL (secret; absent means unconfigured)
    pub scheduling_webhook: Option<Url>,

    /// Timeout for forwarding calls
    pub request_timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    /// Renders the configuration for startup logging.
    ///
    /// The webhook URLs are secrets and are rendered as set/unset only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ listen: {}, pipeline_webhook: {}, scheduling_webhook: {}, \
             request_timeout: {}s, verbose: {} }}",
            self.listen,
            configured_label(self.pipeline_webhook.as_ref()),
            configured_label(self.scheduling_webhook.as_ref()),
            self.request_timeout.as_secs(),
            self.verbose,
        )
    }
}

const fn configured_label(url: Option<&Url>) -> &'static str {
    if url.is_some() { "set" } else { "unset" }
}

impl ValidatedConfig {
    /// Loads and validates configuration for the given CLI arguments,
    /// reading the TOML file named by `--config` (if any) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or
    /// if any value fails validation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = cli
            .config
            .as_deref()
            .map(TomlConfig::load)
            .transpose()?;

        Self::from_raw(cli, toml.as_ref(), &EnvOverrides::from_process())
    }

    /// Creates a validated configuration from explicit sources.
    ///
    /// Webhook URLs resolve CLI > environment > TOML; other values resolve
    /// CLI > TOML > defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A webhook URL fails to parse or uses a non-HTTP scheme
    /// - The listen address is invalid
    /// - The request timeout is zero
    pub fn from_raw(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        env: &EnvOverrides,
    ) -> Result<Self, ConfigError> {
        let pipeline_webhook = resolve_webhook(
            field::PIPELINE_WEBHOOK,
            [
                cli.pipeline_webhook.as_deref(),
                env.pipeline_webhook.as_deref(),
                toml.and_then(|t| t.webhook.pipeline_url.as_deref()),
            ],
        )?;
        let scheduling_webhook = resolve_webhook(
            field::SCHEDULING_WEBHOOK,
            [
                cli.scheduling_webhook.as_deref(),
                env.scheduling_webhook.as_deref(),
                toml.and_then(|t| t.webhook.scheduling_url.as_deref()),
            ],
        )?;

        let listen = resolve_listen(cli, toml)?;
        let request_timeout = resolve_timeout(cli, toml)?;
        let verbose = cli.verbose || toml.is_some_and(|t| t.server.verbose);

        Ok(Self {
            listen,
            pipeline_webhook,
            scheduling_webhook,
            request_timeout,
            verbose,
        })
    }
}

/// Resolves one webhook URL from its prioritized sources.
///
/// The error carries the setting name but never the URL value.
fn resolve_webhook(
    name: &'static str,
    sources: [Option<&str>; 3],
) -> Result<Option<Url>, ConfigError> {
    let Some(raw) = sources.into_iter().flatten().next() else {
        return Ok(None);
    };

    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        field: name,
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            field: name,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(Some(url))
}

fn resolve_listen(cli: &Cli, toml: Option<&TomlConfig>) -> Result<SocketAddr, ConfigError> {
    if let Some(listen) = cli.listen {
        return Ok(listen);
    }

    match toml.and_then(|t| t.server.listen.as_deref()) {
        Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidListen {
                value: value.to_owned(),
                reason: e.to_string(),
            }
        }),
        None => Ok(defaults::listen()),
    }
}

fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
    let secs = cli
        .request_timeout
        .or_else(|| toml.and_then(|t| t.server.request_timeout))
        .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

    if secs == 0 {
        return Err(ConfigError::InvalidDuration {
            field: "request_timeout",
            reason: "must be greater than zero".to_owned(),
        });
    }

    Ok(Duration::from_secs(secs))
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, super::toml::default_config_template()).map_err(|e| {
        ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        }
    })
}
