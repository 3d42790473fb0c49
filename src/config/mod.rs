//! Configuration layer for n8n-relay.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **Environment variables** - `N8N_PIPELINE_WEBHOOK` and
//!    `N8N_SCHEDULING_WEBHOOK` (webhook URLs only; these are secrets and
//!    deployments commonly inject them through the environment)
//! 3. **TOML config file** - Values from the configuration file
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URLs have no defaults and are allowed to be absent: the
//! relay starts either way and reports the missing configuration per
//! request. They are never silently defaulted, and validation errors
//! about them never echo the URL value.
//!
//! The `verbose` flag uses OR semantics: set `true` in either CLI or TOML,
//! the result is `true` (flags only enable, not disable).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{EnvOverrides, ValidatedConfig, write_default_config};
