//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// n8n-relay: webhook relay for the recruiting automation pipeline
///
/// Accepts screening and scheduling requests, forwards them to the
/// configured n8n webhooks, and normalizes every downstream failure
/// into a stable JSON error contract.
#[derive(Debug, Parser)]
#[command(name = "n8n-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address to listen on (default: 127.0.0.1:8787)
    #[arg(long)]
    pub listen: Option<SocketAddr>,

    /// Pipeline webhook URL (secret; prefer N8N_PIPELINE_WEBHOOK)
    #[arg(long = "pipeline-webhook", value_name = "URL")]
    pub pipeline_webhook: Option<String>,

    /// Scheduling webhook URL (secret; prefer N8N_SCHEDULING_WEBHOOK)
    #[arg(long = "scheduling-webhook", value_name = "URL")]
    pub scheduling_webhook: Option<String>,

    /// Timeout in seconds for forwarding calls
    #[arg(long = "request-timeout", value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a configuration file template
    Init {
        /// Output path for the generated template
        #[arg(long, default_value = "n8n-relay.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the process environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an explicit iterator (for tests).
    ///
    /// # Errors
    ///
    /// Returns a clap error when the arguments do not match the interface.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
