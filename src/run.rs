//! Application execution logic.
//!
//! This module binds the listener and serves the relay router until a
//! shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use n8n_relay::config::ValidatedConfig;
use n8n_relay::relay::{Flow, RelayTargets, ReqwestClient, WebhookRelay};
use n8n_relay::server;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to bind the listen address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound
        addr: SocketAddr,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The server terminated with an error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Builds the relay from the validated configuration and serves it.
///
/// # Errors
///
/// Returns [`RunError`] if the listener cannot be bound or the server
/// fails while running.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let targets = RelayTargets {
        pipeline: config.pipeline_webhook.clone(),
        scheduling: config.scheduling_webhook.clone(),
    };
    warn_unconfigured(&targets);

    let client = ReqwestClient::with_timeout(config.request_timeout);
    let relay = Arc::new(WebhookRelay::new(client, targets));
    let app = server::router(relay);

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|e| RunError::Bind {
            addr: config.listen,
            source: e,
        })?;
    tracing::info!(addr = %config.listen, "relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(RunError::Serve)
}

/// Logs a startup warning for each flow without a configured target.
///
/// Not fatal: the relay answers such requests with the configuration
/// error instead.
fn warn_unconfigured(targets: &RelayTargets) {
    for flow in [Flow::Pipeline, Flow::Scheduling] {
        if targets.url_for(flow).is_none() {
            tracing::warn!(%flow, "webhook URL not configured; requests for this flow will fail");
        }
    }
}

/// Resolves when the process receives a shutdown signal.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
