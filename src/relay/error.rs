//! Error types for the relay layer.

use thiserror::Error;

use super::forwarder::Flow;

/// Error type for HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The relay treats every variant as terminal for the current call;
/// callers are free to retry the whole request themselves.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for relay preconditions.
///
/// These errors occur before any network call is attempted, which keeps
/// them distinct from [`RelayOutcome::TransportFailure`](super::RelayOutcome).
#[derive(Debug, Error)]
pub enum RelayError {
    /// The target webhook URL for the flow is not configured.
    ///
    /// A deployment defect, not a caller defect; surfaced as HTTP 500.
    #[error("{} webhook URL not configured", .0.config_label())]
    NotConfigured(Flow),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}
