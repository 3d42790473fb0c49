//! The webhook relay: one forwarding call per request, no retries.

use std::fmt;

use url::Url;

use super::{HttpClient, HttpRequest, RelayError, RelayOutcome};

/// The two relay flows, selecting the target URL and the flow-specific
/// caller-facing message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Resume-screening pipeline (`/api/screen`).
    Pipeline,
    /// Standalone interview scheduling (`/api/schedule`).
    Scheduling,
}

impl Flow {
    /// Label used in configuration-error messages.
    #[must_use]
    pub const fn config_label(self) -> &'static str {
        match self {
            Self::Pipeline => "N8N pipeline",
            Self::Scheduling => "N8N scheduling",
        }
    }

    /// Label used in synthesized non-success fallback messages.
    #[must_use]
    pub const fn failure_label(self) -> &'static str {
        match self {
            Self::Pipeline => "Pipeline",
            Self::Scheduling => "Scheduling",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipeline => write!(f, "pipeline"),
            Self::Scheduling => write!(f, "scheduling"),
        }
    }
}

/// The two secret webhook URLs, resolved once from validated configuration.
///
/// Either may be absent; forwarding against an unconfigured flow fails
/// before any network call. The URLs are secrets: they never appear in
/// responses and must not be logged above debug level.
#[derive(Debug, Clone, Default)]
pub struct RelayTargets {
    /// Pipeline webhook URL.
    pub pipeline: Option<Url>,
    /// Scheduling webhook URL.
    pub scheduling: Option<Url>,
}

impl RelayTargets {
    /// Returns the target URL for the given flow, if configured.
    #[must_use]
    pub const fn url_for(&self, flow: Flow) -> Option<&Url> {
        match flow {
            Flow::Pipeline => self.pipeline.as_ref(),
            Flow::Scheduling => self.scheduling.as_ref(),
        }
    }
}

/// Forwards validated requests to the configured webhook endpoints.
///
/// Owns the single external call: selects the flow's URL, issues exactly
/// one JSON POST, and classifies the result into a [`RelayOutcome`].
/// There is no retry, no queuing, and no shared state between calls.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation, injected so tests can count
///   and capture calls.
#[derive(Debug)]
pub struct WebhookRelay<H> {
    client: H,
    targets: RelayTargets,
}

impl<H> WebhookRelay<H> {
    /// Creates a relay over the given client and targets.
    #[must_use]
    pub const fn new(client: H, targets: RelayTargets) -> Self {
        Self { client, targets }
    }

    /// Returns the configured targets.
    #[must_use]
    pub const fn targets(&self) -> &RelayTargets {
        &self.targets
    }
}

impl<H: HttpClient> WebhookRelay<H> {
    /// Forwards the body to the flow's webhook and classifies the result.
    ///
    /// The body is sent as-is; the relay does not inspect or rewrite it.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::NotConfigured`] without touching the network
    /// when the flow's URL is absent, and [`RelayError::Serialize`] if the
    /// body cannot be serialized.
    pub async fn forward(
        &self,
        flow: Flow,
        body: &serde_json::Value,
    ) -> Result<RelayOutcome, RelayError> {
        let Some(url) = self.targets.url_for(flow) else {
            tracing::warn!(%flow, "relay target not configured");
            return Err(RelayError::NotConfigured(flow));
        };

        let request = HttpRequest::post_json(url.clone(), serde_json::to_vec(body)?);

        tracing::debug!(%flow, "forwarding request to webhook");
        let outcome = RelayOutcome::classify(self.client.request(request).await);
        tracing::debug!(%flow, outcome = outcome_label(&outcome), "classified webhook response");

        Ok(outcome)
    }
}

/// Short label for logging; never exposed to callers.
const fn outcome_label(outcome: &RelayOutcome) -> &'static str {
    match outcome {
        RelayOutcome::Success(_) => "success",
        RelayOutcome::UpstreamRejected { .. } => "upstream_rejected",
        RelayOutcome::UpstreamEmpty => "upstream_empty",
        RelayOutcome::UpstreamMalformedJson { .. } => "upstream_malformed_json",
        RelayOutcome::TransportFailure { .. } => "transport_failure",
    }
}
