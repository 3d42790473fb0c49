//! The relay API client: validate, default, post, surface typed errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::relay::{Flow, HttpClient, HttpError, HttpRequest, ReqwestClient};
use crate::request::{PipelinePayload, SchedulingPayload, ValidationError};

/// Error type for facade calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required field failed validation; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The local relay endpoint could not be reached.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The payload could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The relay answered with a non-success status.
    ///
    /// Carries the normalized message from the relay's `{"error": ...}`
    /// body, or a synthesized fallback referencing the status.
    #[error("{message}")]
    Api {
        /// The relay's HTTP status.
        status: http::StatusCode,
        /// The normalized or synthesized error message.
        message: String,
    },

    /// The relay's response body was not valid JSON.
    #[error("Relay returned a non-JSON response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}

/// Screening payload returned by the pipeline flow.
///
/// The internal structure is owned by the downstream automation and is
/// deliberately not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreeningResult(pub serde_json::Value);

/// Scheduling payload returned by the scheduling flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchedulingResult(pub serde_json::Value);

/// Client for the local relay endpoints.
///
/// Validates input and applies the calendar default before issuing any
/// request; on validation failure no network call is made.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation, injected so tests can count
///   and capture calls.
///
/// # Example
///
/// ```no_run
/// use n8n_relay::client::RelayClient;
/// use n8n_relay::request::PipelinePayload;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RelayClient::new(Url::parse("http://127.0.0.1:8787")?);
/// let result = client
///     .run_pipeline(&PipelinePayload {
///         resume_text: "Jane Doe, 5 years of Rust".into(),
///         job_description: "Backend engineer".into(),
///         job_id: "job-42".into(),
///         ..PipelinePayload::default()
///     })
///     .await?;
/// println!("screening result: {}", result.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RelayClient<H = ReqwestClient> {
    http: H,
    base_url: Url,
}

impl RelayClient<ReqwestClient> {
    /// Creates a client over the production HTTP implementation with a
    /// 30-second request timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_http_client(
            ReqwestClient::with_timeout(std::time::Duration::from_secs(30)),
            base_url,
        )
    }
}

impl<H> RelayClient<H> {
    /// Creates a client over a custom HTTP implementation.
    #[must_use]
    pub const fn with_http_client(http: H, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Returns the relay base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl<H: HttpClient> RelayClient<H> {
    /// Runs the full screening pipeline for one resume.
    ///
    /// Validates `resume_text` and `job_description`, defaults the
    /// interviewer calendar, and posts to `/api/screen`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] before any network call for
    /// invalid input, [`ClientError::Http`] when the relay is unreachable,
    /// and [`ClientError::Api`] when the relay answers non-2xx.
    pub async fn run_pipeline(
        &self,
        payload: &PipelinePayload,
    ) -> Result<ScreeningResult, ClientError> {
        payload.validate()?;

        let effective = payload.clone().with_calendar_default();
        let data = self.post_flow(Flow::Pipeline, "api/screen", &effective).await?;
        Ok(ScreeningResult(data))
    }

    /// Schedules an interview for one candidate.
    ///
    /// Validates `candidate_email` and `candidate_name`, defaults the
    /// interviewer calendar, and posts to `/api/schedule`.
    ///
    /// # Errors
    ///
    /// Same contract as [`run_pipeline`](Self::run_pipeline).
    pub async fn schedule_interview(
        &self,
        payload: &SchedulingPayload,
    ) -> Result<SchedulingResult, ClientError> {
        payload.validate()?;

        let effective = payload.clone().with_calendar_default();
        let data = self
            .post_flow(Flow::Scheduling, "api/schedule", &effective)
            .await?;
        Ok(SchedulingResult(data))
    }

    /// Posts the payload to a relay endpoint and parses the JSON reply.
    async fn post_flow<P: Serialize>(
        &self,
        flow: Flow,
        path: &str,
        payload: &P,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        let body = serde_json::to_vec(payload).map_err(ClientError::Serialize)?;

        let response = self.http.request(HttpRequest::post_json(url, body)).await?;

        let data: serde_json::Value =
            serde_json::from_slice(&response.body).map_err(ClientError::InvalidResponse)?;

        if !response.is_success() {
            let message = data
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map_or_else(
                    || {
                        format!(
                            "{} failed ({})",
                            flow.failure_label(),
                            response.status.as_u16()
                        )
                    },
                    ToOwned::to_owned,
                );
            return Err(ClientError::Api {
                status: response.status,
                message,
            });
        }

        Ok(data)
    }
}
