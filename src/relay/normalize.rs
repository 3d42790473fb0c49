//! Normalization of relay outcomes into the caller-facing contract.
//!
//! Every error becomes `{"error": string}` with a status chosen per
//! category; success payloads pass through untouched. Callers never see
//! transport internals, stack traces, or the secret webhook URLs.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::forwarder::Flow;
use super::{RelayError, RelayOutcome};

/// The caller-facing response: an HTTP status and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    /// Status returned to the original caller.
    pub status: http::StatusCode,
    /// JSON body; either the downstream payload or `{"error": string}`.
    pub body: serde_json::Value,
}

impl NormalizedResponse {
    fn error(status: http::StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }
}

impl IntoResponse for NormalizedResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Maps a relay result to the response returned to the original caller.
///
/// Status mapping: success passes through as 200, upstream rejections keep
/// the downstream status, empty and malformed bodies are always 502
/// (whatever success status accompanied them), transport and configuration
/// failures are 500.
#[must_use]
pub fn normalize(flow: Flow, result: Result<RelayOutcome, RelayError>) -> NormalizedResponse {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            return NormalizedResponse::error(http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match outcome {
        RelayOutcome::Success(payload) => NormalizedResponse {
            status: http::StatusCode::OK,
            body: payload,
        },
        RelayOutcome::UpstreamRejected { status, body } => {
            let message = if body.trim().is_empty() {
                format!("{} failed ({})", flow.failure_label(), status.as_u16())
            } else {
                body
            };
            NormalizedResponse::error(status, message)
        }
        RelayOutcome::UpstreamEmpty => {
            NormalizedResponse::error(http::StatusCode::BAD_GATEWAY, empty_body_message(flow))
        }
        RelayOutcome::UpstreamMalformedJson { excerpt } => NormalizedResponse::error(
            http::StatusCode::BAD_GATEWAY,
            format!("{}{excerpt}", malformed_prefix(flow)),
        ),
        RelayOutcome::TransportFailure { message } => {
            let message = if message.trim().is_empty() {
                transport_fallback_message(flow).to_owned()
            } else {
                message
            };
            NormalizedResponse::error(http::StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

/// Diagnostic for a success status with no body. For n8n this points the
/// operator at workflow activation and credentials.
const fn empty_body_message(flow: Flow) -> &'static str {
    match flow {
        Flow::Pipeline => {
            "n8n returned an empty response. Check: (1) workflow is active, (2) credentials are connected in n8n."
        }
        Flow::Scheduling => "n8n scheduling webhook returned empty response.",
    }
}

const fn malformed_prefix(flow: Flow) -> &'static str {
    match flow {
        Flow::Pipeline => "n8n response is not valid JSON: ",
        Flow::Scheduling => "Scheduling response is not valid JSON: ",
    }
}

const fn transport_fallback_message(flow: Flow) -> &'static str {
    match flow {
        Flow::Pipeline => "Failed to reach n8n pipeline",
        Flow::Scheduling => "Failed to reach n8n scheduling webhook",
    }
}
