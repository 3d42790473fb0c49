//! Classification of a single downstream HTTP exchange.

use super::{HttpError, HttpResponse};

/// Maximum number of characters of a malformed body kept for diagnostics.
///
/// Bounds the size of caller-visible error messages; the full body is
/// never echoed back.
pub const BODY_EXCERPT_CHARS: usize = 300;

/// The classified result of one forwarding call.
///
/// Exactly one category applies per call; the categories are mutually
/// exclusive and collectively exhaustive over the observable outcomes of
/// a single HTTP exchange. Constructed by [`classify`](Self::classify),
/// consumed immediately by the normalizer, never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// Downstream returned a success status with a parseable JSON body.
    Success(serde_json::Value),

    /// Downstream responded with a non-success status.
    ///
    /// The raw body is carried verbatim so the caller sees the real
    /// failure; a fallback message is synthesized later when it is empty.
    UpstreamRejected {
        /// The downstream HTTP status.
        status: http::StatusCode,
        /// The downstream body, lossily decoded.
        body: String,
    },

    /// Downstream returned a success status but no body.
    ///
    /// Treated as a protocol violation on the downstream side; for n8n
    /// this usually means the workflow is inactive or its credentials
    /// are disconnected.
    UpstreamEmpty,

    /// Downstream returned a success status with a body that is not
    /// valid JSON. Carries at most [`BODY_EXCERPT_CHARS`] characters of
    /// the raw body.
    UpstreamMalformedJson {
        /// Leading excerpt of the unparseable body.
        excerpt: String,
    },

    /// The forwarding call itself failed (DNS, connect, timeout, abort).
    TransportFailure {
        /// The transport's own error message.
        message: String,
    },
}

impl RelayOutcome {
    /// Classifies the raw result of one HTTP exchange.
    ///
    /// Priority order, first match wins:
    /// 1. transport failure
    /// 2. non-2xx status
    /// 3. empty body after trimming
    /// 4. unparseable JSON body
    /// 5. success
    ///
    /// Note the downstream status is only consulted when it is non-success:
    /// empty and malformed bodies classify the same way whatever success
    /// status accompanied them.
    #[must_use]
    pub fn classify(result: Result<HttpResponse, HttpError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                return Self::TransportFailure {
                    message: e.to_string(),
                };
            }
        };

        let text = response.body_text();

        if !response.is_success() {
            return Self::UpstreamRejected {
                status: response.status,
                body: text,
            };
        }

        if text.trim().is_empty() {
            return Self::UpstreamEmpty;
        }

        match serde_json::from_str(&text) {
            Ok(value) => Self::Success(value),
            Err(_) => Self::UpstreamMalformedJson {
                excerpt: text.chars().take(BODY_EXCERPT_CHARS).collect(),
            },
        }
    }
}
