//! HTTP server layer: the axum router and the two relay endpoints.
//!
//! Routes:
//! - `POST /api/screen` — pipeline flow
//! - `POST /api/schedule` — scheduling flow
//! - `GET /health` — liveness probe
//!
//! Both relay endpoints accept JSON only and answer JSON only; every error
//! body is `{"error": string}`. Any non-POST method on a relay path yields
//! 405 with the same body shape.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::relay::{Flow, HttpClient, WebhookRelay, normalize};
use crate::request::{PipelinePayload, SchedulingPayload};


/// Builds the application router over the given relay.
///
/// The relay is shared state; each request still owns its own forwarding
/// call and buffers, so no cross-request coordination exists.
pub fn router<H>(relay: Arc<WebhookRelay<H>>) -> Router
where
    H: HttpClient + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/screen",
            post(screen::<H>).fallback(method_not_allowed),
        )
        .route(
            "/api/schedule",
            post(schedule::<H>).fallback(method_not_allowed),
        )
        .with_state(relay)
}

/// Liveness probe.
async fn health() -> &'static str {
    "OK"
}

/// Handles `POST /api/screen`.
async fn screen<H: HttpClient>(
    State(relay): State<Arc<WebhookRelay<H>>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    relay_request::<H, PipelinePayload>(&relay, Flow::Pipeline, body, PipelinePayload::validate)
        .await
}

/// Handles `POST /api/schedule`.
async fn schedule<H: HttpClient>(
    State(relay): State<Arc<WebhookRelay<H>>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    relay_request::<H, SchedulingPayload>(
        &relay,
        Flow::Scheduling,
        body,
        SchedulingPayload::validate,
    )
    .await
}

/// Shared handler body for both flows.
///
/// Checks the request against the flow's typed shape and runs the field
/// validator before any network activity; only then forwards the original
/// JSON value unmodified, so unknown fields and field order survive the
/// round trip through validation.
async fn relay_request<H, P>(
    relay: &WebhookRelay<H>,
    flow: Flow,
    body: Result<Json<serde_json::Value>, JsonRejection>,
    validate: impl Fn(&P) -> Result<(), crate::request::ValidationError>,
) -> Response
where
    H: HttpClient,
    P: serde::de::DeserializeOwned,
{
    let Json(body) = match body {
        Ok(json) => json,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let payload: P = match serde_json::from_value(body.clone()) {
        Ok(payload) => payload,
        Err(e) => return bad_request(format!("Invalid request body: {e}")),
    };

    if let Err(e) = validate(&payload) {
        return bad_request(e.to_string());
    }

    normalize(flow, relay.forward(flow, &body).await).into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        http::StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.into() })),
    )
        .into_response()
}

/// Fallback for non-POST methods on the relay paths.
async fn method_not_allowed() -> Response {
    (
        http::StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}
