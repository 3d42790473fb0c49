//! Relay layer for forwarding requests to the n8n webhook endpoints.
//!
//! This module provides:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The forwarding relay itself ([`WebhookRelay`], [`Flow`], [`RelayTargets`])
//! - Downstream outcome classification ([`RelayOutcome`])
//! - Caller-facing response normalization ([`NormalizedResponse`], [`normalize`])

mod client;
mod error;
mod forwarder;
mod http;
mod normalize;
mod outcome;

#[cfg(test)]
mod forwarder_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, RelayError};
pub use forwarder::{Flow, RelayTargets, WebhookRelay};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use normalize::{NormalizedResponse, normalize};
pub use outcome::{BODY_EXCERPT_CHARS, RelayOutcome};
