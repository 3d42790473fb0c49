//! n8n-relay: webhook relay for the recruiting automation pipeline.
//!
//! A library for forwarding screening and scheduling requests to
//! externally-owned n8n webhooks and normalizing every downstream
//! failure into a stable JSON error contract.

pub mod client;
pub mod config;
pub mod relay;
pub mod request;
pub mod server;
