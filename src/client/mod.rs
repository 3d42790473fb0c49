//! Caller-facing facade for the relay service.
//!
//! This module provides:
//! - The relay API client ([`RelayClient`])
//! - Typed flow results ([`ScreeningResult`], [`SchedulingResult`])
//! - Facade-level errors ([`ClientError`])
//!
//! The facade talks to the *local* relay endpoints, never to the n8n
//! webhooks directly, so the secret URLs stay server-side.

mod facade;


pub use facade::{ClientError, RelayClient, ScreeningResult, SchedulingResult};
