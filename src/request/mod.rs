//! Typed request payloads for the two relay flows.
//!
//! This module provides:
//! - The pipeline request shape ([`PipelinePayload`])
//! - The scheduling request shape ([`SchedulingPayload`])
//! - Required-field validation ([`ValidationError`])
//! - Calendar-ID defaulting ([`DEFAULT_CALENDAR_ID`])

mod payload;


pub use payload::{DEFAULT_CALENDAR_ID, PipelinePayload, SchedulingPayload, ValidationError};
