//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Default listen port.
pub const LISTEN_PORT: u16 = 8787;

/// Default timeout for forwarding calls, in seconds.
///
/// The downstream automation can legitimately take a while (LLM-backed
/// workflow steps), so this is generous but still bounded.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default listen address (loopback only; fronting proxies re-expose it).
#[must_use]
pub const fn listen() -> SocketAddr {
    SocketAddr::new(std::net::IpAddr::V4(Ipv4Addr::LOCALHOST), LISTEN_PORT)
}

/// Default request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
