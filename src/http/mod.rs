//! HTTP module
//!
//! Provides the request dispatcher every API call goes through.
//!
//! # Features
//!
//! - **Status Mapping**: Non-success responses become typed errors
//! - **Pluggable Transport**: reqwest by default, swappable for tests
//! - **Rate Limiting**: Optional client-side token bucket using governor

mod client;
mod rate_limit;
mod transport;

pub use client::{map_response, Client, Response};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
