//! Pluggable transport
//!
//! A transport performs exactly one HTTP exchange and reports the raw
//! status, headers and body text. Status interpretation belongs to the
//! dispatcher, so a transport only fails for connection-level problems
//! or when the configured timeout elapses.

use crate::error::{Error, Result};
use crate::types::{Method, StringMap};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;

/// A fully built request handed to a [`Transport`]
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL including the query string
    pub url: String,
    /// Header name/value pairs, in the order they should be sent
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body
    pub body: Option<String>,
    /// Deadline for the whole exchange
    pub timeout: Duration,
}

impl TransportRequest {
    /// Value of the first header with this name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response as seen on the wire
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    /// Status code
    pub status: u16,
    /// Response headers, names lower-cased
    pub headers: StringMap,
    /// Body text
    pub body: String,
}

impl TransportResponse {
    /// Create a response with a status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: StringMap::new(),
            body: body.into(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Performs one HTTP request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw response
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh reqwest client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut req = self
            .client
            .request(request.method.into(), &request.url)
            .timeout(request.timeout);

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(|e| classify(e, request.timeout))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        trace!(status, bytes = body.len(), "Response received");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn classify(error: reqwest::Error, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        Error::Http(error)
    }
}
