//! Request dispatcher
//!
//! Builds every API call from the client configuration, sends it through
//! the configured [`Transport`] and turns the raw response into either a
//! JSON document or a typed [`Error`]:
//!
//! | Status          | Outcome                         |
//! |-----------------|---------------------------------|
//! | 204             | empty object                    |
//! | other 2xx       | parsed JSON body                |
//! | 401             | [`Error::Authentication`]       |
//! | 404             | [`Error::NotFound`]             |
//! | 405             | [`Error::MethodNotAllowed`]     |
//! | 429             | [`Error::RateLimited`]          |
//! | other 4xx       | [`Error::Request`]              |
//! | anything else   | [`Error::HttpStatus`]           |
//!
//! Calls are attempted exactly once.

use super::rate_limit::RateLimiter;
use super::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
use crate::auth::AuthConfig;
use crate::config::{ClientConfig, API_VERSION};
use crate::error::{Error, Result};
use crate::pagination::{ListOptions, ListResponse};
use crate::types::{JsonObject, JsonValue, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Envelope of every single-resource response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    /// The resource
    pub data: T,
}

/// DNSimple API client
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    auth: AuthConfig,
    transport: Arc<dyn Transport>,
    rate_limiter: Option<RateLimiter>,
}

impl Client {
    /// Create a production client authenticated with `access_token`
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::builder().access_token(access_token).build())
    }

    /// Create a client from a full configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Create a client that sends requests through a custom transport
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        let auth = AuthConfig::from_token(config.access_token.clone());
        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Self {
            config,
            auth,
            transport: Arc::new(transport),
            rate_limiter,
        }
    }

    /// Configuration this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL without the version prefix
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Absolute URL for an API path, e.g. `/whoami`
    pub fn versioned_url(&self, path: &str, query: &[(String, String)]) -> Result<String> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let mut url = url::Url::parse(&format!("{base}/{API_VERSION}/{path}"))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url.into())
    }

    // ========================================================================
    // Verb helpers
    // ========================================================================

    /// GET a single resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// GET with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let value = self.request_json(Method::GET, path, query, None).await?;
        decode(value)
    }

    /// POST a JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_body(Method::POST, path, body).await
    }

    /// PUT a JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_body(Method::PUT, path, body).await
    }

    /// PATCH a JSON body
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_body(Method::PATCH, path, body).await
    }

    /// DELETE a resource; the body of the answer is discarded
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request_json(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Fetch one page of a list endpoint
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &ListOptions,
    ) -> Result<ListResponse<T>> {
        self.get_with_query(path, &options.to_query()).await
    }

    async fn send_body<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let value = self.request_json(method, path, &[], Some(&body)).await?;
        decode(value)
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Perform an authenticated call and return the decoded JSON body
    pub async fn request_json(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        self.dispatch(method, path, query, body, true).await
    }

    /// Perform a call without the `Authorization` header
    pub async fn request_json_unauthenticated(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        self.dispatch(method, path, query, body, false).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&JsonValue>,
        authenticated: bool,
    ) -> Result<JsonValue> {
        let url = self.versioned_url(path, query)?;
        let body = body.map(serde_json::to_string).transpose()?;

        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.config.user_agent_header()),
        ];
        if authenticated {
            if let Some(value) = self.auth.authorization_header() {
                headers.push(("Authorization".to_string(), value));
            }
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        debug!("Sending request: {} {}", method, url);

        let response = self
            .transport
            .send(TransportRequest {
                method,
                url,
                headers,
                body,
                timeout: self.config.timeout,
            })
            .await?;

        debug!("Received HTTP {} for {} {}", response.status, method, path);

        map_response(&response)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Response mapping
// ============================================================================

/// Error document returned by the API on 4xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<JsonValue>,
}

/// Interpret a raw response
pub fn map_response(response: &TransportResponse) -> Result<JsonValue> {
    let status = response.status;

    match status {
        204 => Ok(JsonValue::Object(JsonObject::new())),
        200..=299 => parse_success(status, &response.body),
        401 => Err(Error::Authentication {
            message: error_message(&response.body, "Authentication failed"),
        }),
        404 => Err(Error::NotFound {
            message: error_message(&response.body, "Resource not found"),
        }),
        405 => Err(Error::MethodNotAllowed {
            message: error_message(&response.body, "Method not allowed"),
        }),
        429 => {
            let retry_after_seconds = response
                .header("retry-after")
                .and_then(|v| v.trim().parse().ok());
            warn!(
                "Rate limited (429), retry after {:?}s",
                retry_after_seconds
            );
            Err(Error::RateLimited {
                message: error_message(&response.body, "Too many requests"),
                retry_after_seconds,
            })
        }
        400..=499 => {
            let parsed = parse_error_body(&response.body);
            Err(Error::Request {
                status,
                message: parsed
                    .message
                    .unwrap_or_else(|| fallback_message(&response.body, status)),
                errors: parsed.errors,
            })
        }
        _ => Err(Error::http_status(status, response.body.clone())),
    }
}

fn parse_success(status: u16, body: &str) -> Result<JsonValue> {
    if body.trim().is_empty() {
        return Ok(JsonValue::Object(JsonObject::new()));
    }
    serde_json::from_str(body)
        .map_err(|e| Error::decode(format!("invalid JSON in HTTP {status} response: {e}")))
}

fn parse_error_body(body: &str) -> ErrorBody {
    serde_json::from_str(body).unwrap_or_default()
}

fn error_message(body: &str, default: &str) -> String {
    parse_error_body(body)
        .message
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty() && !b.starts_with('{')))
        .unwrap_or_else(|| default.to_string())
}

fn fallback_message(body: &str, status: u16) -> String {
    let text = body.trim();
    if text.is_empty() || text.starts_with('{') {
        format!("HTTP {status}")
    } else {
        text.to_string()
    }
}

fn decode<T: DeserializeOwned>(value: JsonValue) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::decode(e.to_string()))
}
