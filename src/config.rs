//! Client configuration
//!
//! The only state a [`Client`](crate::http::Client) keeps between calls:
//! where the API lives, which token to send, how long one call may take,
//! and how the client identifies itself.
//!
//! Configuration can be assembled with the builder, read from the
//! environment, or loaded from a YAML file:
//!
//! ```yaml
//! access_token: "dnsimpletest_a_xxxxxxxx"
//! sandbox: true
//! timeout_secs: 30
//! user_agent: "my-app/1.2"
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 5
//! ```

use crate::error::{Error, Result};
use crate::http::RateLimiterConfig;
use crate::types::{Environment, OptionStringExt};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.dnsimple.com";

/// Sandbox API endpoint
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsimple.com";

/// Path prefix of the supported API version
pub const API_VERSION: &str = "v2";

/// Default timeout for a whole HTTP call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Environment variable names read by [`ClientConfig::from_env`]
pub mod env {
    pub const TOKEN: &str = "DNSIMPLE_TOKEN";
    pub const BASE_URL: &str = "DNSIMPLE_BASE_URL";
    pub const SANDBOX: &str = "DNSIMPLE_SANDBOX";
    pub const TIMEOUT_SECS: &str = "DNSIMPLE_TIMEOUT_SECS";
    pub const USER_AGENT: &str = "DNSIMPLE_USER_AGENT";
}

/// Product token this crate always sends in `User-Agent`
pub fn default_user_agent() -> String {
    format!("dnsimple-rust/{}", crate::VERSION)
}

/// Configuration for the API client
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL, without the version prefix
    pub base_url: String,
    /// OAuth or account access token
    pub access_token: Option<String>,
    /// Timeout applied to each HTTP call
    pub timeout: Duration,
    /// Extra product token prepended to the default user agent
    pub user_agent: Option<String>,
    /// Client-side throttle, off unless set
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            rate_limit: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("rate_limit", &self.rate_limit)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Full `User-Agent` header value
    pub fn user_agent_header(&self) -> String {
        match self.user_agent.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => format!("{custom} {}", default_user_agent()),
            _ => default_user_agent(),
        }
    }

    /// Check that the configuration can produce working requests
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        let parsed = url::Url::parse(base)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }
        Ok(())
    }

    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if parse_flag(env::SANDBOX, lookup(env::SANDBOX))? {
            builder = builder.environment(Environment::Sandbox);
        }
        if let Some(base_url) = lookup(env::BASE_URL).none_if_empty() {
            builder = builder.base_url(base_url);
        }
        if let Some(token) = lookup(env::TOKEN).none_if_empty() {
            builder = builder.access_token(token);
        }
        if let Some(secs) = lookup(env::TIMEOUT_SECS).none_if_empty() {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::invalid_value(env::TIMEOUT_SECS, format!("'{secs}' is not a number"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = lookup(env::USER_AGENT).none_if_empty() {
            builder = builder.user_agent(agent);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let config = file.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(Error::Io)?;
        Self::from_yaml_str(&content)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Point at production or sandbox
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.base_url = environment.base_url().to_string();
        self
    }

    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the extra user agent token
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Enable the client-side throttle
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

// ============================================================================
// YAML file format
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
    #[serde(default)]
    sandbox: bool,
    #[serde(default)]
    rate_limit: Option<RateLimitFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RateLimitFile {
    requests_per_second: u32,
    #[serde(default)]
    burst_size: Option<u32>,
}

impl ConfigFile {
    fn into_config(self) -> ClientConfig {
        let mut builder = ClientConfig::builder();
        if self.sandbox {
            builder = builder.environment(Environment::Sandbox);
        }
        if let Some(base_url) = self.base_url.none_if_empty() {
            builder = builder.base_url(base_url);
        }
        if let Some(token) = self.access_token.none_if_empty() {
            builder = builder.access_token(token);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = self.user_agent.none_if_empty() {
            builder = builder.user_agent(agent);
        }
        if let Some(limit) = self.rate_limit {
            builder = builder.rate_limit(RateLimiterConfig::new(
                limit.requests_per_second,
                limit.burst_size.unwrap_or(limit.requests_per_second),
            ));
        }
        builder.build()
    }
}

fn parse_flag(name: &str, value: Option<String>) -> Result<bool> {
    match value.none_if_empty() {
        None => Ok(false),
        Some(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => Err(Error::invalid_value(
                name,
                format!("'{other}' is not a boolean"),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(config.access_token.is_none());
        assert!(config.rate_limit.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .base_url("https://api.example.com/")
            .access_token("token-123")
            .timeout(Duration::from_secs(5))
            .user_agent("my-app/1.0")
            .rate_limit(RateLimiterConfig::new(2, 4))
            .build();

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.access_token.as_deref(), Some("token-123"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.rate_limit.unwrap().burst_size, 4);
    }

    #[test]
    fn test_user_agent_header() {
        let config = ClientConfig::default();
        assert_eq!(config.user_agent_header(), default_user_agent());

        let config = ClientConfig::builder().user_agent("my-app/1.0").build();
        assert_eq!(
            config.user_agent_header(),
            format!("my-app/1.0 dnsimple-rust/{}", crate::VERSION)
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::builder().access_token("super-secret").build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig::builder().base_url("").build();
        assert!(matches!(
            config.validate(),
            Err(Error::MissingConfigField { .. })
        ));

        let config = ClientConfig::builder().base_url("ftp://example.com").build();
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));

        let config = ClientConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DNSIMPLE_TOKEN", "abc"),
            ("DNSIMPLE_SANDBOX", "true"),
            ("DNSIMPLE_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, SANDBOX_BASE_URL);
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_from_lookup_base_url_wins_over_sandbox() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DNSIMPLE_SANDBOX", "1"),
            ("DNSIMPLE_BASE_URL", "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        let result = ClientConfig::from_lookup(lookup(&[("DNSIMPLE_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue { .. })));

        let result = ClientConfig::from_lookup(lookup(&[("DNSIMPLE_SANDBOX", "maybe")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue { .. })));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
access_token: "token-xyz"
sandbox: true
timeout_secs: 30
user_agent: "ci-bot/2"
rate_limit:
  requests_per_second: 5
"#;
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
        assert_eq!(config.access_token.as_deref(), Some("token-xyz"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent.as_deref(), Some("ci-bot/2"));

        let limit = config.rate_limit.unwrap();
        assert_eq!(limit.requests_per_second, 5);
        assert_eq!(limit.burst_size, 5);
    }

    #[test]
    fn test_from_yaml_unknown_key() {
        let result = ClientConfig::from_yaml_str("acces_token: typo\n");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: https://api.example.com").unwrap();
        writeln!(file, "access_token: file-token").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.access_token.as_deref(), Some("file-token"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ClientConfig::from_file("/nonexistent/dnsimple.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
