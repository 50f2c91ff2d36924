//! Auth configuration types

use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How requests are authenticated
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication; only OAuth exchange and public calls work
    #[default]
    None,

    /// Bearer token authentication (account or OAuth access token)
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Bearer auth from an optional token; blank tokens mean no auth
    pub fn from_token(token: Option<String>) -> Self {
        match token.none_if_empty() {
            Some(token) => AuthConfig::Bearer { token },
            None => AuthConfig::None,
        }
    }

    /// Value of the `Authorization` header, if any
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            AuthConfig::None => None,
            AuthConfig::Bearer { token } => Some(format!("Bearer {token}")),
        }
    }

    /// Whether requests will carry credentials
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, AuthConfig::None)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

// ============================================================================
// OAuth
// ============================================================================

/// Optional parameters of the authorization URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizeOptions {
    /// Opaque value echoed back to the redirect URI
    pub state: Option<String>,
    /// Where the user is sent after granting access
    pub redirect_uri: Option<String>,
    /// Requested scope
    pub scope: Option<String>,
}

/// Parameters for exchanging an authorization code for a token
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TokenExchange {
    /// Code received on the redirect URI
    pub code: String,
    /// OAuth application id
    pub client_id: String,
    /// OAuth application secret
    pub client_secret: String,
    /// Same state passed to the authorization URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Same redirect URI passed to the authorization URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

impl TokenExchange {
    /// Create an exchange request
    pub fn new(
        code: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            state: None,
            redirect_uri: None,
        }
    }

    /// Set the state
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the redirect URI
    #[must_use]
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }
}

impl fmt::Debug for TokenExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenExchange")
            .field("code", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("state", &self.state)
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

/// Token issued by the OAuth exchange
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The token to send as bearer credentials
    pub access_token: String,
    /// Token type, normally `Bearer`
    pub token_type: String,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
    /// Account the token is bound to
    pub account_id: u64,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("account_id", &self.account_id)
            .finish()
    }
}
