//! OAuth authorization code flow
//!
//! The authorization URL lives on the web host (the API host without its
//! `api.` label); the token exchange is a regular API call made without
//! credentials.

use super::types::{AccessToken, AuthorizeOptions, TokenExchange};
use crate::error::{Error, Result};
use crate::http::Client;
use crate::types::Method;
use serde::Serialize;
use tracing::debug;

/// OAuth helpers bound to a client
#[derive(Debug, Clone, Copy)]
pub struct OAuth<'a> {
    client: &'a Client,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    #[serde(flatten)]
    exchange: &'a TokenExchange,
}

impl<'a> OAuth<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// URL to send the user to in order to grant access
    pub fn authorize_url(&self, client_id: &str, options: &AuthorizeOptions) -> Result<String> {
        let mut url = url::Url::parse(self.client.base_url())?;

        let host = url
            .host_str()
            .ok_or_else(|| Error::oauth(format!("base URL '{}' has no host", url)))?;
        let web_host = host.strip_prefix("api.").unwrap_or(host).to_string();
        url.set_host(Some(&web_host))?;
        url.set_path("/oauth/authorize");

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("response_type", "code");
            pairs.append_pair("client_id", client_id);
            if let Some(state) = &options.state {
                pairs.append_pair("state", state);
            }
            if let Some(redirect_uri) = &options.redirect_uri {
                pairs.append_pair("redirect_uri", redirect_uri);
            }
            if let Some(scope) = &options.scope {
                pairs.append_pair("scope", scope);
            }
        }

        Ok(url.into())
    }

    /// Exchange an authorization code for an access token
    pub async fn exchange_authorization_for_token(
        &self,
        exchange: &TokenExchange,
    ) -> Result<AccessToken> {
        debug!("Exchanging OAuth authorization code for client {}", exchange.client_id);

        let body = serde_json::to_value(TokenRequest {
            grant_type: "authorization_code",
            exchange,
        })?;

        let value = self
            .client
            .request_json_unauthenticated(Method::POST, "/oauth/access_token", &[], Some(&body))
            .await?;

        serde_json::from_value(value)
            .map_err(|e| Error::oauth(format!("unexpected token response: {e}")))
    }
}

impl Client {
    /// OAuth helpers
    pub fn oauth(&self) -> OAuth<'_> {
        OAuth::new(self)
    }
}
