//! Webhooks

use super::{segment, ListEndpoint};
use crate::error::Result;
use crate::http::{Client, Response};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A webhook endpoint registered on an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: u64,
    pub url: String,
}

/// Body of `create_webhook`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookAttributes {
    pub url: String,
}

impl WebhookAttributes {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Webhooks service
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a Client,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Webhooks of `account`
    pub fn list_webhooks(&self, account: impl Display) -> ListEndpoint<'a, Webhook> {
        ListEndpoint::new(self.client, format!("/{}/webhooks", segment(account)))
    }

    /// Register a webhook
    pub async fn create_webhook(
        &self,
        account: impl Display,
        attributes: &WebhookAttributes,
    ) -> Result<Response<Webhook>> {
        let path = format!("/{}/webhooks", segment(account));
        self.client.post(&path, attributes).await
    }

    /// Remove a webhook
    pub async fn delete_webhook(&self, account: impl Display, webhook: u64) -> Result<()> {
        let path = format!("/{}/webhooks/{}", segment(account), webhook);
        self.client.delete(&path).await
    }
}
