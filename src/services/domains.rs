//! Domains

use super::{segment, ListEndpoint};
use crate::error::Result;
use crate::http::{Client, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A domain in an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub account_id: u64,
    #[serde(default)]
    pub registrant_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub unicode_name: Option<String>,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_domain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAttributes {
    pub name: String,
}

impl DomainAttributes {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Domains service
#[derive(Debug, Clone, Copy)]
pub struct Domains<'a> {
    client: &'a Client,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Domains in `account`.
    ///
    /// Supports `sort` (`id`, `name`, `expiration`) and the `name_like` and
    /// `registrant_id` filters.
    pub fn list_domains(&self, account: impl Display) -> ListEndpoint<'a, Domain> {
        ListEndpoint::new(self.client, format!("/{}/domains", segment(account)))
    }

    /// Domain by name or id
    pub async fn get_domain(
        &self,
        account: impl Display,
        domain: impl Display,
    ) -> Result<Response<Domain>> {
        let path = format!("/{}/domains/{}", segment(account), segment(domain));
        self.client.get(&path).await
    }

    /// Add a domain to the account without registering it
    pub async fn create_domain(
        &self,
        account: impl Display,
        attributes: &DomainAttributes,
    ) -> Result<Response<Domain>> {
        let path = format!("/{}/domains", segment(account));
        self.client.post(&path, attributes).await
    }

    /// Remove a domain from the account
    pub async fn delete_domain(&self, account: impl Display, domain: impl Display) -> Result<()> {
        let path = format!("/{}/domains/{}", segment(account), segment(domain));
        self.client.delete(&path).await
    }
}
