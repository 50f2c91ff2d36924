//! Registrar: availability checks and registrations

use super::segment;
use crate::error::Result;
use crate::http::{Client, Response};
use crate::types::StringMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Availability of a domain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheck {
    pub domain: String,
    pub available: bool,
    #[serde(default)]
    pub premium: bool,
}

/// Body of `register_domain`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationAttributes {
    /// Contact that becomes the registrant
    pub registrant_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<bool>,
    /// TLD-specific attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_attributes: Option<StringMap>,
    /// Required when the name is premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_price: Option<String>,
}

/// A registration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRegistration {
    pub id: u64,
    pub domain_id: u64,
    pub registrant_id: u64,
    pub period: u32,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub whois_privacy: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registrar service
#[derive(Debug, Clone, Copy)]
pub struct Registrar<'a> {
    client: &'a Client,
}

impl<'a> Registrar<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Check whether `name` can be registered
    pub async fn check_domain(
        &self,
        account: impl Display,
        name: impl Display,
    ) -> Result<Response<DomainCheck>> {
        let path = format!(
            "/{}/registrar/domains/{}/check",
            segment(account),
            segment(name)
        );
        self.client.get(&path).await
    }

    /// Register `name` for the account
    pub async fn register_domain(
        &self,
        account: impl Display,
        name: impl Display,
        attributes: &RegistrationAttributes,
    ) -> Result<Response<DomainRegistration>> {
        let path = format!(
            "/{}/registrar/domains/{}/registrations",
            segment(account),
            segment(name)
        );
        self.client.post(&path, attributes).await
    }

    /// Name servers the domain is delegated to
    pub async fn get_domain_delegation(
        &self,
        account: impl Display,
        domain: impl Display,
    ) -> Result<Response<Vec<String>>> {
        self.client.get(&delegation_path(account, domain)).await
    }

    /// Replace the whole delegation with `name_servers`
    pub async fn change_domain_delegation(
        &self,
        account: impl Display,
        domain: impl Display,
        name_servers: &[String],
    ) -> Result<Response<Vec<String>>> {
        self.client
            .put(&delegation_path(account, domain), name_servers)
            .await
    }
}

fn delegation_path(account: impl Display, domain: impl Display) -> String {
    format!(
        "/{}/registrar/domains/{}/delegation",
        segment(account),
        segment(domain)
    )
}
