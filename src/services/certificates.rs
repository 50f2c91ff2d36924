//! SSL certificates

use super::{segment, ListEndpoint};
use crate::error::Result;
use crate::http::{Client, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A certificate issued for a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u64,
    pub domain_id: u64,
    #[serde(default)]
    pub contact_id: Option<u64>,
    pub common_name: String,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub years: u32,
    pub state: String,
    #[serde(default)]
    pub authority_identifier: Option<String>,
    #[serde(default)]
    pub auto_renew: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Certificates service
#[derive(Debug, Clone, Copy)]
pub struct Certificates<'a> {
    client: &'a Client,
}

impl<'a> Certificates<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Certificates of a domain
    pub fn list_certificates(
        &self,
        account: impl Display,
        domain: impl Display,
    ) -> ListEndpoint<'a, Certificate> {
        ListEndpoint::new(
            self.client,
            format!("/{}/domains/{}/certificates", segment(account), segment(domain)),
        )
    }

    /// Certificate by id
    pub async fn get_certificate(
        &self,
        account: impl Display,
        domain: impl Display,
        certificate: u64,
    ) -> Result<Response<Certificate>> {
        let path = format!(
            "/{}/domains/{}/certificates/{}",
            segment(account),
            segment(domain),
            certificate
        );
        self.client.get(&path).await
    }
}
