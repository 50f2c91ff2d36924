//! TLDs

use super::{segment, ListEndpoint};
use crate::error::Result;
use crate::http::{Client, Response};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A top-level domain DNSimple can register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tld {
    pub tld: String,
    pub tld_type: u32,
    #[serde(default)]
    pub whois_privacy: bool,
    #[serde(default)]
    pub auto_renew_only: bool,
    #[serde(default)]
    pub idn: bool,
    pub minimum_registration: u32,
    #[serde(default)]
    pub registration_enabled: bool,
    #[serde(default)]
    pub renewal_enabled: bool,
    #[serde(default)]
    pub transfer_enabled: bool,
    #[serde(default)]
    pub dnssec_interface_type: Option<String>,
}

/// TLDs service
#[derive(Debug, Clone, Copy)]
pub struct Tlds<'a> {
    client: &'a Client,
}

impl<'a> Tlds<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All supported TLDs
    pub fn list_tlds(&self) -> ListEndpoint<'a, Tld> {
        ListEndpoint::new(self.client, "/tlds".to_string())
    }

    /// Details of one TLD, e.g. `com`
    pub async fn get_tld(&self, tld: impl Display) -> Result<Response<Tld>> {
        let path = format!("/tlds/{}", segment(tld));
        self.client.get(&path).await
    }
}
