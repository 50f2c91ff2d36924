//! Contacts

use super::{segment, ListEndpoint};
use crate::error::Result;
use crate::http::{Client, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A registrant contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub account_id: u64,
    #[serde(default)]
    pub label: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub fax: Option<String>,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_contact`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

/// Contacts service
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    client: &'a Client,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Contacts in `account`
    pub fn list_contacts(&self, account: impl Display) -> ListEndpoint<'a, Contact> {
        ListEndpoint::new(self.client, format!("/{}/contacts", segment(account)))
    }

    /// Contact by id
    pub async fn get_contact(&self, account: impl Display, contact: u64) -> Result<Response<Contact>> {
        let path = format!("/{}/contacts/{}", segment(account), contact);
        self.client.get(&path).await
    }

    /// Create a contact
    pub async fn create_contact(
        &self,
        account: impl Display,
        attributes: &ContactAttributes,
    ) -> Result<Response<Contact>> {
        let path = format!("/{}/contacts", segment(account));
        self.client.post(&path, attributes).await
    }

    /// Delete a contact; fails while it is still a registrant
    pub async fn delete_contact(&self, account: impl Display, contact: u64) -> Result<()> {
        let path = format!("/{}/contacts/{}", segment(account), contact);
        self.client.delete(&path).await
    }
}
