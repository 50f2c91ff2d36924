//! Identity: who the credentials belong to

use super::accounts::Account;
use crate::error::Result;
use crate::http::{Client, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A DNSimple user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of `whoami`; account tokens carry an account, user tokens a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoamiData {
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Identity service
#[derive(Debug, Clone, Copy)]
pub struct Identity<'a> {
    client: &'a Client,
}

impl<'a> Identity<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Describe the account and user behind the current credentials
    pub async fn whoami(&self) -> Result<Response<WhoamiData>> {
        self.client.get("/whoami").await
    }
}
