//! Accounts

use crate::error::Result;
use crate::http::{Client, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A DNSimple account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub plan_identifier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Accounts service
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    client: &'a Client,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Accounts the current user can access. This list is not paginated.
    pub async fn list_accounts(&self) -> Result<Response<Vec<Account>>> {
        self.client.get("/accounts").await
    }
}
