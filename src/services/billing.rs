//! Billing

use super::{segment, ListEndpoint};
use crate::http::Client;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One line of a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeItem {
    pub description: String,
    /// Decimal amount as sent by the API
    pub amount: String,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub product_reference: Option<String>,
}

/// A charge on the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub invoiced_at: DateTime<Utc>,
    pub total_amount: String,
    pub balance_amount: String,
    pub reference: String,
    pub state: String,
    #[serde(default)]
    pub items: Vec<ChargeItem>,
}

/// Billing service
#[derive(Debug, Clone, Copy)]
pub struct Billing<'a> {
    client: &'a Client,
}

impl<'a> Billing<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Charges of `account`; supports the `start_date` and `end_date`
    /// filters (`YYYY-MM-DD`)
    pub fn list_charges(&self, account: impl Display) -> ListEndpoint<'a, Charge> {
        ListEndpoint::new(self.client, format!("/{}/billing/charges", segment(account)))
    }
}
