//! Zones and zone records

use super::{segment, ListEndpoint};
use crate::error::Result;
use crate::http::{Client, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A DNS zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    #[serde(default)]
    pub reserved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A record within a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: u64,
    pub zone_id: String,
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Record name relative to the zone; empty for the apex
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub system_record: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `create_zone_record`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRecordAttributes {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

impl ZoneRecordAttributes {
    /// Record with the server's default TTL, priority and regions
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl: None,
            priority: None,
            regions: None,
        }
    }

    #[must_use]
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Body of `update_zone_record`; only set fields are changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ZoneRecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

/// Zones service
#[derive(Debug, Clone, Copy)]
pub struct Zones<'a> {
    client: &'a Client,
}

impl<'a> Zones<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Zones in `account`; supports `sort` and the `name_like` filter
    pub fn list_zones(&self, account: impl Display) -> ListEndpoint<'a, Zone> {
        ListEndpoint::new(self.client, format!("/{}/zones", segment(account)))
    }

    /// Zone by name
    pub async fn get_zone(&self, account: impl Display, zone: impl Display) -> Result<Response<Zone>> {
        let path = format!("/{}/zones/{}", segment(account), segment(zone));
        self.client.get(&path).await
    }

    /// Records in a zone; supports `sort` and the `name`, `name_like` and
    /// `type` filters
    pub fn list_zone_records(
        &self,
        account: impl Display,
        zone: impl Display,
    ) -> ListEndpoint<'a, ZoneRecord> {
        ListEndpoint::new(
            self.client,
            format!("/{}/zones/{}/records", segment(account), segment(zone)),
        )
    }

    /// Record by id
    pub async fn get_zone_record(
        &self,
        account: impl Display,
        zone: impl Display,
        record: u64,
    ) -> Result<Response<ZoneRecord>> {
        self.client.get(&record_path(account, zone, record)).await
    }

    /// Add a record
    pub async fn create_zone_record(
        &self,
        account: impl Display,
        zone: impl Display,
        attributes: &ZoneRecordAttributes,
    ) -> Result<Response<ZoneRecord>> {
        let path = format!("/{}/zones/{}/records", segment(account), segment(zone));
        self.client.post(&path, attributes).await
    }

    /// Change an existing record
    pub async fn update_zone_record(
        &self,
        account: impl Display,
        zone: impl Display,
        record: u64,
        update: &ZoneRecordUpdate,
    ) -> Result<Response<ZoneRecord>> {
        self.client
            .patch(&record_path(account, zone, record), update)
            .await
    }

    /// Remove a record
    pub async fn delete_zone_record(
        &self,
        account: impl Display,
        zone: impl Display,
        record: u64,
    ) -> Result<()> {
        self.client.delete(&record_path(account, zone, record)).await
    }
}

fn record_path(account: impl Display, zone: impl Display, record: u64) -> String {
    format!(
        "/{}/zones/{}/records/{}",
        segment(account),
        segment(zone),
        record
    )
}
