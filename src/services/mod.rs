//! Resource services
//!
//! Each service is a borrowed view over a [`Client`] grouping the calls of
//! one API area. Single-resource calls return [`Response<T>`]; list calls
//! return a [`ListEndpoint`] which can fetch one page or traverse them all.
//!
//! [`Response<T>`]: crate::http::Response

mod accounts;
mod billing;
mod certificates;
mod contacts;
mod domains;
mod identity;
mod registrar;
mod tlds;
mod webhooks;
mod zones;

pub use accounts::{Account, Accounts};
pub use billing::{Billing, Charge, ChargeItem};
pub use certificates::{Certificate, Certificates};
pub use contacts::{Contact, ContactAttributes, Contacts};
pub use domains::{Domain, DomainAttributes, Domains};
pub use identity::{Identity, User, WhoamiData};
pub use registrar::{DomainCheck, DomainRegistration, Registrar, RegistrationAttributes};
pub use tlds::{Tld, Tlds};
pub use webhooks::{Webhook, WebhookAttributes, Webhooks};
pub use zones::{Zone, ZoneRecord, ZoneRecordAttributes, ZoneRecordUpdate, Zones};

use crate::error::Result;
use crate::http::Client;
use crate::pagination::{ListOperation, ListOptions, ListResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// A paginated list endpoint with its path arguments bound
pub struct ListEndpoint<'a, T> {
    client: &'a Client,
    path: String,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T> ListEndpoint<'a, T> {
    pub(crate) fn new(client: &'a Client, path: String) -> Self {
        Self {
            client,
            path,
            _item: PhantomData,
        }
    }

    /// API path, without the version prefix
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T> fmt::Debug for ListEndpoint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEndpoint")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<'a, T> ListOperation for ListEndpoint<'a, T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;

    async fn fetch_page(&self, options: ListOptions) -> Result<ListResponse<T>> {
        self.client.list(&self.path, &options).await
    }
}

/// Percent-encode one path segment
pub(crate) fn segment(value: impl fmt::Display) -> String {
    url::form_urlencoded::byte_serialize(value.to_string().as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl Client {
    /// Current user and account
    pub fn identity(&self) -> Identity<'_> {
        Identity::new(self)
    }

    /// Accounts the credentials can access
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    /// Domains in an account
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self)
    }

    /// DNS zones and records
    pub fn zones(&self) -> Zones<'_> {
        Zones::new(self)
    }

    /// SSL certificates
    pub fn certificates(&self) -> Certificates<'_> {
        Certificates::new(self)
    }

    /// Domain availability and registration
    pub fn registrar(&self) -> Registrar<'_> {
        Registrar::new(self)
    }

    /// Registrant contacts
    pub fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// Webhooks
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// Supported TLDs
    pub fn tlds(&self) -> Tlds<'_> {
        Tlds::new(self)
    }

    /// Billing charges
    pub fn billing(&self) -> Billing<'_> {
        Billing::new(self)
    }
}

#[cfg(test)]
mod tests;
