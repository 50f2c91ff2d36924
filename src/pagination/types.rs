//! Pagination types and traits
//!
//! Defines the page request/response shapes and the capability every
//! paginated endpoint exposes.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::future::Future;

/// Page numbers are 1-based
pub const FIRST_PAGE: u64 = 1;

/// Pagination metadata returned alongside every list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Page this response belongs to
    #[serde(default)]
    pub current_page: u64,
    /// Maximum items per page
    #[serde(default)]
    pub per_page: u64,
    /// Items across all pages
    #[serde(default)]
    pub total_entries: u64,
    /// Number of pages
    #[serde(default)]
    pub total_pages: u64,
}

impl Pagination {
    /// Whether a page after `current_page` exists
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One decoded page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items in server order
    pub data: Vec<T>,
    /// Metadata used to decide whether to continue
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

fn null_as_default<'de, D>(deserializer: D) -> std::result::Result<Pagination, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Pagination>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> ListResponse<T> {
    /// Build a page by hand (fixtures, custom operations)
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }
}

/// Options bag for a list call: filters, sorting and the page number.
///
/// Options are kept in insertion order and the page is always emitted
/// last. Setting a key twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    page: Option<u64>,
    params: Vec<(String, String)>,
}

impl ListOptions {
    /// Create an empty options bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary query option.
    ///
    /// The `page` key is routed to the page field rather than stored as
    /// a generic option; a value that is not a number clears it.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        if key == "page" {
            self.page = value.trim().parse().ok();
            return self;
        }

        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    /// Sort expression, e.g. `name:asc` or `expiration:desc,id:asc`
    #[must_use]
    pub fn sort(self, sort: impl Into<String>) -> Self {
        self.param("sort", sort)
    }

    /// Items per page
    #[must_use]
    pub fn per_page(self, per_page: u64) -> Self {
        self.param("per_page", per_page.to_string())
    }

    /// Filter option; filters travel as top-level query parameters
    #[must_use]
    pub fn filter(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.param(key, value)
    }

    /// Page to request
    #[must_use]
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Copy of these options targeting `page`; `self` is left untouched
    pub fn for_page(&self, page: u64) -> Self {
        self.clone().page(page)
    }

    /// Page currently set, if any
    pub fn current_page(&self) -> Option<u64> {
        self.page
    }

    /// Value of a non-page option
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Non-page options in insertion order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Check whether no option at all is set
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.params.is_empty()
    }

    /// Query pairs to send, page last
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = self.params.clone();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        query
    }
}

/// A list endpoint that can fetch any single page.
///
/// Arguments other than the options bag (account, zone, ...) are bound
/// into the implementing value.
#[async_trait]
pub trait ListOperation: Send + Sync {
    /// Record type of the endpoint
    type Item: Send;

    /// Fetch the page selected by `options`
    async fn fetch_page(&self, options: ListOptions) -> Result<ListResponse<Self::Item>>;
}

#[async_trait]
impl<'a, O> ListOperation for &'a O
where
    O: ListOperation + ?Sized,
{
    type Item = O::Item;

    async fn fetch_page(&self, options: ListOptions) -> Result<ListResponse<Self::Item>> {
        (**self).fetch_page(options).await
    }
}

/// [`ListOperation`] backed by a closure
pub struct ListFn<F> {
    f: F,
}

/// Adapt an async closure taking the options bag into a [`ListOperation`]
pub fn list_fn<F>(f: F) -> ListFn<F> {
    ListFn { f }
}

#[async_trait]
impl<F, Fut, T> ListOperation for ListFn<F>
where
    F: Fn(ListOptions) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ListResponse<T>>> + Send,
    T: Send,
{
    type Item = T;

    async fn fetch_page(&self, options: ListOptions) -> Result<ListResponse<T>> {
        (self.f)(options).await
    }
}
