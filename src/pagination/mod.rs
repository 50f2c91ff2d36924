//! Pagination module
//!
//! Traverses DNSimple list endpoints page by page.
//!
//! # Overview
//!
//! Every list endpoint answers with a `data` array and a `pagination`
//! object. A [`ListOperation`] fetches one page for a given
//! [`ListOptions`]; [`iterate_all`] turns it into a lazy item stream and
//! [`collect_all`] drains that stream into a `Vec`.
//!
//! ```no_run
//! use dnsimple::pagination::{ListOperationExt, ListOptions};
//! use futures::TryStreamExt;
//!
//! # async fn run(client: dnsimple::Client) -> dnsimple::Result<()> {
//! let domains = client.domains().list_domains("1010");
//! let mut stream = domains.iterate_all(ListOptions::new().sort("name:asc"));
//! while let Some(domain) = stream.try_next().await? {
//!     println!("{}", domain.name);
//! }
//! # Ok(())
//! # }
//! ```

mod traversal;
mod types;

pub use traversal::{collect_all, iterate_all, pages, ItemStream, ListOperationExt, PageStream};
pub use types::{list_fn, ListFn, ListOperation, ListOptions, ListResponse, Pagination, FIRST_PAGE};
