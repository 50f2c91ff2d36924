// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # DNSimple API client
//!
//! A Rust-native client for the DNSimple domain registrar REST API.
//!
//! ## Features
//!
//! - **Typed Services**: Domains, zones, records, certificates, registrar, contacts and more
//! - **Pagination**: Lazy streams and eager collection over any list endpoint
//! - **Typed Errors**: Every non-success status maps to a distinct error
//! - **Pluggable Transport**: reqwest by default, any [`http::Transport`] for tests
//! - **OAuth**: Authorization URL and code-for-token exchange
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dnsimple::pagination::{ListOperationExt, ListOptions};
//! use dnsimple::{Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("dnsimpletest_a_xxxxxxxx");
//!
//!     let whoami = client.identity().whoami().await?;
//!     println!("{:?}", whoami.data.account);
//!
//!     let domains = client
//!         .domains()
//!         .list_domains(1010)
//!         .collect_all(ListOptions::new().sort("expiration:asc"))
//!         .await?;
//!     for domain in domains {
//!         println!("{} expires {:?}", domain.name, domain.expires_at);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  services: identity, domains, zones, registrar, ...        │
//! └──────────────┬────────────────────────────┬────────────────┘
//!                │ single calls               │ list calls
//!                │                   ┌────────┴────────┐
//!                │                   │   Pagination    │
//!                │                   │ iterate/collect │
//!                │                   └────────┬────────┘
//! ┌──────────────┴────────────────────────────┴────────────────┐
//! │  Client (dispatcher): URL, headers, status → Error         │
//! └──────────────────────────────┬─────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴─────────────────────────────┐
//! │  Transport (reqwest or custom)                             │
//! └────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Bearer credentials and OAuth
pub mod auth;

/// Request dispatcher, transport and rate limiting
pub mod http;

/// Page traversal over list endpoints
pub mod pagination;

/// Resource services
pub mod services;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{Client, Response};
pub use pagination::{ListOperation, ListOperationExt, ListOptions, ListResponse, Pagination};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
