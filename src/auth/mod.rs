//! Authentication module
//!
//! Supports: Bearer tokens and the OAuth authorization code flow
//!
//! Every API request carries `Authorization: Bearer <token>` when the
//! client has a token. The OAuth helpers obtain such a token on behalf of
//! a user.

mod oauth;
mod types;

pub use oauth::OAuth;
pub use types::{AccessToken, AuthConfig, AuthorizeOptions, TokenExchange};
