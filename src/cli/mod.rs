//! CLI module
//!
//! Command-line interface over the API client.
//!
//! # Commands
//!
//! - `whoami` - Show the identity behind the token
//! - `accounts` - List accessible accounts
//! - `domains` - List domains of an account
//! - `zones` - List zones of an account
//! - `records` - List records of a zone
//! - `tlds` - List supported TLDs

mod commands;
mod runner;

pub use commands::{Cli, Commands, ListArgs};
pub use runner::Runner;
