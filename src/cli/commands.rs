//! CLI commands and argument parsing

use crate::error::{Error, Result};
use crate::pagination::ListOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the DNSimple API
#[derive(Parser, Debug)]
#[command(name = "dnsimple")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); defaults to DNSIMPLE_* environment variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token, overrides the configuration
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Use the sandbox environment
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the account and user behind the token
    Whoami,

    /// List accessible accounts
    Accounts,

    /// List domains in an account
    Domains {
        /// Account id
        account: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List zones in an account
    Zones {
        /// Account id
        account: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List records of a zone
    Records {
        /// Account id
        account: String,

        /// Zone name
        zone: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// List supported TLDs
    Tlds {
        #[command(flatten)]
        list: ListArgs,
    },
}

/// Options shared by every list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Sort expression, e.g. name:asc
    #[arg(long)]
    pub sort: Option<String>,

    /// Filter as key=value; repeatable
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Items per page
    #[arg(long)]
    pub per_page: Option<u64>,

    /// Page to fetch
    #[arg(long, conflicts_with = "all")]
    pub page: Option<u64>,

    /// Fetch every page and print all items
    #[arg(long)]
    pub all: bool,
}

impl ListArgs {
    /// Build the options bag; the page is left to the caller
    pub fn to_options(&self) -> Result<ListOptions> {
        let mut options = ListOptions::new();

        if let Some(sort) = &self.sort {
            options = options.sort(sort.as_str());
        }
        if let Some(per_page) = self.per_page {
            options = options.per_page(per_page);
        }
        for filter in &self.filters {
            let (key, value) = filter.split_once('=').ok_or_else(|| {
                Error::invalid_value("filter", format!("'{filter}' is not KEY=VALUE"))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::invalid_value("filter", format!("'{filter}' has no key")));
            }
            options = options.filter(key, value.trim());
        }

        Ok(options)
    }
}
