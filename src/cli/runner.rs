//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ListArgs};
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::http::Client;
use crate::pagination::{ListOperation, ListOperationExt, FIRST_PAGE};
use crate::types::Environment;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the client configuration from file or environment plus flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClientConfig::from_env()?,
        };

        if self.cli.sandbox {
            config.base_url = Environment::Sandbox.base_url().to_string();
        }
        if let Some(token) = &self.cli.token {
            config.access_token = Some(token.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Run the CLI command, printing to stdout
    pub async fn run(&self) -> Result<()> {
        let client = Client::with_config(self.client_config()?);
        let mut buffer = Vec::new();
        self.run_with(&client, &mut buffer).await?;
        std::io::stdout().write_all(&buffer)?;
        Ok(())
    }

    /// Run the CLI command against `client`, writing JSON to `out`
    pub async fn run_with<W: Write>(&self, client: &Client, out: &mut W) -> Result<()> {
        if self.cli.verbose {
            info!("Using API at {}", client.base_url());
        }

        match &self.cli.command {
            Commands::Whoami => {
                let response = client.identity().whoami().await?;
                write_json(out, &response.data)
            }
            Commands::Accounts => {
                let response = client.accounts().list_accounts().await?;
                write_json(out, &response.data)
            }
            Commands::Domains { account, list } => {
                print_list(&client.domains().list_domains(account), list, out).await
            }
            Commands::Zones { account, list } => {
                print_list(&client.zones().list_zones(account), list, out).await
            }
            Commands::Records {
                account,
                zone,
                list,
            } => print_list(&client.zones().list_zone_records(account, zone), list, out).await,
            Commands::Tlds { list } => print_list(&client.tlds().list_tlds(), list, out).await,
        }
    }
}

/// Print one page (`{data, pagination}`) or, with `--all`, every item
async fn print_list<O, W>(operation: &O, args: &ListArgs, out: &mut W) -> Result<()>
where
    O: ListOperation,
    O::Item: Serialize,
    W: Write,
{
    let options = args.to_options()?;

    if args.all {
        let items = operation.collect_all(options).await?;
        info!("Fetched {} items", items.len());
        write_json(out, &items)
    } else {
        let page = operation
            .fetch_page(options.for_page(args.page.unwrap_or(FIRST_PAGE)))
            .await?;
        write_json(out, &page)
    }
}

fn write_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn runner(args: &[&str]) -> Runner {
        Runner::new(Cli::try_parse_from(args).unwrap())
    }

    fn client_for(server: &MockServer) -> Client {
        Client::with_config(
            ClientConfig::builder()
                .base_url(server.uri())
                .access_token("t")
                .build(),
        )
    }

    fn tld(name: &str) -> Value {
        json!({"tld": name, "tld_type": 1, "minimum_registration": 1})
    }

    #[test]
    fn test_list_args_to_options() {
        let args = ListArgs {
            sort: Some("name:asc".to_string()),
            filters: vec!["name_like=ex".to_string(), "type = A".to_string()],
            per_page: Some(10),
            page: None,
            all: false,
        };
        let options = args.to_options().unwrap();
        assert_eq!(
            options.to_query(),
            vec![
                ("sort".to_string(), "name:asc".to_string()),
                ("per_page".to_string(), "10".to_string()),
                ("name_like".to_string(), "ex".to_string()),
                ("type".to_string(), "A".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_args_bad_filter() {
        let args = ListArgs {
            filters: vec!["novalue".to_string()],
            ..ListArgs::default()
        };
        assert!(args.to_options().is_err());

        let args = ListArgs {
            filters: vec!["=x".to_string()],
            ..ListArgs::default()
        };
        assert!(args.to_options().is_err());
    }

    #[test]
    fn test_page_conflicts_with_all() {
        assert!(Cli::try_parse_from(["dnsimple", "tlds", "--all", "--page", "2"]).is_err());
    }

    #[test]
    fn test_client_config_flags_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "access_token: from-file").unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli_runner = runner(&[
            "dnsimple",
            "--config",
            config_path.as_str(),
            "--token",
            "from-flag",
            "--sandbox",
            "whoami",
        ]);
        let config = cli_runner.client_config().unwrap();

        assert_eq!(config.access_token.as_deref(), Some("from-flag"));
        assert_eq!(config.base_url, crate::config::SANDBOX_BASE_URL);
    }

    #[tokio::test]
    async fn test_run_tlds_all() {
        let server = MockServer::start().await;

        for (page, names) in [(1u64, ["com", "net"]), (2, ["org", "io"])] {
            Mock::given(method("GET"))
                .and(path("/v2/tlds"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "data": names.iter().map(|n| tld(n)).collect::<Vec<_>>(),
                    "pagination": {"current_page": page, "per_page": 2, "total_entries": 4, "total_pages": 2}
                })))
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        let mut out = Vec::new();
        runner(&["dnsimple", "tlds", "--all"])
            .run_with(&client, &mut out)
            .await
            .unwrap();

        let printed: Value = serde_json::from_slice(&out).unwrap();
        let names: Vec<&str> = printed
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["tld"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["com", "net", "org", "io"]);
    }

    #[tokio::test]
    async fn test_run_single_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/tlds"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [tld("org")],
                "pagination": {"current_page": 2, "per_page": 1, "total_entries": 2, "total_pages": 2}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut out = Vec::new();
        runner(&["dnsimple", "tlds", "--page", "2"])
            .run_with(&client, &mut out)
            .await
            .unwrap();

        let printed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed["data"][0]["tld"], "org");
        assert_eq!(printed["pagination"]["current_page"], 2);
    }
}
