#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

//! Command-line driver for ad-hoc catalog queries.
//!
//! Resolves the resource by name, so this is the one surface where an
//! unknown resource name is reachable. Identifiers are positional,
//! shallowest first, matching the catalog's segment order.

use anyhow::Context;
use clap::Parser;
use congressgov_api::catalog;
use congressgov_api::query::{string_id, DateRange, Page, QueryRequest};
use congressgov_api::{Config, CongressClient};

#[derive(Debug, Parser)]
#[command(
    name = "congress-query",
    about = "Query the Congress.gov API by catalog resource name"
)]
struct Args {
    /// Catalog resource name (e.g. bills, members, summaries).
    resource: String,

    /// Hierarchical identifiers, shallowest first (e.g. 118 hr 1).
    ids: Vec<String>,

    /// Starting record.
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Maximum records to return (clamped to the resource's cap).
    #[arg(long, default_value_t = 20)]
    limit: u32,

    /// Start timestamp (YYYY-MM-DDTHH:MM:SSZ).
    #[arg(long)]
    from: Option<String>,

    /// End timestamp (YYYY-MM-DDTHH:MM:SSZ).
    #[arg(long)]
    to: Option<String>,

    /// Sort order, where the resource supports it (e.g. updateDate+asc).
    #[arg(long)]
    sort: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.level))
        .init();

    let resource = catalog::lookup(&args.resource).map_err(|err| {
        let names: Vec<_> = catalog::all().iter().map(|d| d.name).collect();
        anyhow::anyhow!("{err}; valid resources: {}", names.join(", "))
    })?;

    let mut path_values: Vec<Option<String>> =
        args.ids.into_iter().map(|id| string_id(Some(id))).collect();
    path_values.truncate(resource.segments.len());

    let request = QueryRequest {
        path_values,
        page: Page {
            offset: args.offset,
            limit: args.limit,
        },
        date_range: DateRange {
            from: args.from,
            to: args.to,
        },
        sort: args.sort,
        extra_params: Vec::new(),
    };

    let client = CongressClient::from_config(&config).context("failed to build HTTP client")?;
    match client.execute(resource, &request).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(envelope) => {
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            std::process::exit(1);
        }
    }
}
