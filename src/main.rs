use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pubmed_sift::query::parse_input_date;
use pubmed_sift::{export, search_and_extract, EntrezClient, EntrezConfig, SearchCriteria};
use tracing_subscriber::EnvFilter;

/// Search PubMed and export company-affiliated author metadata to CSV
#[derive(Parser, Debug)]
#[command(name = "pubmed-sift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search PubMed articles and export affiliation data to CSV", long_about = None)]
struct Cli {
    /// Comma-separated list of author names
    #[arg(long, value_delimiter = ',')]
    authors: Vec<String>,

    /// Comma-separated list of title/abstract topics
    #[arg(long, value_delimiter = ',')]
    topics: Vec<String>,

    /// Start of the creation-date range (YYYY-MM-DD)
    #[arg(long)]
    start_date: String,

    /// End of the creation-date range (YYYY-MM-DD)
    #[arg(long)]
    end_date: String,

    /// Maximum number of articles to fetch
    #[arg(long, default_value_t = 50)]
    max_results: usize,

    /// Output CSV file
    #[arg(long, short, default_value = "pubmed_results.csv")]
    output: PathBuf,

    /// Enable verbose logging (-v for info, -vv for debug)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env first so RUST_LOG set there is visible to the filter
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let criteria = SearchCriteria::new(
        parse_input_date(&cli.start_date)?,
        parse_input_date(&cli.end_date)?,
    )
    .authors(clean_list(cli.authors))
    .topics(clean_list(cli.topics))
    .max_results(cli.max_results);

    let client = EntrezClient::new(EntrezConfig::from_env())
        .context("Failed to construct Entrez client")?;

    let rows = search_and_extract(&client, &criteria).await?;

    export::write_csv_file(&cli.output, &rows)?;
    println!("Wrote {} rows to {}", rows.len(), cli.output.display());

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}
