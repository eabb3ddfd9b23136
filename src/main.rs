//! Pagecrawl main entry point
//!
//! This is the command-line interface for the Pagecrawl page fetcher.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use pagecrawl::config::{load_config, Config};
use pagecrawl::output::{render, OutputFormat};
use pagecrawl::{CrawlError, Crawler, RequestOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Pagecrawl: fetch a web page and extract its metadata
///
/// Pagecrawl requests a single URL, follows its redirects, and prints the
/// page title, meta description, OpenGraph properties and outbound links.
#[derive(Parser, Debug)]
#[command(name = "pagecrawl")]
#[command(version)]
#[command(about = "Fetch a web page and extract its metadata", long_about = None)]
struct Cli {
    /// Absolute http(s) URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra request header, e.g. -H "Accept-Language: en" (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    headers: Vec<String>,

    /// Include the raw response body in the output
    #[arg(long)]
    body: bool,

    /// Leave outbound links out of the output
    #[arg(long)]
    no_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::Text,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            exit_code_for(&e)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout only carries crawl output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagecrawl=info,warn"),
            1 => EnvFilter::new("pagecrawl=debug,info"),
            2 => EnvFilter::new("pagecrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads configuration, crawls the URL and prints the result
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.body {
        config.output.include_body = true;
    }
    if cli.no_links {
        config.output.include_links = false;
    }

    let options = request_options(&cli.headers)?;

    let crawler = Crawler::new(config)?;
    let output = crawler.crawl_with(&cli.url, &options).await?;

    tracing::info!(
        "Crawled {} (HTTP {}) in {}ms",
        output.url.resolved,
        output.status,
        output.time
    );

    println!("{}", render(&output, cli.format.into())?);

    Ok(())
}

/// Parses repeated `Name: value` header arguments
fn request_options(headers: &[String]) -> anyhow::Result<RequestOptions> {
    let mut options = RequestOptions::new();
    for header in headers {
        let Some((name, value)) = header.split_once(':') else {
            bail!("Header '{}' must have the form 'Name: value'", header);
        };
        options = options.with_header(name.trim(), value.trim())?;
    }
    Ok(options)
}

/// Maps crawl failures onto process exit codes
///
/// | Error | Code |
/// |-------|------|
/// | Invalid URL | 2 |
/// | HTTP error status | 3 |
/// | Network failure | 4 |
/// | Anything else | 1 |
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<CrawlError>() {
        Some(CrawlError::InvalidUrl(_)) => ExitCode::from(2),
        Some(CrawlError::Http { .. }) => ExitCode::from(3),
        Some(CrawlError::Network { .. }) => ExitCode::from(4),
        _ => ExitCode::FAILURE,
    }
}
