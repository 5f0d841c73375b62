//! Inkmap main entry point
//!
//! Command-line interface for the Inkmap site crawler: crawl from a seed
//! URL and print the resulting sitemap XML on stdout.

use clap::Parser;
use inkmap::crawler::{crawl, HttpFetcher};
use inkmap::output::render_sitemap;
use tracing_subscriber::EnvFilter;

/// Inkmap: a bounded-depth site crawler
///
/// Crawls a website depth-first from the seed URL, keeps links that stay
/// within the seed's site, and emits a sitemaps.org 0.9 sitemap.
#[derive(Parser, Debug)]
#[command(name = "inkmap")]
#[command(version)]
#[command(about = "Crawl a site and emit a sitemap", long_about = None)]
struct Cli {
    /// The site to crawl
    #[arg(long, default_value = "https://www.example.com")]
    url: String,

    /// Max page depth to crawl (0 for unlimited)
    #[arg(long, default_value_t = 0)]
    depth: u32,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let fetcher = HttpFetcher::new()?;

    tracing::info!("Starting crawl at {} (max depth: {})", cli.url, cli.depth);
    let links = match crawl(&fetcher, &cli.url, cli.depth).await {
        Ok(links) => {
            tracing::info!("Crawl discovered {} links", links.len());
            links
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let sitemap = render_sitemap(&links)?;
    println!("{sitemap}");

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the sitemap document.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("inkmap=info,warn"),
            1 => EnvFilter::new("inkmap=debug,info"),
            2 => EnvFilter::new("inkmap=trace,debug"),
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
