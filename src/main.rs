use clap::Parser;
use owo_colors::{OwoColorize, Stream::Stderr};
use tracing_subscriber::EnvFilter;

use arxiv_dump::{
    crawler::{CrawlConfig, Crawler, RunSummary},
    fetcher::http::HttpFetcher,
    listing::SiteUrls,
};

use crate::cli::Cli;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = CrawlConfig {
        output_root: args.output_root(),
        urls: SiteUrls::new(&args.base_url)?,
    };

    // Scoped to this run rather than installed globally.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    let summary = tracing::subscriber::with_default(subscriber, || {
        Crawler::new(HttpFetcher::new(), config).run(args.code_areas().as_slice())
    })?;

    report(&summary);
    Ok(())
}

fn report(summary: &RunSummary) {
    eprintln!(
        "saved {}  skipped {}  failed {}",
        format!("✓ {}", summary.total_saved()).if_supports_color(Stderr, |t| t.green()),
        format!("↷ {}", summary.total_skipped()).if_supports_color(Stderr, |t| t.yellow()),
        format!("✗ {}", summary.total_failed()).if_supports_color(Stderr, |t| t.red()),
    );
}
