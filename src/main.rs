//! # watchdial
//!
//! Batch tooling for a static watch-enthusiast page. Three independent
//! components share two JSON files and are run in any order by an operator
//! or a scheduler:
//!
//! 1. **fetch-news** — pulls the configured RSS feeds, normalizes items
//!    (image, category, brand, display date), deduplicates by link, and
//!    overwrites `data/news.json` with the newest forty articles
//! 2. **fetch-images** — fills missing `image` fields in
//!    `data/dictionary.json` from an image-search API, one rate-limited
//!    request per uncached term
//! 3. **build** — substitutes rendered HTML fragments into the page template
//!    and writes the finished `index.html`
//!
//! ## Usage
//!
//! ```sh
//! watchdial fetch-news
//! UNSPLASH_ACCESS_KEY=... watchdial fetch-images
//! watchdial build
//! ```
//!
//! Recoverable failures (a dead feed, a failed image search, a missing data
//! file) degrade to a safe default and never stop a run; only
//! environment-level failures (missing template, unwritable output) abort
//! with a non-zero exit status.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod enrich;
mod feeds;
mod models;
mod outputs;
mod rate_limit;
mod store;
mod utils;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let result = match args.command {
        Command::FetchNews { output } => {
            info!("fetch-news starting");
            feeds::run(&output).await
        }
        Command::FetchImages {
            dictionary,
            access_key,
        } => {
            info!("fetch-images starting");
            enrich::run(&dictionary, access_key).await
        }
        Command::Build {
            template,
            news,
            dictionary,
            output,
        } => {
            info!("build starting");
            outputs::page::run(&template, &news, &dictionary, &output).await
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Run failed");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}
