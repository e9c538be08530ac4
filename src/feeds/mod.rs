//! Feed aggregation: fetch the configured feeds, normalize every item, keep
//! the newest forty.
//!
//! Feeds are fetched strictly one at a time, in table order. A feed that
//! fails to fetch or parse is logged and skipped; a single bad feed must
//! never abort the run. Items whose publish date cannot be parsed are dropped
//! entirely — no article record ever carries an invalid date.
//!
//! # Submodules
//!
//! - [`brands`]: ordered brand→pattern rules, first match wins
//! - [`extract`]: image/category extraction from parsed entries

pub mod brands;
pub mod extract;

use crate::models::Article;
use crate::store;
use crate::utils::format_display_date;
use chrono::{DateTime, Utc};
use feed_rs::model::{Entry, Feed};
use itertools::Itertools;
use std::error::Error;
use std::time::Duration;
use tracing::{error, info, instrument};

/// One configured feed: where to fetch and how to label it.
pub struct FeedSpec {
    pub url: &'static str,
    pub source: &'static str,
}

/// The sites the page aggregates, fetched in this order.
pub const FEEDS: &[FeedSpec] = &[
    FeedSpec {
        url: "https://www.hodinkee.com/articles/rss.xml",
        source: "Hodinkee",
    },
    FeedSpec {
        url: "https://www.fratellowatches.com/feed/",
        source: "Fratello",
    },
    FeedSpec {
        url: "https://monochrome-watches.com/feed/",
        source: "Monochrome",
    },
    FeedSpec {
        url: "https://watchesbysjx.com/feed",
        source: "SJX",
    },
    FeedSpec {
        url: "https://revolution.watch/feed/",
        source: "Revolution",
    },
    FeedSpec {
        url: "https://wornandwound.com/feed/",
        source: "Worn & Wound",
    },
    FeedSpec {
        url: "https://timeandtidewatches.com/feed/",
        source: "Time+Tide",
    },
    FeedSpec {
        url: "https://www.ablogtowatch.com/feed/",
        source: "aBlogtoWatch",
    },
];

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_ARTICLES: usize = 40;

/// Fetch all configured feeds and overwrite `output_path` with the newest
/// [`MAX_ARTICLES`] unique articles.
#[instrument(level = "info", skip_all, fields(output = %output_path))]
pub async fn run(output_path: &str) -> Result<(), Box<dyn Error>> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("watchdial/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let mut collected: Vec<(Article, DateTime<Utc>)> = Vec::new();
    for spec in FEEDS {
        info!(source = spec.source, url = spec.url, "Fetching feed");
        match fetch_feed(&client, spec.url).await {
            Ok(feed) => {
                let before = collected.len();
                collected.extend(
                    feed.entries
                        .iter()
                        .filter_map(|entry| normalize_entry(entry, spec.source)),
                );
                info!(
                    source = spec.source,
                    count = collected.len() - before,
                    "Normalized feed items"
                );
            }
            Err(e) => {
                error!(source = spec.source, error = %e, "Feed fetch failed; skipping");
            }
        }
    }

    let articles = finalize(collected);
    store::write_json_pretty(output_path, &articles).await?;
    info!(
        count = articles.len(),
        path = output_path,
        "Wrote news articles"
    );
    Ok(())
}

async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Feed, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(feed_rs::parser::parse(bytes.as_ref())?)
}

/// Normalize one feed entry into an article plus its sort timestamp.
///
/// Returns `None` for items with no parseable publish date.
fn normalize_entry(entry: &Entry, source: &str) -> Option<(Article, DateTime<Utc>)> {
    let published = entry.published.or(entry.updated)?;
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_default();
    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_default();
    let image = extract::extract_image(entry, &link);
    let tags = extract::category_texts(entry);
    let article = Article {
        brand: brands::detect_brand(&title, &tags),
        category: extract::extract_category(entry),
        date: format_display_date(&published),
        source: source.to_string(),
        image,
        title,
        link,
    };
    Some((article, published))
}

/// Deduplicate by link (first occurrence wins), sort newest first, truncate
/// to [`MAX_ARTICLES`], and strip the sort key.
fn finalize(collected: Vec<(Article, DateTime<Utc>)>) -> Vec<Article> {
    let mut unique: Vec<(Article, DateTime<Utc>)> = collected
        .into_iter()
        .unique_by(|(article, _)| article.link.clone())
        .collect();
    unique.sort_by(|a, b| b.1.cmp(&a.1));
    unique.truncate(MAX_ARTICLES);
    unique.into_iter().map(|(article, _)| article).collect()
}
