//! Dictionary image enrichment via the Unsplash search API.
//!
//! For every glossary entry with no `image`, one search request is issued
//! (query `"<term> watch"`, a single landscape result) and the small-size URL
//! of the first hit is stored. An empty result set, a non-success status, or
//! a request error all store the shared fallback URL instead — the field is
//! never left empty after an attempt, which is what makes the file a cache:
//! re-runs skip every entry that already has an image.
//!
//! A missing access key skips the whole step without error. Requests are
//! spaced by [`REQUEST_INTERVAL`] to stay under the API's rate ceiling.

use crate::models::{DictionaryEntry, FALLBACK_IMAGE};
use crate::rate_limit::IntervalLimiter;
use crate::store;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tracing::{info, instrument, warn};

const SEARCH_ENDPOINT: &str = "https://api.unsplash.com/search/photos";
/// Spacing between search calls; demo access keys allow 50 requests/hour.
const REQUEST_INTERVAL: Duration = Duration::from_millis(1500);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    urls: ResultUrls,
}

#[derive(Debug, Deserialize)]
struct ResultUrls {
    small: String,
}

/// Thin client for the photo search endpoint.
pub struct ImageSearch {
    http: reqwest::Client,
    access_key: String,
}

impl ImageSearch {
    pub fn new(access_key: String) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("watchdial/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, access_key })
    }

    /// Search for one landscape photo of `term` and return its small-size
    /// URL. A non-success status or an empty result set yields `Ok(None)`.
    pub async fn search_small(&self, term: &str) -> Result<Option<String>, Box<dyn Error>> {
        let query = format!("{term} watch");
        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("query", query.as_str()),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .header(AUTHORIZATION, format!("Client-ID {}", self.access_key))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(term, status = %response.status(), "Image search returned non-success status");
            return Ok(None);
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.results.into_iter().next().map(|r| r.urls.small))
    }
}

/// Fill in missing images for every entry in the dictionary file, then
/// rewrite it in place.
///
/// `access_key` absent means skip entirely — a documented no-op, not an
/// error.
#[instrument(level = "info", skip_all, fields(dictionary = %dictionary_path))]
pub async fn run(
    dictionary_path: &str,
    access_key: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let Some(access_key) = access_key.filter(|k| !k.is_empty()) else {
        info!("No access key configured; skipping image enrichment");
        return Ok(());
    };

    let mut entries = store::load_dictionary(dictionary_path).await?;
    let search = ImageSearch::new(access_key)?;
    let mut limiter = IntervalLimiter::new(REQUEST_INTERVAL);
    let mut fetched = 0usize;
    let mut fell_back = 0usize;
    let mut skipped = 0usize;

    for entry in entries.iter_mut() {
        if entry.image.is_some() {
            skipped += 1;
            continue;
        }

        limiter.acquire().await;
        info!(term = %entry.term, "Fetching image");
        let image = match search.search_small(&entry.term).await {
            Ok(Some(url)) => {
                fetched += 1;
                url
            }
            Ok(None) => {
                warn!(term = %entry.term, "No image result; using fallback");
                fell_back += 1;
                FALLBACK_IMAGE.to_string()
            }
            Err(e) => {
                warn!(term = %entry.term, error = %e, "Image search failed; using fallback");
                fell_back += 1;
                FALLBACK_IMAGE.to_string()
            }
        };
        entry.image = Some(image);
    }

    store::write_json_pretty(dictionary_path, &entries).await?;
    info!(fetched, fell_back, skipped, "Image enrichment complete");
    Ok(())
}
