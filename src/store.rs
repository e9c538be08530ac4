//! Reading and writing the JSON interchange files.
//!
//! Both `news.json` and `dictionary.json` are plain UTF-8 JSON arrays. A
//! missing file is not an error anywhere in the system — the aggregator
//! overwrites unconditionally and the page builder treats absence as an empty
//! collection — so the loaders map `NotFound` to an empty `Vec`. Anything
//! else (unreadable file, malformed JSON) is an environment-level failure and
//! propagates.

use crate::models::{Article, DictionaryEntry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Load the article list, treating a missing file as empty.
pub async fn load_articles(path: &str) -> Result<Vec<Article>, Box<dyn Error>> {
    load_or_empty(path).await
}

/// Load the dictionary, treating a missing file as empty.
pub async fn load_dictionary(path: &str) -> Result<Vec<DictionaryEntry>, Box<dyn Error>> {
    load_or_empty(path).await
}

async fn load_or_empty<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, Box<dyn Error>> {
    match fs::read_to_string(path).await {
        Ok(text) => {
            let records: Vec<T> = serde_json::from_str(&text)?;
            debug!(path, count = records.len(), "Loaded JSON records");
            Ok(records)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path, "Input file not found; treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Pretty-print `records` to `path`, creating the parent directory if needed
/// and overwriting any previous contents.
pub async fn write_json_pretty<T: Serialize>(
    path: &str,
    records: &[T],
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;
    info!(path, "Wrote JSON file");
    Ok(())
}
