//! Data models for the two JSON interchange files.
//!
//! This module defines the record types shared by the three batch components:
//! - [`Article`]: a normalized news item, persisted in `data/news.json`
//! - [`DictionaryEntry`]: a glossary term, persisted in `data/dictionary.json`
//!
//! `news.json` is rebuilt from scratch on every aggregator run. The dictionary
//! is maintained by hand; only its `image` field is ever written by this
//! program (lazily, by the enricher), so the struct models exactly the four
//! fields the file carries and nothing else.

use serde::{Deserialize, Serialize};

/// Generic pocket-watch photo used wherever a record has no image of its own.
///
/// Articles get it at render time only; dictionary entries get it persisted by
/// the enricher after a fetch attempt comes up empty, which is what makes
/// re-runs skip the entry.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1614164185128-e4ec99c436d7?w=400&q=80";

/// A normalized news article aggregated from one of the configured feeds.
///
/// The sort timestamp used to order articles is deliberately *not* part of
/// this struct: the aggregator carries it alongside while sorting and strips
/// it before persisting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Article {
    /// Headline text, as published by the feed.
    pub title: String,
    /// Canonical article URL; the dedup key across feeds.
    pub link: String,
    /// Human-readable source label from the feed table (e.g. "Hodinkee").
    pub source: String,
    /// Display-formatted publish date, "Mon D, YYYY".
    pub date: String,
    /// Lead image URL, when one could be extracted from the feed item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// First feed-provided tag, or the default category.
    pub category: String,
    /// Detected brand slug ("rolex", "omega", ...) or "other".
    pub brand: String,
}

/// A glossary term for the dictionary section of the page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DictionaryEntry {
    /// The term itself (e.g. "Tourbillon").
    pub term: String,
    /// Single uppercase letter the term files under.
    pub letter: String,
    /// Definition text, shown collapsed until toggled.
    pub definition: String,
    /// Illustration URL; filled in lazily by the enricher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            title: "New Rolex Daytona".to_string(),
            link: "https://example.com/daytona".to_string(),
            source: "Hodinkee".to_string(),
            date: "May 6, 2025".to_string(),
            image: Some("https://example.com/daytona.jpg".to_string()),
            category: "Watch News".to_string(),
            brand: "rolex".to_string(),
        }
    }

    #[test]
    fn test_article_roundtrip() {
        let article = sample_article();
        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }

    #[test]
    fn test_article_without_image_omits_field() {
        let mut article = sample_article();
        article.image = None;
        let json = serde_json::to_string(&article).unwrap();
        assert!(!json.contains("\"image\""));
    }

    #[test]
    fn test_article_missing_image_defaults_to_none() {
        let json = r#"{
            "title": "Omega Speedmaster history",
            "link": "https://example.com/speedy",
            "source": "Fratello",
            "date": "Jan 2, 2025",
            "category": "Vintage",
            "brand": "omega"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.image, None);
        assert_eq!(article.brand, "omega");
    }

    #[test]
    fn test_dictionary_entry_roundtrip() {
        let entry = DictionaryEntry {
            term: "Bezel".to_string(),
            letter: "B".to_string(),
            definition: "The ring surrounding the crystal.".to_string(),
            image: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"image\""));
        let back: DictionaryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_dictionary_entry_preserves_image() {
        let json = r#"{
            "term": "Lume",
            "letter": "L",
            "definition": "Luminescent material on hands and markers.",
            "image": "https://images.example.com/lume.jpg"
        }"#;
        let entry: DictionaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(
            entry.image.as_deref(),
            Some("https://images.example.com/lume.jpg")
        );
    }
}
