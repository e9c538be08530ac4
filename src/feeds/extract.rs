//! Field extraction from parsed feed entries.
//!
//! The interesting part is image selection. Feed publishers are wildly
//! inconsistent about where they put artwork, so [`extract_image`] tries, in
//! order:
//!
//! 1. a structured media content entry (`media:content`, or an enclosure whose
//!    declared type is an image),
//! 2. a structured media thumbnail (`media:thumbnail`),
//! 3. the first `<img>` tag inside the item's HTML body.
//!
//! First hit wins; an item with none of these simply has no image, and the
//! page builder substitutes the shared fallback at render time.

use feed_rs::model::Entry;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Category applied when a feed item carries no tags.
pub const DEFAULT_CATEGORY: &str = "Watch News";

static IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).expect("img pattern"));

/// Pick an image URL for a feed entry, or `None` if it has no usable artwork.
///
/// `link` is the article URL, used to absolutize relative `src` values found
/// by the HTML scan.
pub fn extract_image(entry: &Entry, link: &str) -> Option<String> {
    // media:content and enclosures share feed-rs's media content list; an
    // entry with a declared non-image type (podcast enclosures, mostly) is
    // skipped, one with no declared type is trusted.
    for media in &entry.media {
        for content in &media.content {
            let Some(url) = &content.url else { continue };
            let is_image = content
                .content_type
                .as_ref()
                .map(|t| t.to_string().starts_with("image/"))
                .unwrap_or(true);
            if is_image {
                return Some(url.to_string());
            }
        }
    }

    for media in &entry.media {
        if let Some(thumb) = media.thumbnails.first() {
            return Some(thumb.image.uri.clone());
        }
    }

    let html = entry
        .content
        .as_ref()
        .and_then(|c| c.body.as_deref())
        .or_else(|| entry.summary.as_ref().map(|s| s.content.as_str()))?;
    let src = IMG_SRC.captures(html)?.get(1)?.as_str();
    Some(resolve_src(src, link))
}

/// First feed-provided tag, or [`DEFAULT_CATEGORY`].
pub fn extract_category(entry: &Entry) -> String {
    entry
        .categories
        .first()
        .map(|c| c.label.clone().unwrap_or_else(|| c.term.clone()))
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// All tag texts on the entry, for brand detection.
pub fn category_texts(entry: &Entry) -> Vec<String> {
    entry
        .categories
        .iter()
        .map(|c| c.label.clone().unwrap_or_else(|| c.term.clone()))
        .collect()
}

fn resolve_src(src: &str, link: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }
    if let Ok(base) = Url::parse(link) {
        if let Ok(absolute) = base.join(src) {
            return absolute.to_string();
        }
    }
    src.to_string()
}
