//! Brand detection over feed item titles and tags.
//!
//! The rule table is ordered; the first brand whose pattern set matches wins.
//! Patterns run over the title concatenated with every feed-provided tag, so
//! a tag-only mention (common on WordPress feeds) still counts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Brand slug applied when no rule matches.
pub const UNKNOWN_BRAND: &str = "other";

struct BrandRule {
    brand: &'static str,
    patterns: Vec<Regex>,
}

fn rule(brand: &'static str, patterns: &[&str]) -> BrandRule {
    BrandRule {
        brand,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("brand pattern"))
            .collect(),
    }
}

// The bare "AP" pattern is intentionally case-sensitive; "ap" appears inside
// too many ordinary words to match it case-insensitively.
static BRAND_RULES: Lazy<Vec<BrandRule>> = Lazy::new(|| {
    vec![
        rule("rolex", &[r"(?i)\brolex\b"]),
        rule("omega", &[r"(?i)\bomega\b"]),
        rule("patek", &[r"(?i)\bpatek\b", r"(?i)\bpatek\s*philippe\b"]),
        rule(
            "ap",
            &[r"(?i)\baudemars\s*piguet\b", r"(?i)\broyal\s*oak\b", r"\bAP\b"],
        ),
        rule(
            "jlc",
            &[
                r"(?i)\bjaeger[\s-]*lecoultre\b",
                r"(?i)\bjlc\b",
                r"(?i)\breverso\b",
            ],
        ),
        rule("cartier", &[r"(?i)\bcartier\b"]),
        rule("tudor", &[r"(?i)\btudor\b"]),
        rule("iwc", &[r"(?i)\biwc\b"]),
    ]
});

/// Detect the brand an item is about, from its title and tags.
///
/// Returns the first matching brand slug, or [`UNKNOWN_BRAND`].
pub fn detect_brand(title: &str, tags: &[String]) -> String {
    let text = format!("{} {}", title, tags.join(" "));
    for rule in BRAND_RULES.iter() {
        if rule.patterns.iter().any(|p| p.is_match(&text)) {
            return rule.brand.to_string();
        }
    }
    UNKNOWN_BRAND.to_string()
}
