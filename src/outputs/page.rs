//! Final page assembly: template in, `index.html` out.
//!
//! The template is external and hand-maintained; it carries exactly four
//! placeholder tokens, each of which is substituted exactly once. Substitution
//! is order-independent — the tokens are distinct and appear once each.
//!
//! A missing template is fatal. Missing data files are not: either input
//! behaves as an empty collection and the corresponding section renders
//! empty.

use crate::models::{Article, DictionaryEntry};
use crate::outputs::html;
use crate::store;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

pub const FEATURED_PLACEHOLDER: &str = "{{FEATURED_ARTICLE}}";
pub const NEWS_CARDS_PLACEHOLDER: &str = "{{NEWS_CARDS}}";
pub const LETTER_NAV_PLACEHOLDER: &str = "{{LETTER_NAV}}";
pub const DICTIONARY_PLACEHOLDER: &str = "{{DICTIONARY_TERMS}}";

/// Substitute all four placeholders and return the finished page.
///
/// The featured slot takes the first article with an image, else the first
/// article, else renders empty. The grid holds every *other* article — the
/// exact featured record is excluded by position, so an article that happens
/// to equal it field-for-field still appears in the grid.
pub fn render_page(
    template: &str,
    news: &[Article],
    dictionary: &[DictionaryEntry],
) -> String {
    let featured_index = news
        .iter()
        .position(|a| a.image.is_some())
        .or(if news.is_empty() { None } else { Some(0) });
    let featured_html = featured_index
        .map(|i| html::render_featured(&news[i]))
        .unwrap_or_default();

    let grid: Vec<&Article> = news
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != featured_index)
        .map(|(_, a)| a)
        .collect();
    let cards_html = html::render_news_cards(&grid);

    let nav_html = html::render_letter_nav(&html::active_letters(dictionary));
    let dictionary_html = html::render_dictionary(dictionary);

    template
        .replacen(FEATURED_PLACEHOLDER, &featured_html, 1)
        .replacen(NEWS_CARDS_PLACEHOLDER, &cards_html, 1)
        .replacen(LETTER_NAV_PLACEHOLDER, &nav_html, 1)
        .replacen(DICTIONARY_PLACEHOLDER, &dictionary_html, 1)
}

/// Build the page from disk inputs and write it to `output_path`,
/// overwriting any previous build.
#[instrument(level = "info", skip_all, fields(template = %template_path, output = %output_path))]
pub async fn run(
    template_path: &str,
    news_path: &str,
    dictionary_path: &str,
    output_path: &str,
) -> Result<(), Box<dyn Error>> {
    let template = fs::read_to_string(template_path).await?;
    let news = store::load_articles(news_path).await?;
    let dictionary = store::load_dictionary(dictionary_path).await?;

    let page = render_page(&template, &news, &dictionary);
    fs::write(output_path, page).await?;

    info!(
        articles = news.len(),
        terms = dictionary.len(),
        path = output_path,
        "Built page"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html>\n{{FEATURED_ARTICLE}}\n{{NEWS_CARDS}}\n{{LETTER_NAV}}\n{{DICTIONARY_TERMS}}\n</html>";

    fn article(link: &str, image: Option<&str>) -> Article {
        Article {
            title: format!("Article at {link}"),
            link: link.to_string(),
            source: "Hodinkee".to_string(),
            date: "May 6, 2025".to_string(),
            image: image.map(str::to_string),
            category: "Watch News".to_string(),
            brand: "other".to_string(),
        }
    }

    #[test]
    fn test_empty_inputs_render_empty_sections() {
        let page = render_page(TEMPLATE, &[], &[]);
        assert!(!page.contains("{{"));
        assert!(!page.contains("news-item"));
        assert!(!page.contains("dict-group"));
        // the letter nav always renders its 26 placeholders
        assert_eq!(page.matches("<button").count(), 26);
    }

    #[test]
    fn test_featured_prefers_first_article_with_image() {
        let news = vec![
            article("https://a", None),
            article("https://b", Some("https://img/b.jpg")),
            article("https://c", Some("https://img/c.jpg")),
        ];
        let page = render_page(TEMPLATE, &news, &[]);
        let featured_start = page.find(r#"data-featured="true""#).unwrap();
        let b_pos = page.find("https://img/b.jpg").unwrap();
        assert!(b_pos > featured_start);
        // two remaining articles in the grid
        assert_eq!(page.matches(r#"rel="noopener""#).count(), 3);
    }

    #[test]
    fn test_featured_falls_back_to_first_article() {
        let news = vec![article("https://a", None), article("https://b", None)];
        let page = render_page(TEMPLATE, &news, &[]);
        assert!(page.contains(r#"data-featured="true""#));
        // one featured + one grid card
        assert_eq!(page.matches(r#"rel="noopener""#).count(), 2);
    }

    #[test]
    fn test_duplicate_by_value_articles_stay_in_grid() {
        // two records identical field-for-field; only the selected one
        // leaves the grid
        let news = vec![
            article("https://a", Some("https://img/a.jpg")),
            article("https://a", Some("https://img/a.jpg")),
        ];
        let page = render_page(TEMPLATE, &news, &[]);
        assert_eq!(page.matches(r#"rel="noopener""#).count(), 2);
        assert_eq!(page.matches(r#"data-featured="true""#).count(), 1);
    }

    #[test]
    fn test_each_placeholder_replaced_exactly_once() {
        let page = render_page(TEMPLATE, &[], &[]);
        for token in [
            FEATURED_PLACEHOLDER,
            NEWS_CARDS_PLACEHOLDER,
            LETTER_NAV_PLACEHOLDER,
            DICTIONARY_PLACEHOLDER,
        ] {
            assert!(!page.contains(token));
        }
    }

    #[test]
    fn test_escaped_title_reaches_page() {
        let mut a = article("https://a", Some("https://img/a.jpg"));
        a.title = r#"<script>&"</script>"#.to_string();
        let page = render_page(TEMPLATE, &[a], &[]);
        assert!(page.contains("&lt;script&gt;&amp;&quot;&lt;/script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
