//! Escaping-aware HTML fragment rendering.
//!
//! Every piece of user-supplied text reaches markup through the [`Esc`]
//! display adapter — there is no raw-interpolation path in this module, which
//! is what keeps the escaping invariant a property of the code shape rather
//! than of call-site discipline.
//!
//! The class lists and data attributes match the hand-written template the
//! fragments are substituted into; changing them here without changing the
//! template breaks the page styling and the client-side brand/letter filters.

use crate::models::{Article, DictionaryEntry, FALLBACK_IMAGE};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Display adapter that HTML-entity-escapes `&`, `<`, `>`, and `"`.
pub struct Esc<'a>(pub &'a str);

impl fmt::Display for Esc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"']) {
            f.write_str(&rest[..i])?;
            let entity = match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => "&quot;",
            };
            f.write_str(entity)?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

/// Render the large featured-article block.
pub fn render_featured(article: &Article) -> String {
    let image = article.image.as_deref().unwrap_or(FALLBACK_IMAGE);
    format!(
        r#"<a href="{link}" target="_blank" rel="noopener" class="news-item block relative rounded-2xl overflow-hidden group" data-brand="{brand}" data-show="all" data-featured="true">
        <img src="{image}" alt="" class="w-full h-[340px] object-cover group-hover:scale-105 transition-transform duration-500">
        <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/30 to-transparent"></div>
        <div class="absolute bottom-0 left-0 right-0 p-6">
          <span class="rounded-full px-3 py-1 text-[10px] bg-gold text-emeraldDark font-medium mb-3 inline-block">{category}</span>
          <h3 class="font-heading text-2xl font-medium text-white leading-snug mb-2">{title}</h3>
          <p class="text-xs text-white/60 font-light">{source} &middot; {date}</p>
        </div>
      </a>"#,
        link = Esc(&article.link),
        brand = Esc(&article.brand),
        image = Esc(image),
        category = Esc(&article.category),
        title = Esc(&article.title),
        source = Esc(&article.source),
        date = Esc(&article.date),
    )
}

/// Render one compact news card for the grid.
pub fn render_news_card(article: &Article) -> String {
    let image = article.image.as_deref().unwrap_or(FALLBACK_IMAGE);
    format!(
        r#"<a href="{link}" target="_blank" rel="noopener" class="news-item block bg-cardBg rounded-xl overflow-hidden shadow-md hover:shadow-lg transition-shadow border border-white/[0.08] group" data-brand="{brand}">
        <img src="{image}" alt="" class="w-full h-[180px] object-cover group-hover:scale-105 transition-transform duration-500">
        <div class="p-4">
          <span class="rounded-full px-2.5 py-0.5 text-[10px] bg-gold/20 text-gold font-medium">{category}</span>
          <p class="text-sm font-heading font-medium text-textPrimary mt-2 leading-snug">{title}</p>
          <p class="text-[11px] text-textSecondary font-light mt-1.5">{source} &middot; {date}</p>
        </div>
      </a>"#,
        link = Esc(&article.link),
        brand = Esc(&article.brand),
        image = Esc(image),
        category = Esc(&article.category),
        title = Esc(&article.title),
        source = Esc(&article.source),
        date = Esc(&article.date),
    )
}

/// Render the whole grid of news cards.
pub fn render_news_cards(articles: &[&Article]) -> String {
    articles
        .iter()
        .map(|a| render_news_card(a))
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// The letter a dictionary entry files under, normalized to uppercase ASCII.
///
/// Entries with a malformed `letter` field are excluded from grouping rather
/// than rendered under a garbage heading.
pub fn group_letter(entry: &DictionaryEntry) -> Option<char> {
    entry
        .letter
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
}

/// Letters that have at least one dictionary entry.
pub fn active_letters(entries: &[DictionaryEntry]) -> BTreeSet<char> {
    entries.iter().filter_map(group_letter).collect()
}

/// Render the A–Z navigation row. Letters with entries are enabled buttons,
/// the alphabetically-first of them highlighted; the rest are disabled
/// placeholders.
pub fn render_letter_nav(active: &BTreeSet<char>) -> String {
    let first_active = active.iter().next().copied();
    let mut buttons = Vec::with_capacity(26);
    for letter in 'A'..='Z' {
        let button = if active.contains(&letter) {
            if Some(letter) == first_active {
                format!(
                    r#"<button class="letter-btn active w-8 h-8 rounded-full text-xs font-heading font-medium transition-all bg-gold text-emeraldDark shadow-sm" data-letter="{letter}">{letter}</button>"#
                )
            } else {
                format!(
                    r#"<button class="letter-btn w-8 h-8 rounded-full text-xs font-heading font-medium transition-all border border-gold/30 text-gold/40 bg-gold/5 hover:border-gold/50" data-letter="{letter}">{letter}</button>"#
                )
            }
        } else {
            format!(
                r#"<button class="letter-btn w-8 h-8 rounded-full text-xs font-heading font-medium transition-all border border-white/[0.06] text-textSecondary/30 cursor-default" disabled>{letter}</button>"#
            )
        };
        buttons.push(button);
    }
    buttons.join("\n        ")
}

/// Render the glossary: entries grouped by letter, groups in alphabetical
/// order, each a heading followed by a card grid.
pub fn render_dictionary(entries: &[DictionaryEntry]) -> String {
    let mut groups: BTreeMap<char, Vec<&DictionaryEntry>> = BTreeMap::new();
    for entry in entries {
        if let Some(letter) = group_letter(entry) {
            groups.entry(letter).or_default().push(entry);
        }
    }

    let mut sections = Vec::with_capacity(groups.len());
    for (i, (letter, terms)) in groups.iter().enumerate() {
        let mt_class = if i == 0 { "mt-2" } else { "mt-8" };
        let heading = format!(
            r#"<h3 id="dict-{letter}" class="dict-group-heading font-heading text-4xl font-semibold text-gold/60 mb-4 {mt_class}" data-letter="{letter}">{letter}</h3>"#
        );
        let cards = terms
            .iter()
            .map(|t| render_term_card(t))
            .collect::<Vec<_>>()
            .join("\n");
        let grid = format!(
            "        <div class=\"dict-group grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-3\" data-letter=\"{letter}\">\n{cards}\n        </div>"
        );
        sections.push(format!("{heading}\n{grid}"));
    }
    sections.join("\n\n        ")
}

fn render_term_card(entry: &DictionaryEntry) -> String {
    let image = entry.image.as_deref().unwrap_or(FALLBACK_IMAGE);
    format!(
        r#"          <div class="dict-term bg-cardBg rounded-xl overflow-hidden cursor-pointer hover:bg-boneLight transition-colors shadow-md border border-white/[0.08]">
            <img src="{image}" alt="" class="w-full h-[120px] object-cover">
            <div class="px-4 py-3">
              <div class="flex items-center justify-between">
                <h4 class="font-heading font-medium text-sm text-textPrimary">{term}</h4>
                <span class="toggle-icon text-gold/60 text-sm font-light ml-4">+</span>
              </div>
              <div class="def-wrap overflow-hidden max-h-0 transition-all duration-200">
                <p class="text-[11px] text-textSecondary font-light mt-2 leading-relaxed">{definition}</p>
              </div>
            </div>
          </div>"#,
        image = Esc(image),
        term = Esc(&entry.term),
        definition = Esc(&entry.definition),
    )
}
