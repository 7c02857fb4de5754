//! Regex-based extraction of news items from the listing page markup.
//!
//! Headlines and summaries are matched independently and paired by position:
//! the k-th `<h3><a>` headline gets the k-th `<p>` block as its summary.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use url::Url;

use crate::config::{MAX_ITEMS, SITE_ORIGIN, SUMMARY_MAX_CHARS};
use crate::domain::{NewsItem, FETCH_FAILED, NOTHING_EXTRACTED};

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<h3[^>]*>\s*<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>\s*</h3>"#)
        .expect("title pattern is valid")
});

static SUMMARY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p[^>]*>(.*?)</p>").expect("summary pattern is valid"));

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// How the items of a run were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Extracted,
    NothingExtracted,
    FetchFailed,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub items: Vec<NewsItem>,
    pub outcome: RunOutcome,
}

impl Extraction {
    fn placeholder(item: NewsItem, outcome: RunOutcome) -> Self {
        Self {
            items: vec![item],
            outcome,
        }
    }
}

pub struct ExtractService;

impl ExtractService {
    /// Turn the fetched markup into 1..=MAX_ITEMS news items.
    ///
    /// `None` means the fetch failed. The item list is never empty.
    pub fn extract(html: Option<&str>, now: DateTime<Utc>) -> Extraction {
        let Some(html) = html else {
            return Extraction::placeholder(FETCH_FAILED.to_item(now), RunOutcome::FetchFailed);
        };

        let summaries: Vec<&str> = SUMMARY_PATTERN
            .captures_iter(html)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        let items: Vec<NewsItem> = TITLE_PATTERN
            .captures_iter(html)
            .take(MAX_ITEMS)
            .enumerate()
            .map(|(i, caps)| {
                let link = caps.get(1).map_or("", |m| m.as_str());
                let title = caps.get(2).map_or("", |m| m.as_str());
                let summary = summaries.get(i).copied().unwrap_or_default();

                NewsItem::new(clean_text(title), absolutize_link(link), now)
                    .with_summary(truncate_chars(&clean_text(summary), SUMMARY_MAX_CHARS))
            })
            .collect();

        if items.is_empty() {
            log::warn!("No headlines matched, publishing placeholder item");
            return Extraction::placeholder(
                NOTHING_EXTRACTED.to_item(now),
                RunOutcome::NothingExtracted,
            );
        }

        log::debug!(
            "Extracted {} items ({} summary blocks available)",
            items.len(),
            summaries.len()
        );
        Extraction {
            items,
            outcome: RunOutcome::Extracted,
        }
    }
}

/// Remove every `<...>` tag, leaving the text between them
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

fn clean_text(text: &str) -> String {
    strip_tags(text).trim().to_string()
}

/// Keep at most `max` characters (not bytes)
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Resolve a scraped href against the site origin.
///
/// `http(s)://` links are returned unchanged, an empty href stays empty.
pub fn absolutize_link(href: &str) -> String {
    if href.is_empty() || href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    match Url::parse(SITE_ORIGIN).and_then(|origin| origin.join(href)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", SITE_ORIGIN, href),
    }
}
