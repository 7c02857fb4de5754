use chrono::{DateTime, Utc};

/// strftime pattern for RSS `pubDate` / `lastBuildDate` values
pub const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

pub const FALLBACK_TITLE: &str = "無標題";
pub const FALLBACK_SUMMARY: &str = "無摘要";
pub const FALLBACK_LINK: &str = crate::config::SITE_ORIGIN;

pub fn format_rfc822(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(RFC822_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub published_at: DateTime<Utc>,
}

impl NewsItem {
    /// Blank fields are replaced with the fallback text so an item is never empty
    pub fn new(title: String, link: String, published_at: DateTime<Utc>) -> Self {
        Self {
            title: non_empty_or(title, FALLBACK_TITLE),
            link: non_empty_or(link, FALLBACK_LINK),
            summary: FALLBACK_SUMMARY.to_string(),
            published_at,
        }
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = non_empty_or(summary, FALLBACK_SUMMARY);
        self
    }

    pub fn pub_date(&self) -> String {
        format_rfc822(&self.published_at)
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
