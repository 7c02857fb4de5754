use chrono::{DateTime, Utc};

use super::NewsItem;

/// Synthetic entry published when no real news could be extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub title: &'static str,
    pub link: &'static str,
    pub summary: &'static str,
}

/// Used when the listing page could not be fetched
pub const FETCH_FAILED: Placeholder = Placeholder {
    title: "新聞抓取暫時失敗",
    link: "https://udn.com",
    summary: "RSS 生成器正在調整中，請稍後再試。",
};

/// Used when the page was fetched but no headline matched
pub const NOTHING_EXTRACTED: Placeholder = Placeholder {
    title: "範例新聞：聯合新聞網 RSS 測試",
    link: "https://udn.com/news/breaknews/1/99",
    summary: "這是 RSS 生成器的測試資料，下次執行會嘗試抓取真實新聞。",
};

impl Placeholder {
    pub fn to_item(&self, published_at: DateTime<Utc>) -> NewsItem {
        NewsItem::new(self.title.to_string(), self.link.to_string(), published_at)
            .with_summary(self.summary.to_string())
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        item.title == self.title && item.link == self.link && item.summary == self.summary
    }
}
