use chrono::{DateTime, Utc};

use super::news_item::format_rfc822;
use super::NewsItem;
use crate::config::{CHANNEL_DESCRIPTION, CHANNEL_LANGUAGE, CHANNEL_TITLE, SOURCE_URL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
}

impl ChannelInfo {
    pub fn new(title: String, link: String, description: String, language: String) -> Self {
        Self {
            title,
            link,
            description,
            language,
        }
    }

    /// Metadata of the UDN breaking-news channel
    pub fn udn() -> Self {
        Self::new(
            CHANNEL_TITLE.to_string(),
            SOURCE_URL.to_string(),
            CHANNEL_DESCRIPTION.to_string(),
            CHANNEL_LANGUAGE.to_string(),
        )
    }
}

impl Default for ChannelInfo {
    fn default() -> Self {
        Self::udn()
    }
}

/// One run's worth of feed content, ready to be rendered
#[derive(Debug, Clone)]
pub struct FeedDocument {
    pub channel: ChannelInfo,
    pub last_build: DateTime<Utc>,
    pub items: Vec<NewsItem>,
}

impl FeedDocument {
    pub fn new(channel: ChannelInfo, items: Vec<NewsItem>, last_build: DateTime<Utc>) -> Self {
        Self {
            channel,
            last_build,
            items,
        }
    }

    pub fn last_build_date(&self) -> String {
        format_rfc822(&self.last_build)
    }
}
