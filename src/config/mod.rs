use std::path::PathBuf;

use crate::errors::FeederResult;

/// Listing page the feed is built from
pub const SOURCE_URL: &str = "https://udn.com/news/breaknews/1/99";

/// Origin used to absolutize relative article links
pub const SITE_ORIGIN: &str = "https://udn.com";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Upper bound on items per feed
pub const MAX_ITEMS: usize = 15;

/// Summaries are cut to this many characters
pub const SUMMARY_MAX_CHARS: usize = 150;

pub const CHANNEL_TITLE: &str = "聯合新聞網 - 即時新聞";
pub const CHANNEL_DESCRIPTION: &str = "聯合新聞網即時新聞 RSS 聚合";
pub const CHANNEL_LANGUAGE: &str = "zh-tw";

pub const DEFAULT_OUTPUT_PATH: &str = "feed.xml";

pub const OUTPUT_ENV_VAR: &str = "UDN_FEED_OUTPUT";

#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeederResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        // A blank value counts as unset
        let output_path = std::env::var(OUTPUT_ENV_VAR)
            .ok()
            .and_then(|value| Self::parse_output_path(&value))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Ok(Self { output_path })
    }

    /// Override the output path, e.g. from a command-line flag
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }

    fn parse_output_path(value: &str) -> Option<PathBuf> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            log::debug!("{} is blank, using {}", OUTPUT_ENV_VAR, DEFAULT_OUTPUT_PATH);
            return None;
        }
        Some(PathBuf::from(trimmed))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let config = Config::default();
        assert_eq!(config.output_path, PathBuf::from("feed.xml"));
    }

    #[test]
    fn test_with_output_overrides_path() {
        let config = Config::default().with_output(Some(PathBuf::from("public/udn.xml")));
        assert_eq!(config.output_path, PathBuf::from("public/udn.xml"));
    }

    #[test]
    fn test_with_output_none_keeps_path() {
        let config = Config::default().with_output(None);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn test_parse_output_path_treats_blank_as_unset() {
        assert_eq!(Config::parse_output_path(""), None);
        assert_eq!(Config::parse_output_path("   "), None);
        assert_eq!(
            Config::parse_output_path(" out/feed.xml "),
            Some(PathBuf::from("out/feed.xml"))
        );
    }

    #[test]
    fn test_source_url_lives_on_site_origin() {
        assert!(SOURCE_URL.starts_with(SITE_ORIGIN));
    }
}
