use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::config::{FETCH_TIMEOUT_SECS, SOURCE_URL, USER_AGENT as BROWSER_USER_AGENT};
use crate::errors::{FeederError, FeederResult};
use crate::sources::traits::PageSource;

/// UDN breaking-news listing page
pub struct UdnSource {
    client: Client,
    url: String,
}

impl UdnSource {
    pub fn new() -> Self {
        Self::with_url(SOURCE_URL)
    }

    fn with_url(url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| Client::new()),
            url: url.to_string(),
        }
    }
}

impl Default for UdnSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for UdnSource {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> FeederResult<String> {
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeederError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        Ok(response.text()?)
    }
}
