use chrono::{DateTime, Utc};

use crate::domain::{ChannelInfo, FeedDocument};
use crate::errors::FeederResult;
use crate::services::extract_service::RunOutcome;
use crate::services::{ExtractService, FeedBuilder, FetchService};
use crate::sources::PageSource;

#[derive(Debug)]
pub struct GeneratedFeed {
    pub document: FeedDocument,
    pub xml: String,
    pub outcome: RunOutcome,
}

/// Fetch -> extract -> build, once per call
pub struct GenerateService<S: PageSource> {
    fetch_service: FetchService<S>,
    channel: ChannelInfo,
}

impl<S: PageSource> GenerateService<S> {
    pub fn new(source: S) -> Self {
        Self {
            fetch_service: FetchService::new(source),
            channel: ChannelInfo::udn(),
        }
    }

    pub fn source_url(&self) -> String {
        self.fetch_service.url()
    }

    pub fn generate(&self, now: DateTime<Utc>) -> FeederResult<GeneratedFeed> {
        let html = self.fetch_service.fetch();
        let extraction = ExtractService::extract(html.as_deref(), now);
        let outcome = extraction.outcome;

        let document = FeedDocument::new(self.channel.clone(), extraction.items, now);
        let xml = FeedBuilder::render(&document)?;

        Ok(GeneratedFeed {
            document,
            xml,
            outcome,
        })
    }
}
