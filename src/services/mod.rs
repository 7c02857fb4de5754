pub mod extract_service;
pub mod feed_builder;
pub mod fetch_service;
pub mod generate_service;

pub use extract_service::{ExtractService, Extraction, RunOutcome};
pub use feed_builder::FeedBuilder;
pub use fetch_service::FetchService;
pub use generate_service::{GenerateService, GeneratedFeed};
