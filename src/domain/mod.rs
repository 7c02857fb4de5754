pub mod feed;
pub mod news_item;
pub mod placeholder;

pub use feed::{ChannelInfo, FeedDocument};
pub use news_item::NewsItem;
pub use placeholder::{Placeholder, FETCH_FAILED, NOTHING_EXTRACTED};
