//! Podcast feed sources
//! 播客订阅源

mod json_feed_source;
mod static_feed_source;

pub use json_feed_source::JsonFeedSource;
pub use static_feed_source::StaticFeedSource;
