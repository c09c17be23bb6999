use async_trait::async_trait;

use crate::podcast::PodcastFeed;

/// Source of podcast feeds used by a podcasts refresh.
/// 播客订阅源
#[async_trait]
pub trait PodcastFeedPort: Send + Sync {
    async fn fetch_feeds(&self) -> anyhow::Result<Vec<PodcastFeed>>;
}
