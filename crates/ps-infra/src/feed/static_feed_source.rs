use async_trait::async_trait;
use ps_core::ports::PodcastFeedPort;
use ps_core::PodcastFeed;

/// Fixed set of feeds, for wiring without a feed file.
#[derive(Debug, Clone, Default)]
pub struct StaticFeedSource {
    feeds: Vec<PodcastFeed>,
}

impl StaticFeedSource {
    pub fn new(feeds: Vec<PodcastFeed>) -> Self {
        Self { feeds }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PodcastFeedPort for StaticFeedSource {
    async fn fetch_feeds(&self) -> anyhow::Result<Vec<PodcastFeed>> {
        Ok(self.feeds.clone())
    }
}
