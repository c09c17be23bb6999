use std::path::PathBuf;

use async_trait::async_trait;
use ps_core::ports::{FeedSourceError, PodcastFeedPort};
use ps_core::PodcastFeed;
use tracing::{debug, debug_span, Instrument};

/// Reads feeds from a JSON file holding an array of [`PodcastFeed`].
///
/// The file is re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFeedSource {
    path: PathBuf,
}

impl JsonFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read(&self) -> Result<Vec<PodcastFeed>, FeedSourceError> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| FeedSourceError::Read {
                    path: self.path.clone(),
                    source,
                })?;

        serde_json::from_str(&content).map_err(|source| FeedSourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[async_trait]
impl PodcastFeedPort for JsonFeedSource {
    async fn fetch_feeds(&self) -> anyhow::Result<Vec<PodcastFeed>> {
        let span = debug_span!("infra.feed.json.fetch", path = %self.path.display());

        async {
            let feeds = self.read().await?;
            debug!(feeds = feeds.len(), "Read podcast feeds");
            anyhow::Ok(feeds)
        }
        .instrument(span)
        .await
    }
}
