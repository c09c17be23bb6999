//! Podcasts repository backed by the in-memory episode store
//! 基于内存单集存储的播客仓库

use std::sync::Arc;

use async_trait::async_trait;
use ps_core::ports::{PodcastFeedPort, PodcastsRepositoryPort};
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use crate::store::InMemoryEpisodeStore;

/// Refreshes the episode store from a feed source.
///
/// ## Behavior / 行为
/// - `force == false` only refreshes an empty store
/// - A refresh requested while another one runs is skipped
/// - Feed source failures are returned to the caller unchanged
pub struct CatalogPodcastsRepository {
    feeds: Arc<dyn PodcastFeedPort>,
    store: Arc<InMemoryEpisodeStore>,
    refreshing: Mutex<()>,
}

impl CatalogPodcastsRepository {
    pub fn new(feeds: Arc<dyn PodcastFeedPort>, store: Arc<InMemoryEpisodeStore>) -> Self {
        Self {
            feeds,
            store,
            refreshing: Mutex::new(()),
        }
    }
}

#[async_trait]
impl PodcastsRepositoryPort for CatalogPodcastsRepository {
    async fn update_podcasts(&self, force: bool) -> anyhow::Result<()> {
        let span = info_span!("infra.podcasts.update", force);

        async {
            let Ok(_guard) = self.refreshing.try_lock() else {
                debug!("Refresh already in progress, skipping");
                return Ok(());
            };

            if !force && !self.store.is_empty() {
                debug!("Store already populated, skipping refresh");
                return Ok(());
            }

            let feeds = self.feeds.fetch_feeds().await?;
            let count = feeds.len();
            for feed in feeds {
                self.store.upsert_feed(feed);
            }

            info!(feeds = count, "Podcasts refreshed");
            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::StaticFeedSource;
    use crate::fixtures::feed;
    use ps_core::PodcastFeed;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingFeeds {
        calls: AtomicUsize,
        delay: Duration,
        feeds: Vec<PodcastFeed>,
    }

    #[async_trait]
    impl PodcastFeedPort for CountingFeeds {
        async fn fetch_feeds(&self) -> anyhow::Result<Vec<PodcastFeed>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(self.feeds.clone())
        }
    }

    struct FailingFeeds;

    #[async_trait]
    impl PodcastFeedPort for FailingFeeds {
        async fn fetch_feeds(&self) -> anyhow::Result<Vec<PodcastFeed>> {
            Err(anyhow::anyhow!("feed unavailable"))
        }
    }

    #[tokio::test]
    async fn test_refresh_populates_empty_store() {
        let store = Arc::new(InMemoryEpisodeStore::new());
        let feeds = Arc::new(StaticFeedSource::new(vec![feed("p", &["ep-1", "ep-2"])]));
        let repo = CatalogPodcastsRepository::new(feeds, store.clone());

        repo.update_podcasts(false).await.unwrap();

        assert_eq!(store.podcast_count(), 1);
        assert_eq!(store.episode_count(), 2);
    }

    #[tokio::test]
    async fn test_unforced_refresh_skips_populated_store() {
        let store = Arc::new(InMemoryEpisodeStore::new());
        store.upsert_feed(feed("existing", &[]));
        let feeds = Arc::new(CountingFeeds {
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            feeds: vec![feed("p", &["ep-1"])],
        });
        let repo = CatalogPodcastsRepository::new(feeds.clone(), store.clone());

        repo.update_podcasts(false).await.unwrap();
        assert_eq!(feeds.calls.load(Ordering::SeqCst), 0);

        repo.update_podcasts(true).await.unwrap();
        assert_eq!(feeds.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.podcast_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_refreshes_collapse() {
        let store = Arc::new(InMemoryEpisodeStore::new());
        let feeds = Arc::new(CountingFeeds {
            calls: AtomicUsize::new(0),
            delay: Duration::from_secs(1),
            feeds: vec![feed("p", &["ep-1"])],
        });
        let repo = CatalogPodcastsRepository::new(feeds.clone(), store.clone());

        let (first, second) = tokio::join!(repo.update_podcasts(true), repo.update_podcasts(true));

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(feeds.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_feed_failure_is_returned() {
        let store = Arc::new(InMemoryEpisodeStore::new());
        let repo = CatalogPodcastsRepository::new(Arc::new(FailingFeeds), store.clone());

        let err = repo.update_podcasts(false).await.unwrap_err();

        assert_eq!(err.to_string(), "feed unavailable");
        assert!(store.is_empty());
    }
}
