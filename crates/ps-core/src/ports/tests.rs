//! Mock implementations of ports for testing.
//!
//! This module provides mock implementations using `mockall` for unit testing
//! code that depends on the episode screen ports.

use async_trait::async_trait;
use mockall::mock;

use crate::podcast::PodcastFeed;
use crate::ports::{NavigationArgsPort, PodcastFeedPort, PodcastsRepositoryPort};

mock! {
    pub NavigationArgs {}

    impl NavigationArgsPort for NavigationArgs {
        fn get(&self, name: &str) -> Option<String>;
    }
}

mock! {
    pub PodcastsRepository {}

    #[async_trait]
    impl PodcastsRepositoryPort for PodcastsRepository {
        async fn update_podcasts(&self, force: bool) -> anyhow::Result<()>;
    }
}

mock! {
    pub FeedSource {}

    #[async_trait]
    impl PodcastFeedPort for FeedSource {
        async fn fetch_feeds(&self) -> anyhow::Result<Vec<PodcastFeed>>;
    }
}

#[test]
fn test_navigation_args_mock_reports_absent_parameter() {
    let mut args = MockNavigationArgs::new();
    args.expect_get().returning(|_| None);

    assert!(args.get("episodeUri").is_none());
}

#[tokio::test]
async fn test_repository_mock_propagates_failure() {
    let mut repo = MockPodcastsRepository::new();
    repo.expect_update_podcasts()
        .withf(|force| !*force)
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("offline")));

    let err = repo.update_podcasts(false).await.unwrap_err();

    assert_eq!(err.to_string(), "offline");
}

#[tokio::test]
async fn test_feed_mock_returns_feeds() {
    let mut feeds = MockFeedSource::new();
    feeds.expect_fetch_feeds().returning(|| Ok(Vec::new()));

    assert!(feeds.fetch_feeds().await.unwrap().is_empty());
}
