//! In-memory reactive episode store
//! 内存中的响应式单集存储
//!
//! The whole catalog lives behind a `watch` channel. Every write replaces it
//! and wakes all lookups; each lookup re-evaluates its own record and only
//! emits when that record actually changed.

use std::collections::HashMap;

use futures::stream::{self, StreamExt};
use ps_core::ports::{EpisodeLookupStream, EpisodeStorePort};
use ps_core::{Episode, EpisodeToPodcast, EpisodeUri, Podcast, PodcastFeed, PodcastUri};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Default)]
struct Catalog {
    podcasts: HashMap<PodcastUri, Podcast>,
    episodes: HashMap<EpisodeUri, Episode>,
}

impl Catalog {
    fn episode_and_podcast(&self, uri: &EpisodeUri) -> Option<EpisodeToPodcast> {
        let episode = self.episodes.get(uri)?;
        let podcast = self.podcasts.get(&episode.podcast_uri)?;
        Some(EpisodeToPodcast::new(episode.clone(), podcast.clone()))
    }
}

pub struct InMemoryEpisodeStore {
    catalog: watch::Sender<Catalog>,
}

impl Default for InMemoryEpisodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEpisodeStore {
    pub fn new() -> Self {
        let (catalog, _) = watch::channel(Catalog::default());
        Self { catalog }
    }

    /// Insert or replace a podcast.
    pub fn add_podcast(&self, podcast: Podcast) {
        self.catalog.send_modify(|catalog| {
            catalog.podcasts.insert(podcast.uri.clone(), podcast);
        });
    }

    /// Insert or replace episodes.
    pub fn add_episodes(&self, episodes: impl IntoIterator<Item = Episode>) {
        self.catalog.send_modify(|catalog| {
            for episode in episodes {
                catalog.episodes.insert(episode.uri.clone(), episode);
            }
        });
    }

    /// Write a fetched feed (podcast + episodes) in one update.
    pub fn upsert_feed(&self, feed: PodcastFeed) {
        let PodcastFeed { podcast, episodes } = feed;
        debug!(
            podcast_uri = %podcast.uri,
            episodes = episodes.len(),
            "Upserting podcast feed"
        );

        self.catalog.send_modify(|catalog| {
            catalog.podcasts.insert(podcast.uri.clone(), podcast);
            for episode in episodes {
                catalog.episodes.insert(episode.uri.clone(), episode);
            }
        });
    }

    pub fn remove_episode(&self, uri: &EpisodeUri) -> Option<Episode> {
        let mut removed = None;
        self.catalog.send_if_modified(|catalog| {
            removed = catalog.episodes.remove(uri);
            removed.is_some()
        });
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.borrow().podcasts.is_empty()
    }

    pub fn podcast_count(&self) -> usize {
        self.catalog.borrow().podcasts.len()
    }

    pub fn episode_count(&self) -> usize {
        self.catalog.borrow().episodes.len()
    }
}

struct Lookup {
    rx: watch::Receiver<Catalog>,
    uri: EpisodeUri,
    last: Option<Option<EpisodeToPodcast>>,
}

impl EpisodeStorePort for InMemoryEpisodeStore {
    fn episode_and_podcast_with_uri(&self, uri: &EpisodeUri) -> EpisodeLookupStream {
        let mut rx = self.catalog.subscribe();
        rx.mark_changed();

        let lookup = Lookup {
            rx,
            uri: uri.clone(),
            last: None,
        };

        stream::unfold(lookup, |mut lookup| async move {
            loop {
                lookup.rx.changed().await.ok()?;

                let next = lookup.rx.borrow_and_update().episode_and_podcast(&lookup.uri);
                if lookup.last.as_ref() != Some(&next) {
                    lookup.last = Some(next.clone());
                    return Some((next, lookup));
                }
            }
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{episode, feed, podcast};

    #[tokio::test]
    async fn test_lookup_emits_current_record_first() {
        let store = InMemoryEpisodeStore::new();
        store.upsert_feed(feed("p", &["ep-42"]));

        let mut lookup = store.episode_and_podcast_with_uri(&"ep-42".into());
        let record = lookup.next().await.unwrap().expect("record should exist");

        assert_eq!(record.episode.uri.as_str(), "ep-42");
        assert_eq!(record.podcast.uri.as_str(), "p");
    }

    #[tokio::test]
    async fn test_lookup_of_missing_episode_emits_none() {
        let store = InMemoryEpisodeStore::new();

        let mut lookup = store.episode_and_podcast_with_uri(&"missing-id".into());

        assert_eq!(lookup.next().await, Some(None));
    }

    #[tokio::test]
    async fn test_episode_without_podcast_is_absent() {
        let store = InMemoryEpisodeStore::new();
        store.add_episodes([episode("ep-1", "unknown")]);

        let mut lookup = store.episode_and_podcast_with_uri(&"ep-1".into());

        assert_eq!(lookup.next().await, Some(None));
    }

    #[tokio::test]
    async fn test_lookup_reemits_when_record_appears_and_changes() {
        let store = InMemoryEpisodeStore::new();
        let mut lookup = store.episode_and_podcast_with_uri(&"ep-42".into());
        assert_eq!(lookup.next().await, Some(None));

        store.upsert_feed(feed("p", &["ep-42"]));
        let record = lookup.next().await.unwrap().unwrap();
        assert_eq!(record.episode.title, "Episode ep-42");

        let mut renamed = episode("ep-42", "p");
        renamed.title = "Renamed".to_string();
        store.add_episodes([renamed]);
        let record = lookup.next().await.unwrap().unwrap();
        assert_eq!(record.episode.title, "Renamed");

        store.remove_episode(&"ep-42".into());
        assert_eq!(lookup.next().await, Some(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrelated_writes_do_not_reemit() {
        let store = InMemoryEpisodeStore::new();
        store.upsert_feed(feed("p", &["ep-42"]));
        let mut lookup = store.episode_and_podcast_with_uri(&"ep-42".into());
        lookup.next().await;

        store.add_podcast(podcast("other"));
        store.add_episodes([episode("ep-7", "other")]);

        let next = tokio::time::timeout(std::time::Duration::from_secs(1), lookup.next()).await;
        assert!(next.is_err(), "unrelated writes must not emit");
    }

    #[test]
    fn test_counts_track_writes() {
        let store = InMemoryEpisodeStore::new();
        assert!(store.is_empty());

        store.upsert_feed(feed("p", &["ep-1", "ep-2"]));

        assert!(!store.is_empty());
        assert_eq!(store.podcast_count(), 1);
        assert_eq!(store.episode_count(), 2);
        assert!(store.remove_episode(&"ep-3".into()).is_none());
        assert_eq!(store.episode_count(), 2);
    }
}
