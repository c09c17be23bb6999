//! Adapter wiring
//! 适配器装配
//!
//! Builds the concrete adapters and hands them to the application layer
//! explicitly. This is the only place that knows about both layers.

use std::sync::Arc;
use std::time::Duration;

use ps_app::{EpisodeScreenDeps, EpisodeScreenViewModelFactory, SharingStarted};
use ps_core::ports::PodcastFeedPort;
use ps_core::AppConfig;
use ps_infra::{CatalogPodcastsRepository, InMemoryEpisodeStore, JsonFeedSource, StaticFeedSource};
use tracing::info;

/// Everything a running process holds on to.
pub struct AppRuntime {
    pub store: Arc<InMemoryEpisodeStore>,
    pub episode_screen: EpisodeScreenViewModelFactory,
}

/// Sharing policy for screen states; an absent timeout means the default,
/// a negative one means no grace period.
pub fn sharing_from_config(config: &AppConfig) -> SharingStarted {
    match config.stop_timeout_ms {
        Some(ms) => SharingStarted::while_subscribed(Duration::from_millis(ms.max(0) as u64)),
        None => SharingStarted::default(),
    }
}

fn feed_source_from_config(config: &AppConfig) -> Arc<dyn PodcastFeedPort> {
    if config.feed_path.as_os_str().is_empty() {
        info!("No feed file configured, podcasts refresh will be empty");
        Arc::new(StaticFeedSource::empty())
    } else {
        info!(path = %config.feed_path.display(), "Using JSON feed file");
        Arc::new(JsonFeedSource::new(config.feed_path.clone()))
    }
}

pub fn wire(config: &AppConfig) -> AppRuntime {
    let store = Arc::new(InMemoryEpisodeStore::new());
    let repository = Arc::new(CatalogPodcastsRepository::new(
        feed_source_from_config(config),
        store.clone(),
    ));

    let episode_screen = EpisodeScreenViewModelFactory::new(
        EpisodeScreenDeps {
            podcasts_repository: repository,
            episode_store: store.clone(),
        },
        sharing_from_config(config),
    );

    AppRuntime {
        store,
        episode_screen,
    }
}
