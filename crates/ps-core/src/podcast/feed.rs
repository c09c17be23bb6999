use serde::{Deserialize, Serialize};

use super::{Episode, Podcast};

/// One fetched podcast feed: the podcast and the episodes it lists.
/// 一次拉取到的播客订阅源
///
/// This is the unit a podcasts refresh writes into the episode store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastFeed {
    pub podcast: Podcast,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}
