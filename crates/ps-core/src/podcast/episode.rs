use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::ids::{EpisodeUri, PodcastUri};

/// A single playable item within a podcast.
/// 播客中的单集
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub uri: EpisodeUri,
    pub podcast_uri: PodcastUri,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub published: DateTime<FixedOffset>,
    #[serde(default)]
    pub duration_secs: Option<u64>,
}

impl Episode {
    pub fn duration(&self) -> Option<Duration> {
        self.duration_secs.map(Duration::from_secs)
    }
}
