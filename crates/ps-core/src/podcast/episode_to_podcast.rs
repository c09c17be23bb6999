use serde::{Deserialize, Serialize};

use super::{Episode, Podcast};

/// An episode paired with its parent podcast.
/// 单集与其所属播客的组合
///
/// Owned by the episode store; the episode screen only renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeToPodcast {
    pub episode: Episode,
    pub podcast: Podcast,
}

impl EpisodeToPodcast {
    pub fn new(episode: Episode, podcast: Podcast) -> Self {
        Self { episode, podcast }
    }
}
