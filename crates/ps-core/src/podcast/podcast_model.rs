use serde::{Deserialize, Serialize};

use crate::ids::PodcastUri;

/// A podcast (a series of episodes).
/// 播客（单集的集合）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub uri: PodcastUri,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl Podcast {
    pub fn new(uri: PodcastUri, title: impl Into<String>) -> Self {
        Self {
            uri,
            title: title.into(),
            description: None,
            author: None,
            image_url: None,
            copyright: None,
        }
    }
}
