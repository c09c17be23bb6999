use serde::{Deserialize, Serialize};

use super::id_macro::impl_uri;

/// Podcast identifier (the feed URI).
/// 播客标识（订阅源 URI）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PodcastUri(String);

impl_uri!(PodcastUri);
