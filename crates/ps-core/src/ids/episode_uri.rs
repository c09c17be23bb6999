use serde::{Deserialize, Serialize};

use super::id_macro::impl_uri;

/// Episode identifier, usually the episode's enclosure or guid URI.
/// 单集标识（通常为单集的 URI）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeUri(String);

impl_uri!(EpisodeUri);
