//! Episode store port
//!
//! Reactive lookup of an episode together with its podcast.

use futures::stream::BoxStream;

use crate::ids::EpisodeUri;
use crate::podcast::EpisodeToPodcast;

/// Stream of lookup results; `None` means the record does not exist (yet).
pub type EpisodeLookupStream = BoxStream<'static, Option<EpisodeToPodcast>>;

pub trait EpisodeStorePort: Send + Sync {
    /// Observe the episode with `uri` and its parent podcast.
    ///
    /// The stream emits the current lookup result first and then a new value
    /// each time the record changes. It never fails: a missing episode or a
    /// missing parent podcast is reported as `None`.
    fn episode_and_podcast_with_uri(&self, uri: &EpisodeUri) -> EpisodeLookupStream;
}
