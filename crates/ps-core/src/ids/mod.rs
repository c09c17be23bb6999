//! ID type wrappers for type safety.

mod id_macro;
pub mod episode_uri;
pub mod podcast_uri;

pub use episode_uri::EpisodeUri;
pub use podcast_uri::PodcastUri;
