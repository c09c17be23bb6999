//! Podcast domain models
//! 播客领域模型

mod episode;
mod episode_to_podcast;
mod feed;
mod podcast_model;

pub use episode::Episode;
pub use episode_to_podcast::EpisodeToPodcast;
pub use feed::PodcastFeed;
pub use podcast_model::Podcast;

#[cfg(test)]
pub(crate) mod fixtures;
