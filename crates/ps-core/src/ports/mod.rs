//! Port interfaces for the application layer
//!
//! Ports define the contract between the episode screen (application layer)
//! and infrastructure implementations. The view model receives every
//! collaborator through its constructor; there is no global dependency graph.
//!
//! ## Port Placement Guidelines
//!
//! A port lives here when it represents a capability the application layer
//! depends on and that the infrastructure layer implements.

pub mod episode_store;
pub mod errors;
pub mod navigation;
pub mod podcast_feed;
pub mod podcasts_repository;

pub use episode_store::{EpisodeLookupStream, EpisodeStorePort};
pub use errors::FeedSourceError;
pub use navigation::NavigationArgsPort;
pub use podcast_feed::PodcastFeedPort;
pub use podcasts_repository::PodcastsRepositoryPort;

#[cfg(test)]
pub(crate) mod tests;
