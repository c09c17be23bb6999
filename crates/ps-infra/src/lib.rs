pub mod feed;
pub mod repository;
pub mod saved_state;
pub mod store;

pub use feed::{JsonFeedSource, StaticFeedSource};
pub use repository::CatalogPodcastsRepository;
pub use saved_state::SavedStateHandle;
pub use store::InMemoryEpisodeStore;

#[cfg(test)]
pub(crate) mod fixtures;
