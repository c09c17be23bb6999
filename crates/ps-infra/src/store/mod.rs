mod episode_store;

pub use episode_store::InMemoryEpisodeStore;
