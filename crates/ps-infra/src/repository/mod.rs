mod podcasts_repository;

pub use podcasts_repository::CatalogPodcastsRepository;
