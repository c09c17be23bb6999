//! # ps-core
//!
//! Core domain models and ports for the podscreen episode screen.
//!
//! This crate contains pure domain data and port contracts without any
//! infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod podcast;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{EpisodeUri, PodcastUri};
pub use podcast::{Episode, EpisodeToPodcast, Podcast, PodcastFeed};
