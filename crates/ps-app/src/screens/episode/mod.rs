//! Episode screen
//! 单集详情屏幕
//!
//! [Navigation: episodeUri]
//!         ↓
//! EpisodeScreenViewModel ──launch──→ PodcastsRepositoryPort::update_podcasts(false)
//!         ↓
//! EpisodeStorePort::episode_and_podcast_with_uri
//!         ↓
//! SharedState<EpisodeScreenUiState>  → UI

mod factory;
mod ui_state;
mod view_model;

pub use factory::EpisodeScreenViewModelFactory;
pub use ui_state::EpisodeScreenUiState;
pub use view_model::{EpisodeScreenDeps, EpisodeScreenViewModel};

/// Navigation contract of the episode screen.
pub struct EpisodeScreen;

impl EpisodeScreen {
    /// Name of the navigation parameter carrying the episode URI.
    pub const PARAMETER_NAME: &'static str = "episodeUri";
}
