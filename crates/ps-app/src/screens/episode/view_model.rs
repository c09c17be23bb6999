use std::sync::Arc;

use futures::stream::{self, StreamExt};
use ps_core::ports::{EpisodeStorePort, NavigationArgsPort, PodcastsRepositoryPort};
use ps_core::{Episode, EpisodeUri};
use tracing::{debug, info};

use super::{EpisodeScreen, EpisodeScreenUiState};
use crate::scope::ViewModelScope;
use crate::shared_state::{SharedState, SharingStarted, StateSubscription};

/// Collaborators of the episode screen, passed in by the caller.
/// 单集屏幕的依赖（由调用方显式传入）
#[derive(Clone)]
pub struct EpisodeScreenDeps {
    pub podcasts_repository: Arc<dyn PodcastsRepositoryPort>,
    pub episode_store: Arc<dyn EpisodeStorePort>,
}

/// State holder of the episode screen.
///
/// ## Behavior / 行为
/// - Reads the episode URI from the navigation arguments once
/// - Launches one `update_podcasts(false)` on construction; its failure is
///   reported to the scope, not handled here
/// - Projects the episode lookup into [`EpisodeScreenUiState`], shared among
///   all observers and kept alive for the sharing policy's grace period
pub struct EpisodeScreenViewModel {
    episode_uri: Option<EpisodeUri>,
    ui_state: SharedState<EpisodeScreenUiState>,
    scope: ViewModelScope,
}

impl EpisodeScreenViewModel {
    pub fn new(
        args: &dyn NavigationArgsPort,
        deps: EpisodeScreenDeps,
        scope: ViewModelScope,
        sharing: SharingStarted,
    ) -> Self {
        let EpisodeScreenDeps {
            podcasts_repository,
            episode_store,
        } = deps;

        let episode_uri = args.get(EpisodeScreen::PARAMETER_NAME).map(EpisodeUri::from);
        info!(episode_uri = ?episode_uri, "Creating episode screen");

        let lookup_uri = episode_uri.clone();
        let ui_state = SharedState::new(
            "episode_screen.ui_state",
            scope.clone(),
            sharing,
            EpisodeScreenUiState::Loading,
            move || {
                let lookup = match &lookup_uri {
                    Some(uri) => episode_store.episode_and_podcast_with_uri(uri),
                    None => stream::once(async { None }).boxed(),
                };
                lookup.map(EpisodeScreenUiState::from).boxed()
            },
        );

        scope.launch("podcasts.update", async move {
            podcasts_repository.update_podcasts(false).await
        });

        Self {
            episode_uri,
            ui_state,
            scope,
        }
    }

    /// Observe the screen state.
    ///
    /// A fresh observer sees `Loading` first unless the state is already
    /// shared with another observer or still within its grace period.
    pub fn ui_state(&self) -> StateSubscription<EpisodeScreenUiState> {
        self.ui_state.subscribe()
    }

    pub fn current_state(&self) -> EpisodeScreenUiState {
        self.ui_state.value()
    }

    pub fn episode_uri(&self) -> Option<&EpisodeUri> {
        self.episode_uri.as_ref()
    }

    /// Add `episode` to a playlist.
    ///
    /// Currently has no effect.
    pub fn add_play_list(&self, episode: &Episode) {
        debug!(episode_uri = %episode.uri, "add_play_list is not supported yet");
    }

    /// Cancel every task of this screen (upstream lookup, grace timers,
    /// background refresh).
    pub fn clear(&self) {
        if !self.scope.is_cancelled() {
            debug!(episode_uri = ?self.episode_uri, "Clearing episode screen");
            self.scope.cancel();
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.scope.is_cancelled()
    }
}

impl Drop for EpisodeScreenViewModel {
    fn drop(&mut self) {
        self.clear();
    }
}
