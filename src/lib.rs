//! podscreen: the episode screen of a podcast player, headless.
//!
//! Wires the in-process adapters to the episode screen view model and
//! renders the screen state to stdout.

pub mod bootstrap;
pub mod cli;

use std::time::Duration;

use ps_app::{EpisodeScreen, EpisodeScreenUiState, TaskFailure};
use ps_core::AppConfig;
use ps_infra::SavedStateHandle;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Render one screen state as a line of text.
pub fn render(state: &EpisodeScreenUiState) -> String {
    match state {
        EpisodeScreenUiState::Loading => "Loading…".to_string(),
        EpisodeScreenUiState::Error => "Episode not available".to_string(),
        EpisodeScreenUiState::Ready(record) => format!(
            "{} - {} ({})",
            record.episode.title,
            record.podcast.title,
            record.episode.published.format("%Y-%m-%d")
        ),
    }
}

/// Open the episode screen for `episode_uri` and print its states until it
/// is ready or `settle` passes without a new state.
pub async fn run(
    config: AppConfig,
    episode_uri: Option<String>,
    settle: Duration,
) -> anyhow::Result<Option<EpisodeScreenUiState>> {
    let (failure_tx, mut failures) = mpsc::unbounded_channel::<TaskFailure>();
    let runtime = bootstrap::wiring::wire(&config);
    let factory = runtime.episode_screen.with_failure_sink(failure_tx);

    let mut args = SavedStateHandle::new();
    if let Some(uri) = episode_uri {
        args.set(EpisodeScreen::PARAMETER_NAME, uri);
    }

    let view_model = factory.create(&args)?;
    let mut states = view_model.ui_state();
    let mut last = None;

    while let Ok(Some(state)) = tokio::time::timeout(settle, states.next()).await {
        println!("{}", render(&state));
        let ready = matches!(state, EpisodeScreenUiState::Ready(_));
        last = Some(state);
        if ready {
            break;
        }
    }

    while let Ok(failure) = failures.try_recv() {
        warn!(task = failure.task, error = %failure.error, "Background task failed");
    }

    info!(
        podcasts = runtime.store.podcast_count(),
        episodes = runtime.store.episode_count(),
        "Episode screen closed"
    );

    Ok(last)
}
