//! podscreen application layer
//!
//! Screen state holders and the task/sharing primitives they are built on.

pub mod scope;
pub mod screens;
pub mod shared_state;

pub use scope::{ScopeError, TaskFailure, ViewModelScope};
pub use screens::episode::{
    EpisodeScreen, EpisodeScreenDeps, EpisodeScreenUiState, EpisodeScreenViewModel,
    EpisodeScreenViewModelFactory,
};
pub use shared_state::{SharedState, SharingStarted, StateSubscription};
