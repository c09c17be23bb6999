use ps_core::EpisodeToPodcast;

/// What the episode screen renders.
/// 单集屏幕的 UI 状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeScreenUiState {
    /// Nothing emitted by the lookup yet.
    Loading,
    /// The episode (or its podcast) does not exist, or no episode was given.
    Error,
    Ready(EpisodeToPodcast),
}

impl EpisodeScreenUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn record(&self) -> Option<&EpisodeToPodcast> {
        match self {
            Self::Ready(record) => Some(record),
            Self::Loading | Self::Error => None,
        }
    }
}

impl From<Option<EpisodeToPodcast>> for EpisodeScreenUiState {
    fn from(lookup: Option<EpisodeToPodcast>) -> Self {
        match lookup {
            Some(record) => Self::Ready(record),
            None => Self::Error,
        }
    }
}
