use ps_core::ports::NavigationArgsPort;
use tokio::sync::mpsc;

use super::{EpisodeScreenDeps, EpisodeScreenViewModel};
use crate::scope::{ScopeError, TaskFailure, ViewModelScope};
use crate::shared_state::SharingStarted;

/// Creates episode screen view models from navigation arguments.
/// 根据导航参数创建单集屏幕视图模型
pub struct EpisodeScreenViewModelFactory {
    deps: EpisodeScreenDeps,
    sharing: SharingStarted,
    failures: Option<mpsc::UnboundedSender<TaskFailure>>,
}

impl EpisodeScreenViewModelFactory {
    pub fn new(deps: EpisodeScreenDeps, sharing: SharingStarted) -> Self {
        Self {
            deps,
            sharing,
            failures: None,
        }
    }

    /// Report background task failures of created view models to `sink`.
    pub fn with_failure_sink(mut self, sink: mpsc::UnboundedSender<TaskFailure>) -> Self {
        self.failures = Some(sink);
        self
    }

    /// Create a view model on the current tokio runtime.
    pub fn create(
        &self,
        args: &dyn NavigationArgsPort,
    ) -> Result<EpisodeScreenViewModel, ScopeError> {
        let scope = ViewModelScope::current()?;
        Ok(self.create_in(args, scope))
    }

    /// Create a view model in an explicit scope.
    pub fn create_in(
        &self,
        args: &dyn NavigationArgsPort,
        scope: ViewModelScope,
    ) -> EpisodeScreenViewModel {
        let scope = match &self.failures {
            Some(sink) => scope.with_failure_sink(sink.clone()),
            None => scope,
        };

        EpisodeScreenViewModel::new(args, self.deps.clone(), scope, self.sharing)
    }
}
