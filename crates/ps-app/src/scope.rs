//! View-model task scope
//! 视图模型任务作用域
//!
//! Every task a screen state holder starts runs inside its scope. Clearing
//! the scope cancels all of them at their next suspension point.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error("no tokio runtime is available to host the view-model scope")]
    NoRuntime,
}

/// A failed task launched in a scope.
/// 作用域中失败的任务
#[derive(Debug)]
pub struct TaskFailure {
    pub task: &'static str,
    pub error: anyhow::Error,
}

/// Task scope owned by one view model.
///
/// ## Behavior / 行为
/// - `spawn` runs a future until it completes or the scope is cancelled
/// - `launch` runs a fallible future; failures are not returned to the
///   launcher but reported to the scope's supervisor (log + failure sink)
/// - Clones share the same cancellation token
#[derive(Clone)]
pub struct ViewModelScope {
    handle: Handle,
    token: CancellationToken,
    failures: Option<mpsc::UnboundedSender<TaskFailure>>,
}

impl std::fmt::Debug for ViewModelScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModelScope")
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

impl ViewModelScope {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            token: CancellationToken::new(),
            failures: None,
        }
    }

    /// Create a scope on the runtime the caller is running in.
    pub fn current() -> Result<Self, ScopeError> {
        let handle = Handle::try_current().map_err(|_| ScopeError::NoRuntime)?;
        Ok(Self::new(handle))
    }

    /// Forward failures of launched tasks to `sink`.
    pub fn with_failure_sink(mut self, sink: mpsc::UnboundedSender<TaskFailure>) -> Self {
        self.failures = Some(sink);
        self
    }

    /// Spawn `future` in this scope.
    ///
    /// Resolves to `None` when the scope was cancelled before `future`
    /// completed.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<Option<F::Output>>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let token = self.token.clone();
        self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                output = future => Some(output),
            }
        })
    }

    /// Launch a fallible background task.
    ///
    /// An `Err` is logged and sent to the failure sink, if any.
    pub fn launch<F>(&self, task: &'static str, future: F) -> JoinHandle<Option<()>>
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let failures = self.failures.clone();
        let span = tracing::info_span!("scope.launch", task);

        self.spawn(
            async move {
                if let Err(err) = future.await {
                    error!(error = %err, "Background task failed");
                    if let Some(failures) = failures {
                        let _ = failures.send(TaskFailure { task, error: err });
                    }
                }
            }
            .instrument(span),
        )
    }

    /// Cancel every task of this scope.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawn_returns_output_when_not_cancelled() {
        let scope = ViewModelScope::current().unwrap();

        let output = scope.spawn(async { 7 }).await.unwrap();

        assert_eq!(output, Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_pending_tasks() {
        let scope = ViewModelScope::current().unwrap();
        let task = scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            "finished"
        });

        scope.cancel();

        assert_eq!(task.await.unwrap(), None);
        assert!(scope.is_cancelled());
    }

    #[tokio::test]
    async fn test_launch_reports_failure_to_sink() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scope = ViewModelScope::current().unwrap().with_failure_sink(tx);

        scope
            .launch("refresh", async { Err(anyhow::anyhow!("offline")) })
            .await
            .unwrap();

        let failure = rx.recv().await.expect("failure should be reported");
        assert_eq!(failure.task, "refresh");
        assert_eq!(failure.error.to_string(), "offline");
    }

    #[tokio::test]
    async fn test_launch_success_reports_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scope = ViewModelScope::current().unwrap().with_failure_sink(tx);

        scope.launch("refresh", async { Ok(()) }).await.unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_current_without_runtime_fails() {
        let err = ViewModelScope::current().unwrap_err();
        assert!(matches!(err, ScopeError::NoRuntime));
    }
}
