//! Shared screen state
//! 共享的屏幕状态
//!
//! A `SharedState` caches the latest value of an upstream stream and shares
//! it among every observer of a screen. The upstream runs only while it is
//! observed, plus a grace period after the last observer leaves so that a
//! quick detach/reattach (a configuration change, a window being re-created)
//! keeps the current value instead of starting over from the initial one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::scope::ViewModelScope;

/// When the upstream of a [`SharedState`] runs.
/// 上游的启动/停止策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingStarted {
    /// Start with the first observer; stop `stop_timeout` after the last one
    /// leaves and reset the cache to the initial value.
    WhileSubscribed { stop_timeout: Duration },

    /// Start with the first observer and never stop (until the scope is
    /// cancelled).
    Lazily,
}

impl SharingStarted {
    pub const DEFAULT_STOP_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn while_subscribed(stop_timeout: Duration) -> Self {
        Self::WhileSubscribed { stop_timeout }
    }

    fn stop_timeout(&self) -> Option<Duration> {
        match self {
            Self::WhileSubscribed { stop_timeout } => Some(*stop_timeout),
            Self::Lazily => None,
        }
    }
}

impl Default for SharingStarted {
    fn default() -> Self {
        Self::while_subscribed(Self::DEFAULT_STOP_TIMEOUT)
    }
}

type UpstreamFactory<T> = Box<dyn Fn() -> BoxStream<'static, T> + Send + Sync>;

#[derive(Default)]
struct Control {
    subscribers: usize,
    /// Bumped on every subscribe; a stop timer only fires for its own
    /// generation.
    generation: u64,
    /// Bumped on every start and stop; a collector only writes the cache
    /// while its session is current.
    session: u64,
    collector: Option<AbortHandle>,
    stop_timer: Option<AbortHandle>,
}

struct Shared<T> {
    name: &'static str,
    scope: ViewModelScope,
    started: SharingStarted,
    initial: T,
    cache: watch::Sender<T>,
    upstream: UpstreamFactory<T>,
    control: Mutex<Control>,
}

/// State shared among all observers of one screen.
pub struct SharedState<T> {
    shared: Arc<Shared<T>>,
}

impl<T> std::fmt::Debug for SharedState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedState")
            .field("name", &self.shared.name)
            .field("started", &self.shared.started)
            .finish()
    }
}

impl<T> SharedState<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a shared state.
    ///
    /// `upstream` is called each time the state (re)starts and must return a
    /// fresh stream. Nothing runs until the first [`subscribe`](Self::subscribe).
    pub fn new<F>(
        name: &'static str,
        scope: ViewModelScope,
        started: SharingStarted,
        initial: T,
        upstream: F,
    ) -> Self
    where
        F: Fn() -> BoxStream<'static, T> + Send + Sync + 'static,
    {
        let (cache, _) = watch::channel(initial.clone());

        Self {
            shared: Arc::new(Shared {
                name,
                scope,
                started,
                initial,
                cache,
                upstream: Box::new(upstream),
                control: Mutex::new(Control::default()),
            }),
        }
    }

    /// Attach an observer, starting the upstream if it is not running.
    pub fn subscribe(&self) -> StateSubscription<T> {
        let mut control = self.shared.lock_control();
        control.subscribers += 1;
        control.generation += 1;

        if let Some(timer) = control.stop_timer.take() {
            timer.abort();
        }

        let mut rx = self.shared.cache.subscribe();
        let first = rx.borrow_and_update().clone();

        if control.collector.is_none() && !self.shared.scope.is_cancelled() {
            control.session += 1;
            control.collector = Some(self.shared.start_collector(control.session));
        }

        debug!(
            state = self.shared.name,
            subscribers = control.subscribers,
            "Observer attached"
        );

        StateSubscription {
            rx,
            first: Some(first),
            shared: Arc::clone(&self.shared),
        }
    }

    /// The cached value.
    pub fn value(&self) -> T {
        self.shared.cache.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.lock_control().subscribers
    }

    /// Whether the upstream has been started and not yet torn down.
    pub fn is_active(&self) -> bool {
        self.shared.lock_control().collector.is_some()
    }
}

impl<T> Shared<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn lock_control(&self) -> MutexGuard<'_, Control> {
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start_collector(self: &Arc<Self>, session: u64) -> AbortHandle {
        let mut upstream = (self.upstream)();
        let weak: Weak<Self> = Arc::downgrade(self);
        let name = self.name;

        let task = self.scope.spawn(async move {
            debug!(state = name, "Upstream started");
            while let Some(value) = upstream.next().await {
                let Some(shared) = weak.upgrade() else {
                    break;
                };
                let control = shared.lock_control();
                if control.session != session {
                    break;
                }
                shared.cache.send_replace(value);
            }
            debug!(state = name, "Upstream completed");
        });

        task.abort_handle()
    }

    fn release(self: &Arc<Self>) {
        let mut control = self.lock_control();
        control.subscribers = control.subscribers.saturating_sub(1);
        debug!(
            state = self.name,
            subscribers = control.subscribers,
            "Observer detached"
        );

        if control.subscribers > 0 {
            return;
        }

        let Some(stop_timeout) = self.started.stop_timeout() else {
            return;
        };

        if stop_timeout.is_zero() || self.scope.is_cancelled() {
            self.stop(&mut control);
            return;
        }

        let generation = control.generation;
        let weak = Arc::downgrade(self);
        let timer = self.scope.spawn(async move {
            tokio::time::sleep(stop_timeout).await;

            if let Some(shared) = weak.upgrade() {
                let mut control = shared.lock_control();
                if control.subscribers == 0 && control.generation == generation {
                    shared.stop(&mut control);
                }
            }
        });

        control.stop_timer = Some(timer.abort_handle());
    }

    fn stop(&self, control: &mut Control) {
        control.session += 1;
        control.stop_timer = None;
        if let Some(collector) = control.collector.take() {
            collector.abort();
        }
        self.cache.send_replace(self.initial.clone());

        debug!(state = self.name, "Upstream stopped, cache reset");
    }
}

/// One observer of a [`SharedState`].
///
/// The first [`next`](Self::next) yields the value cached when the observer
/// attached; later calls wait for the next change and yield the latest value.
/// Intermediate values may be skipped. Dropping the subscription detaches
/// the observer.
pub struct StateSubscription<T>
where
    T: Clone + Send + Sync + 'static,
{
    rx: watch::Receiver<T>,
    first: Option<T>,
    shared: Arc<Shared<T>>,
}

impl<T> StateSubscription<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub async fn next(&mut self) -> Option<T> {
        if let Some(first) = self.first.take() {
            return Some(first);
        }

        self.rx.changed().await.ok()?;
        let value = self.rx.borrow_and_update().clone();
        Some(value)
    }

    /// The latest cached value, without waiting.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    pub fn into_stream(self) -> BoxStream<'static, T> {
        stream::unfold(self, |mut subscription| async move {
            let value = subscription.next().await?;
            Some((value, subscription))
        })
        .boxed()
    }
}

impl<T> Drop for StateSubscription<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.shared.release();
    }
}
