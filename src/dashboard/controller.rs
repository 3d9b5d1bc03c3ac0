//! One-shot fetch controller

use async_trait::async_trait;
use futures_util::future::{AbortHandle, Abortable};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::state::DashboardAction;
use crate::error::{FetchError, FetchResult};
use crate::model::Insight;

/// The only message users see when the fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Check the console for details.";

/// Where insights come from.
///
/// Futures are not required to be `Send` so that browser fetches can
/// implement this too.
#[async_trait(?Send)]
pub trait InsightSource {
    /// Issue the request and decode the response array
    async fn fetch_insights(&self) -> FetchResult<Vec<Insight>>;

    /// Cancel the request at the transport level, if the source can
    fn cancel(&self) {}
}

/// Receives state transitions.
///
/// Returns `false` when the transition was dropped because the view that
/// owns the state is gone.
pub trait DashboardSink {
    fn apply(&self, action: DashboardAction) -> bool;
}

impl<T: DashboardSink + ?Sized> DashboardSink for Arc<T> {
    fn apply(&self, action: DashboardAction) -> bool {
        (**self).apply(action)
    }
}

impl<T: DashboardSink + ?Sized> DashboardSink for &T {
    fn apply(&self, action: DashboardAction) -> bool {
        (**self).apply(action)
    }
}

/// How a mount ended
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Fetched this many insights
    Loaded(usize),
    /// Fetch failed; the error state was applied
    Failed(FetchError),
    /// Disposed before the fetch completed; state untouched
    Cancelled,
    /// `mount` already ran for this controller
    AlreadyMounted,
}

/// Drives the dashboard through its single fetch
pub struct DashboardController<S, K> {
    source: S,
    sink: K,
    mounted: AtomicBool,
    disposed: AtomicBool,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl<S, K> DashboardController<S, K>
where
    S: InsightSource,
    K: DashboardSink,
{
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            mounted: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
            in_flight: Mutex::new(None),
        }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Run the fetch. Only the first call does anything.
    pub async fn mount(&self) -> LoadOutcome {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Dashboard already mounted, skipping fetch");
            return LoadOutcome::AlreadyMounted;
        }
        if self.is_disposed() {
            return LoadOutcome::Cancelled;
        }

        self.dispatch(DashboardAction::StartLoading);

        let (handle, registration) = AbortHandle::new_pair();
        *self.in_flight.lock() = Some(handle);
        let fetched = Abortable::new(self.source.fetch_insights(), registration).await;
        self.in_flight.lock().take();

        let result = match fetched {
            Ok(result) => result,
            Err(_aborted) => {
                tracing::debug!("Fetch aborted, dashboard disposed");
                return LoadOutcome::Cancelled;
            }
        };

        match result {
            Ok(insights) => {
                let count = insights.len();
                if !self.dispatch(DashboardAction::Succeed(insights)) {
                    return LoadOutcome::Cancelled;
                }
                tracing::info!(count, "Loaded insights");
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "Fetch error");
                if !self.dispatch(DashboardAction::Fail(FETCH_ERROR_MESSAGE.to_string())) {
                    return LoadOutcome::Cancelled;
                }
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Tear down: abort the in-flight request and drop all later updates
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.in_flight.lock().take() {
            tracing::debug!("Aborting in-flight fetch");
            handle.abort();
            self.source.cancel();
        }
    }

    fn dispatch(&self, action: DashboardAction) -> bool {
        if self.is_disposed() {
            tracing::debug!(action = action.name(), "Dropped update after dispose");
            return false;
        }
        self.sink.apply(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardStore;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use tokio::sync::oneshot;

    struct StaticSource {
        response: FetchResult<Vec<Insight>>,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(response: FetchResult<Vec<Insight>>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl InsightSource for StaticSource {
        async fn fetch_insights(&self) -> FetchResult<Vec<Insight>> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    /// Resolves when the test sends on the channel
    struct ChannelSource {
        rx: RefCell<Option<oneshot::Receiver<Vec<Insight>>>>,
        cancelled: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl InsightSource for ChannelSource {
        async fn fetch_insights(&self) -> FetchResult<Vec<Insight>> {
            let rx = self.rx.borrow_mut().take().expect("fetched twice");
            rx.await
                .map_err(|_| FetchError::Transport("sender dropped".to_string()))
        }

        fn cancel(&self) {
            self.cancelled.set(true);
        }
    }

    fn sample() -> Vec<Insight> {
        vec![
            Insight::from_value(&json!({"id": 1, "category": "RELEASE", "category_display": "Release"})),
            Insight::from_value(&json!({"id": 2, "category": "NEWS", "category_display": "Release"})),
        ]
    }

    #[tokio::test]
    async fn test_mount_success() {
        let store = DashboardStore::new();
        let controller = DashboardController::new(StaticSource::new(Ok(sample())), &store);

        assert_eq!(controller.mount().await, LoadOutcome::Loaded(2));

        let state = store.snapshot();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.insights, sample());
        assert_eq!(state.chart_data.len(), 1);
        assert_eq!(state.chart_data[0].value, 2);
    }

    #[tokio::test]
    async fn test_mount_failure_sets_fixed_message() {
        let store = DashboardStore::new();
        let err = FetchError::Transport("connection refused".to_string());
        let controller = DashboardController::new(StaticSource::new(Err(err.clone())), &store);

        assert_eq!(controller.mount().await, LoadOutcome::Failed(err));

        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.insights.is_empty());
        assert!(state.chart_data.is_empty());
    }

    #[tokio::test]
    async fn test_mount_runs_once() {
        let store = DashboardStore::new();
        let controller = DashboardController::new(StaticSource::new(Ok(sample())), &store);

        assert_eq!(controller.mount().await, LoadOutcome::Loaded(2));
        assert_eq!(controller.mount().await, LoadOutcome::AlreadyMounted);
        assert_eq!(controller.source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_dispose_before_mount_skips_fetch() {
        let store = DashboardStore::new();
        let controller = DashboardController::new(StaticSource::new(Ok(sample())), &store);

        controller.dispose();
        assert_eq!(controller.mount().await, LoadOutcome::Cancelled);
        assert_eq!(controller.source.calls.get(), 0);
        assert_eq!(store.snapshot(), Default::default());
    }

    #[tokio::test]
    async fn test_dispose_mid_flight_ignores_late_result() {
        let (tx, rx) = oneshot::channel();
        let store = DashboardStore::new();
        let source = ChannelSource {
            rx: RefCell::new(Some(rx)),
            cancelled: Cell::new(false),
        };
        let controller = DashboardController::new(source, &store);

        let (outcome, _) = tokio::join!(controller.mount(), async {
            tokio::task::yield_now().await;
            controller.dispose();
            let _ = tx.send(sample());
        });

        assert_eq!(outcome, LoadOutcome::Cancelled);
        assert!(controller.is_disposed());
        assert!(controller.source.cancelled.get());

        // StartLoading landed, nothing after it
        let state = store.snapshot();
        assert!(state.loading);
        assert!(state.insights.is_empty());
    }

    #[tokio::test]
    async fn test_closed_sink_reports_cancelled() {
        let store = DashboardStore::new();
        let controller = DashboardController::new(StaticSource::new(Ok(sample())), &store);

        store.close();
        assert_eq!(controller.mount().await, LoadOutcome::Cancelled);
        assert!(store.snapshot().insights.is_empty());
    }
}
