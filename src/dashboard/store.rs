//! Thread-safe state holder for native front ends

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use super::controller::DashboardSink;
use super::state::{DashboardAction, DashboardState};

/// Dashboard state behind a lock.
///
/// Once closed, further transitions are dropped without error.
#[derive(Debug, Default)]
pub struct DashboardStore {
    state: RwLock<DashboardState>,
    closed: AtomicBool,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.read().clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&*self.state.read())
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl DashboardSink for DashboardStore {
    fn apply(&self, action: DashboardAction) -> bool {
        if self.is_closed() {
            tracing::debug!(action = action.name(), "Store closed, dropping update");
            return false;
        }
        tracing::trace!(action = action.name(), "Applying dashboard action");
        self.state.write().apply(action);
        true
    }
}
