//! State Management
//!
//! The dashboard snapshot lives in a Leptos signal; the shared controller
//! writes to it through [`SignalSink`].

use insight_monitor::{DashboardAction, DashboardSink, DashboardState};
use leptos::*;

/// Applies dashboard transitions to a reactive signal
#[derive(Clone, Copy)]
pub struct SignalSink(pub RwSignal<DashboardState>);

impl SignalSink {
    pub fn new(state: RwSignal<DashboardState>) -> Self {
        Self(state)
    }
}

impl DashboardSink for SignalSink {
    /// A disposed signal (the page unmounted) rejects the update
    fn apply(&self, action: DashboardAction) -> bool {
        self.0.try_update(|state| state.apply(action)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_updates_signal() {
        let runtime = create_runtime();

        let state = create_rw_signal(DashboardState::default());
        let sink = SignalSink::new(state);

        assert!(sink.apply(DashboardAction::Succeed(Vec::new())));
        assert!(!state.get_untracked().loading);
        assert!(state.get_untracked().error.is_none());

        runtime.dispose();
    }

    #[test]
    fn test_disposed_signal_rejects_updates() {
        let runtime = create_runtime();

        let state = create_rw_signal(DashboardState::default());
        let sink = SignalSink::new(state);
        state.dispose();

        assert!(!sink.apply(DashboardAction::Fail("late".to_string())));

        runtime.dispose();
    }
}
