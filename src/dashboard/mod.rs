//! Dashboard Controller
//!
//! Owns the transient view state of the dashboard and the one-shot fetch
//! that fills it.
//!
//! ## Flow
//!
//! 1. `mount` applies `StartLoading` and issues the single request
//! 2. the response becomes `Succeed(insights)` or `Fail(message)`
//! 3. both end with `loading = false`
//! 4. `dispose` aborts an in-flight request; later updates are dropped
//!
//! State lives behind a [`DashboardSink`]: [`DashboardStore`] on the
//! native side, a reactive signal in the browser.

mod controller;
mod state;
mod store;

pub use controller::{
    DashboardController, DashboardSink, InsightSource, LoadOutcome, FETCH_ERROR_MESSAGE,
};
pub use state::{ChartArea, DashboardAction, DashboardState, Feed, Layout, Screen};
pub use store::DashboardStore;
