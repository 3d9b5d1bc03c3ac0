//! Dashboard Page
//!
//! Insight feed and category chart. Fetches once on mount and cancels the
//! request if the page goes away first.

use insight_monitor::render::{CHART_HEADING, FEED_HEADING, NO_CHART_DATA_TEXT, NO_INSIGHTS_TEXT};
use insight_monitor::{
    ChartArea, DashboardController, DashboardState, Feed, Layout, LoadOutcome, Screen,
};
use leptos::*;
use std::rc::Rc;

use crate::api::{self, GlooInsightSource};
use crate::components::{InsightCard, Loading, PieChart};
use crate::state::SignalSink;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardState::default());
    let controller = Rc::new(DashboardController::new(
        GlooInsightSource::new(api::insights_endpoint()),
        SignalSink::new(state),
    ));

    // Fetch insights on mount
    let mounting = Rc::clone(&controller);
    create_effect(move |_| {
        let controller = Rc::clone(&mounting);
        spawn_local(async move {
            if let LoadOutcome::Failed(err) = controller.mount().await {
                web_sys::console::error_1(&format!("Fetch error: {}", err).into());
            }
        });
    });

    on_cleanup(move || controller.dispose());

    move || {
        state.with(|state| match state.screen() {
            Screen::Loading => view! { <Loading /> }.into_view(),
            Screen::Dashboard(layout) => dashboard_view(layout),
        })
    }
}

/// Feed and chart side by side; the error banner sits at the top of the feed
fn dashboard_view(layout: Layout<'_>) -> View {
    let banner = layout
        .banner
        .map(|message| view! { <div class="error-message">{message.to_string()}</div> });

    let feed = match layout.feed {
        Feed::Cards(insights) => insights
            .iter()
            .cloned()
            .map(|insight| view! { <InsightCard insight=insight /> })
            .collect_view(),
        Feed::NoInsights => view! { <p>{NO_INSIGHTS_TEXT}</p> }.into_view(),
        Feed::Blank => ().into_view(),
    };

    let chart = match layout.chart {
        ChartArea::Pie(slices) => view! { <PieChart slices=slices.to_vec() /> }.into_view(),
        ChartArea::NoData => view! { <p>{NO_CHART_DATA_TEXT}</p> }.into_view(),
    };

    view! {
        <div class="dashboard-container">
            <section class="insights-feed">
                <h2>{FEED_HEADING}</h2>
                {banner}
                {feed}
            </section>

            <aside class="insights-sidebar">
                <h2>{CHART_HEADING}</h2>
                <div class="chart-container">{chart}</div>
            </aside>
        </div>
    }
    .into_view()
}
