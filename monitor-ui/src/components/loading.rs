//! Loading Component

use insight_monitor::render::LOADING_TEXT;
use leptos::*;

/// Shown alone while the insights request is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            <span>{LOADING_TEXT}</span>
        </div>
    }
}
