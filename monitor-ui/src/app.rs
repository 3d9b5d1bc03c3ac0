//! App Root Component

use insight_monitor::render::{HEADER_SUBTITLE, HEADER_TITLE};
use leptos::*;

use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <header class="header">
                <h1>{HEADER_TITLE}</h1>
                <p>{HEADER_SUBTITLE}</p>
            </header>

            <main>
                <Dashboard />
            </main>
        </div>
    }
}
