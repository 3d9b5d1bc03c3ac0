//! Insight Card Component
//!
//! One competitor event in the feed.

use insight_monitor::{render, Insight};
use leptos::*;

/// Insight card component
#[component]
pub fn InsightCard(insight: Insight) -> impl IntoView {
    let card = render::InsightCard::new(&insight);
    let link = card.link;

    view! {
        <div class="insight-card">
            <h3>{card.title}</h3>

            <div class="meta">
                <span><strong>"Competitor:"</strong>" "{card.competitor}</span>
                <span><strong>"Found:"</strong>" "{card.found}</span>
            </div>

            <span class=card.badge_class>{card.badge_text}</span>

            <p>{card.summary}</p>

            <a
                href=link.href
                target=link.target
                rel=link.rel
                class="source-link"
            >
                {link.text}
            </a>
        </div>
    }
}
