//! Chart Component
//!
//! Category pie chart drawn as inline SVG.

use insight_monitor::chart::layout;
use insight_monitor::ChartSlice;
use leptos::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 350.0;
const RADIUS: f64 = 120.0;
/// Labels sit just outside the pie
const LABEL_RADIUS: f64 = RADIUS + 14.0;

/// A wedge with everything the view needs, owned
struct WedgeView {
    path: String,
    color: &'static str,
    tooltip: String,
    label: String,
    label_x: f64,
    label_y: f64,
    anchor: &'static str,
}

fn wedge_views(slices: &[ChartSlice]) -> Vec<WedgeView> {
    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);

    layout(slices)
        .iter()
        .map(|wedge| {
            let (label_x, label_y) = wedge.label_anchor(cx, cy, LABEL_RADIUS);
            WedgeView {
                path: wedge.svg_path(cx, cy, RADIUS),
                color: wedge.slice.color,
                tooltip: wedge.tooltip(),
                label: wedge.label(),
                label_x,
                label_y,
                anchor: wedge.text_anchor(),
            }
        })
        .collect()
}

/// Pie chart of insight counts per category
#[component]
pub fn PieChart(slices: Vec<ChartSlice>) -> impl IntoView {
    let wedges = wedge_views(&slices);

    view! {
        <div class="pie-chart">
            <svg
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                width="100%"
                height=HEIGHT.to_string()
                role="img"
            >
                {wedges
                    .into_iter()
                    .map(|wedge| view! {
                        <g class="pie-wedge">
                            <path d=wedge.path fill=wedge.color stroke="#fff">
                                <title>{wedge.tooltip}</title>
                            </path>
                            <text
                                x=format!("{:.1}", wedge.label_x)
                                y=format!("{:.1}", wedge.label_y)
                                text-anchor=wedge.anchor
                                dominant-baseline="central"
                                fill=wedge.color
                            >
                                {wedge.label}
                            </text>
                        </g>
                    })
                    .collect_view()}
            </svg>

            <ChartLegend slices=slices />
        </div>
    }
}

/// Legend below the pie
#[component]
fn ChartLegend(slices: Vec<ChartSlice>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {slices
                .into_iter()
                .map(|slice| view! {
                    <li class="legend-item">
                        <span
                            class="legend-swatch"
                            style=format!("background-color: {}", slice.color)
                        />
                        <span class="legend-name">{slice.name}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}
