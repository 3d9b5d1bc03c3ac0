//! Terminal rendering
//!
//! Prints the same screen the browser shows: header, the insight feed and
//! the category breakdown as a legend with proportional bars.

use chrono::{Local, TimeZone, Utc};
use std::fmt::{self, Write};

use super::card::InsightCard;
use super::{
    CHART_HEADING, FEED_HEADING, HEADER_SUBTITLE, HEADER_TITLE, LOADING_TEXT, NO_CHART_DATA_TEXT,
    NO_INSIGHTS_TEXT,
};
use crate::chart::{layout, ChartSlice};
use crate::dashboard::{ChartArea, DashboardState, Feed, Layout, Screen};
use crate::model::Insight;

/// Terminal output options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// ANSI true-color swatches in the legend
    pub color: bool,
    /// Width of a 100% bar, in cells
    pub bar_width: usize,
    /// Show dates in UTC instead of the local timezone
    pub utc: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            color: true,
            bar_width: 30,
            utc: false,
        }
    }
}

/// Render a dashboard snapshot
pub fn render_screen(state: &DashboardState, options: &TextOptions) -> String {
    if options.utc {
        render_screen_in(state, options, &Utc)
    } else {
        render_screen_in(state, options, &Local)
    }
}

/// Render a dashboard snapshot with dates in `tz`
pub fn render_screen_in<Tz>(state: &DashboardState, options: &TextOptions, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();

    let _ = writeln!(out, "{}", HEADER_TITLE);
    let _ = writeln!(out, "{}", HEADER_SUBTITLE);
    let _ = writeln!(out);

    match state.screen() {
        Screen::Loading => {
            let _ = writeln!(out, "{}", LOADING_TEXT);
        }
        Screen::Dashboard(layout) => write_layout(&mut out, &layout, options, tz),
    }

    out
}

fn write_layout<Tz>(out: &mut String, layout: &Layout<'_>, options: &TextOptions, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    write_heading(out, FEED_HEADING);

    if let Some(message) = layout.banner {
        let _ = writeln!(out, "[!] {}", message);
        let _ = writeln!(out);
    }

    match layout.feed {
        Feed::Cards(insights) => write_cards(out, insights, tz),
        Feed::NoInsights => {
            let _ = writeln!(out, "{}", NO_INSIGHTS_TEXT);
            let _ = writeln!(out);
        }
        Feed::Blank => {}
    }

    write_heading(out, CHART_HEADING);

    match layout.chart {
        ChartArea::Pie(slices) => write_legend(out, slices, options),
        ChartArea::NoData => {
            let _ = writeln!(out, "{}", NO_CHART_DATA_TEXT);
        }
    }
}

fn write_heading(out: &mut String, heading: &str) {
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", "─".repeat(heading.chars().count()));
}

fn write_cards<Tz>(out: &mut String, insights: &[Insight], tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    for insight in insights {
        let card = InsightCard::in_timezone(insight, tz);
        let _ = writeln!(out, "  {}", card.title);
        let _ = writeln!(
            out,
            "  Competitor: {}  |  Found: {}",
            card.competitor, card.found
        );
        let _ = writeln!(out, "  [{}]", card.badge_text);
        if !card.summary.is_empty() {
            let _ = writeln!(out, "  {}", card.summary);
        }
        let _ = writeln!(out, "  {}: {}", card.link.text, card.link.href);
        let _ = writeln!(out);
    }
}

fn write_legend(out: &mut String, slices: &[ChartSlice], options: &TextOptions) {
    let wedges = layout(slices);
    let label_width = wedges
        .iter()
        .map(|w| w.label().chars().count())
        .max()
        .unwrap_or(0);

    for wedge in &wedges {
        let cells = ((wedge.fraction * options.bar_width as f64).round() as usize).max(1);
        let swatch = if options.color {
            swatch(wedge.slice.color)
        } else {
            "■".to_string()
        };

        let _ = writeln!(
            out,
            "  {} {:<width$}  {:<bar$}  {}",
            swatch,
            wedge.label(),
            "█".repeat(cells),
            wedge.slice.value,
            width = label_width,
            bar = options.bar_width,
        );
    }
}

fn swatch(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m■\x1b[0m", r, g, b),
        None => "■".to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
