//! Insight card view-model

use chrono::{Local, TimeZone};
use std::fmt;

use super::date::format_event_date_in;
use crate::model::Insight;

pub const SOURCE_LINK_TEXT: &str = "View Source";

/// Replacement target for links that could run script in the page
const BLOCKED_HREF: &str = "about:blank";

const BLOCKED_SCHEMES: [&str; 3] = ["javascript", "vbscript", "data"];

/// Outbound link to the insight's source.
///
/// Opens in a new browsing context with `noopener noreferrer`, so the
/// opened page gets no handle back to the dashboard window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
    pub text: &'static str,
}

impl SourceLink {
    pub fn new(url: &str) -> Self {
        Self {
            href: safe_href(url),
            target: "_blank",
            rel: "noopener noreferrer",
            text: SOURCE_LINK_TEXT,
        }
    }
}

/// Everything one card displays, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightCard {
    pub title: String,
    pub competitor: String,
    pub found: String,
    pub badge_class: String,
    pub badge_text: String,
    pub summary: String,
    pub link: SourceLink,
}

impl InsightCard {
    /// Card with the date shown in the local timezone
    pub fn new(insight: &Insight) -> Self {
        Self::in_timezone(insight, &Local)
    }

    pub fn in_timezone<Tz>(insight: &Insight, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            title: insight.title.clone(),
            competitor: insight.competitor_name.clone(),
            found: format_event_date_in(&insight.event_date, tz),
            badge_class: badge_class(&insight.category),
            badge_text: insight.category_display.clone(),
            summary: insight.summary.clone(),
            link: SourceLink::new(&insight.source_url),
        }
    }
}

/// `category-badge category-<code>`, with the code reduced to one CSS class
/// token (anything outside `[A-Za-z0-9_-]` becomes `-`)
pub fn badge_class(code: &str) -> String {
    let token: String = code
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("category-badge category-{}", token)
}

/// Link target for a source URL. Script-capable schemes are blocked;
/// everything else passes through trimmed.
pub fn safe_href(url: &str) -> String {
    let url = url.trim();

    // Browsers ignore tabs, newlines and control characters inside a scheme
    let scheme: String = url
        .chars()
        .take_while(|&c| c != ':')
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let has_scheme = url.contains(':') && !scheme.contains(['/', '?', '#']);
    if has_scheme && BLOCKED_SCHEMES.contains(&scheme.as_str()) {
        tracing::warn!(url = %url, "Blocked unsafe source link");
        return BLOCKED_HREF.to_string();
    }

    url.to_string()
}
