//! Rendering
//!
//! Pure view-models and text output. Nothing here performs I/O; the
//! browser components and the terminal printer both build on these.

pub mod card;
pub mod date;
pub mod text;

pub use card::{badge_class, safe_href, InsightCard, SourceLink};
pub use date::{format_event_date, format_event_date_in, parse_event_date, INVALID_DATE};
pub use text::{render_screen, render_screen_in, TextOptions};

pub const HEADER_TITLE: &str = "📈 Competitive Landscape Monitor";
pub const HEADER_SUBTITLE: &str = "Your real-time automated competitor insights platform";
pub const FEED_HEADING: &str = "Latest Insights";
pub const CHART_HEADING: &str = "Insights by Category";
pub const LOADING_TEXT: &str = "Loading insights...";
pub const NO_INSIGHTS_TEXT: &str = "No insights found.";
pub const NO_CHART_DATA_TEXT: &str = "No data for chart.";
