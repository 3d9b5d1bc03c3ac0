//! Data Model
//!
//! Insight records as served by the monitor backend, and the fixed
//! category table used for badges and chart colors.

mod category;
mod insight;

pub use category::{category_color, Category, FALLBACK_COLOR};
pub use insight::{decode_insights, Insight, InsightId};
