//! UI Components

pub mod chart;
pub mod insight_card;
pub mod loading;

pub use chart::PieChart;
pub use insight_card::InsightCard;
pub use loading::Loading;
