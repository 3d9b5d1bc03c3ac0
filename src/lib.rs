//! # Insight Monitor
//!
//! Competitive Landscape Monitor - fetches competitor insights once,
//! shows them as a feed of cards and breaks them down by category.
//!
//! ## Modules
//!
//! - [`model`]: Insight records and the category table
//! - [`chart`]: Category aggregation and pie layout
//! - [`dashboard`]: View state, transitions and the one-shot fetch controller
//! - [`render`]: Card view-models, date formatting and terminal output
//! - [`client`]: reqwest-backed insight source (`native` feature)
//! - [`config`]: TOML configuration with environment override (`native` feature)
//!
//! The core modules build without the `native` feature so the browser
//! front end (`monitor-ui`) can share them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use insight_monitor::{Config, DashboardController, DashboardStore, HttpInsightSource};
//! use insight_monitor::render::{render_screen, TextOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let source = HttpInsightSource::from_config(&config.api)?;
//!
//!     let store = DashboardStore::new();
//!     let controller = DashboardController::new(source, &store);
//!     controller.mount().await;
//!
//!     print!("{}", render_screen(&store.snapshot(), &TextOptions::default()));
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod render;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use chart::{aggregate, ChartSlice, PieWedge};

pub use dashboard::{
    ChartArea, DashboardAction, DashboardController, DashboardSink, DashboardState,
    DashboardStore, Feed, InsightSource, Layout, LoadOutcome, Screen, FETCH_ERROR_MESSAGE,
};

pub use endpoint::{build_time_api_base, insights_url, DEFAULT_API_BASE};

pub use error::{FetchError, FetchResult};

pub use model::{category_color, decode_insights, Category, Insight, InsightId};

pub use render::{InsightCard, SourceLink};

#[cfg(feature = "native")]
pub use client::HttpInsightSource;

#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, DisplayConfig, LoggingConfig};
