//! Dashboard view state
//!
//! An immutable snapshot plus reducer-style transitions. Every transition
//! is total: any action can be applied to any state.

use crate::chart::{aggregate, ChartSlice};
use crate::model::Insight;

/// Snapshot of everything the dashboard displays
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Fetched records, in response order
    pub insights: Vec<Insight>,
    pub loading: bool,
    /// User-facing error message
    pub error: Option<String>,
    /// Category counts derived from `insights`
    pub chart_data: Vec<ChartSlice>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            insights: Vec::new(),
            loading: true,
            error: None,
            chart_data: Vec::new(),
        }
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    StartLoading,
    Succeed(Vec<Insight>),
    Fail(String),
}

impl DashboardAction {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::StartLoading => "start-loading",
            DashboardAction::Succeed(_) => "succeed",
            DashboardAction::Fail(_) => "fail",
        }
    }
}

impl DashboardState {
    /// Apply one transition, producing the next snapshot
    pub fn reduce(self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::StartLoading => Self {
                loading: true,
                error: None,
                ..self
            },
            DashboardAction::Succeed(insights) => {
                let chart_data = aggregate(&insights);
                Self {
                    insights,
                    loading: false,
                    error: None,
                    chart_data,
                }
            }
            // Insights and chart stay as they were
            DashboardAction::Fail(message) => Self {
                loading: false,
                error: Some(message),
                ..self
            },
        }
    }

    /// In-place form of [`reduce`](Self::reduce)
    pub fn apply(&mut self, action: DashboardAction) {
        *self = std::mem::take(self).reduce(action);
    }

    /// What to draw for this snapshot
    pub fn screen(&self) -> Screen<'_> {
        if self.loading {
            return Screen::Loading;
        }

        let feed = if !self.insights.is_empty() {
            Feed::Cards(&self.insights)
        } else if self.error.is_none() {
            Feed::NoInsights
        } else {
            Feed::Blank
        };

        let chart = if self.chart_data.is_empty() {
            ChartArea::NoData
        } else {
            ChartArea::Pie(&self.chart_data)
        };

        Screen::Dashboard(Layout {
            banner: self.error.as_deref(),
            feed,
            chart,
        })
    }
}

/// Top-level rendering decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    /// Only the loading indicator
    Loading,
    /// Header plus feed and chart regions side by side
    Dashboard(Layout<'a>),
}

/// The two regions below the header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout<'a> {
    /// Error banner at the top of the feed
    pub banner: Option<&'a str>,
    pub feed: Feed<'a>,
    pub chart: ChartArea<'a>,
}

/// Feed region content below the banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feed<'a> {
    Cards(&'a [Insight]),
    /// Empty result without an error
    NoInsights,
    /// Empty result under an error banner
    Blank,
}

/// Chart region content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartArea<'a> {
    Pie(&'a [ChartSlice]),
    NoData,
}
