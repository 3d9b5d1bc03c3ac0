//! Category Chart
//!
//! Groups insights by display label into pie slices and lays the slices
//! out as wedges. Shared by the browser chart and the terminal legend.

mod aggregate;
pub mod pie;

pub use aggregate::{aggregate, total, ChartSlice};
pub use pie::{layout, percent_label, PieWedge};
