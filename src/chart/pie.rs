//! Pie layout
//!
//! Angles are in degrees, starting at 3 o'clock and running
//! counter-clockwise. Points are in SVG coordinates (y grows downward).

use super::aggregate::{total, ChartSlice};

/// A slice placed on the pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieWedge<'a> {
    pub slice: &'a ChartSlice,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the total, 0.0..=1.0
    pub fraction: f64,
}

/// Place slices around the circle in order. A zero total yields no wedges.
pub fn layout(slices: &[ChartSlice]) -> Vec<PieWedge<'_>> {
    let sum = total(slices);
    if sum == 0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    slices
        .iter()
        .map(|slice| {
            let fraction = slice.value as f64 / sum as f64;
            let start_angle = angle;
            angle += fraction * 360.0;
            PieWedge {
                slice,
                start_angle,
                end_angle: angle,
                fraction,
            }
        })
        .collect()
}

/// `"<name> (<percent>%)"`, percent rounded to a whole number
pub fn percent_label(name: &str, fraction: f64) -> String {
    format!("{} ({}%)", name, whole_percent(fraction))
}

fn whole_percent(fraction: f64) -> i64 {
    // f64::round rounds half away from zero: 12.5 -> 13
    (fraction * 100.0).round() as i64
}

impl<'a> PieWedge<'a> {
    pub fn percent(&self) -> i64 {
        whole_percent(self.fraction)
    }

    pub fn label(&self) -> String {
        percent_label(&self.slice.name, self.fraction)
    }

    /// Hover text
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.slice.name, self.slice.value)
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn is_full_circle(&self) -> bool {
        self.end_angle - self.start_angle >= 360.0 - f64::EPSILON * 360.0
    }

    /// SVG path data for the wedge
    pub fn svg_path(&self, cx: f64, cy: f64, radius: f64) -> String {
        if self.is_full_circle() {
            // A single arc cannot close on itself, draw two halves
            return format!(
                "M {:.3} {:.3} A {r:.3} {r:.3} 0 1 0 {:.3} {:.3} A {r:.3} {r:.3} 0 1 0 {:.3} {:.3} Z",
                cx + radius,
                cy,
                cx - radius,
                cy,
                cx + radius,
                cy,
                r = radius
            );
        }

        let (x0, y0) = point_on_circle(cx, cy, radius, self.start_angle);
        let (x1, y1) = point_on_circle(cx, cy, radius, self.end_angle);
        let large_arc = if self.end_angle - self.start_angle > 180.0 { 1 } else { 0 };

        format!(
            "M {:.3} {:.3} L {:.3} {:.3} A {r:.3} {r:.3} 0 {} 0 {:.3} {:.3} Z",
            cx,
            cy,
            x0,
            y0,
            large_arc,
            x1,
            y1,
            r = radius
        )
    }

    /// Where the wedge's label sits, on the mid angle at `radius`
    pub fn label_anchor(&self, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
        point_on_circle(cx, cy, radius, self.mid_angle())
    }

    /// SVG `text-anchor` so labels grow away from the pie
    pub fn text_anchor(&self) -> &'static str {
        if self.mid_angle().to_radians().cos() >= 0.0 {
            "start"
        } else {
            "end"
        }
    }
}

fn point_on_circle(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}
