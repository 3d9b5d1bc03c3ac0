//! Insight categories
//!
//! The backend classifies every insight with one of a fixed set of codes.
//! Chart wedges are colored by looking the uppercased display label up in
//! this table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color used for any label the table does not know
pub const FALLBACK_COLOR: &str = "#78909c";

/// Insight category as classified by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Release,
    Campaign,
    Pricing,
    Hiring,
    News,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Release,
        Category::Campaign,
        Category::Pricing,
        Category::Hiring,
        Category::News,
        Category::Unknown,
    ];

    /// Wire code, e.g. `RELEASE`
    pub fn code(&self) -> &'static str {
        match self {
            Category::Release => "RELEASE",
            Category::Campaign => "CAMPAIGN",
            Category::Pricing => "PRICING",
            Category::Hiring => "HIRING",
            Category::News => "NEWS",
            Category::Unknown => "UNKNOWN",
        }
    }

    /// Label the backend sends as `category_display` for this code
    pub fn label(&self) -> &'static str {
        match self {
            Category::Release => "Product Release",
            Category::Campaign => "Marketing Campaign",
            Category::Pricing => "Pricing Change",
            Category::Hiring => "Key Hiring",
            Category::News => "News/PR",
            Category::Unknown => "Unknown",
        }
    }

    /// Chart color
    pub fn color(&self) -> &'static str {
        match self {
            Category::Release => "#43a047",  // green
            Category::Campaign => "#1e88e5", // blue
            Category::Pricing => "#f4511e",  // orange-red
            Category::Hiring => "#fb8c00",   // orange
            Category::News => "#8e24aa",     // purple
            Category::Unknown => FALLBACK_COLOR,
        }
    }

    /// Exact (case-sensitive) lookup by wire code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve the chart color for a display label.
///
/// The label is uppercased before the lookup, so `"news"`, `"News"` and
/// `"NEWS"` all resolve to the news color. Labels such as `"Product Release"`
/// uppercase to something that is not a code and fall back to gray.
pub fn category_color(name: &str) -> &'static str {
    Category::from_code(&name.to_uppercase())
        .map(|c| c.color())
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("release"), None);
    }

    #[test]
    fn test_color_lookup_is_case_insensitive() {
        assert_eq!(category_color("Release"), "#43a047");
        assert_eq!(category_color("release"), "#43a047");
        assert_eq!(category_color("NEWS"), "#8e24aa");
        assert_eq!(category_color("hiring"), "#fb8c00");
    }

    #[test]
    fn test_unmapped_labels_fall_back_to_gray() {
        assert_eq!(category_color("Product Release"), FALLBACK_COLOR);
        assert_eq!(category_color(""), FALLBACK_COLOR);
        assert_eq!(category_color("Partnership"), FALLBACK_COLOR);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&Category::Pricing).unwrap();
        assert_eq!(json, "\"PRICING\"");
        let parsed: Category = serde_json::from_str("\"HIRING\"").unwrap();
        assert_eq!(parsed, Category::Hiring);
    }
}
