//! Category aggregation

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{category_color, Insight};

/// One wedge worth of data: a display label, its count and its color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: usize,
    pub color: &'static str,
}

/// Count insights per `category_display`.
///
/// Grouping is by display label, so records with different codes but the
/// same label share one slice. Slices come out in first-seen order and the
/// values always sum to `insights.len()`.
pub fn aggregate(insights: &[Insight]) -> Vec<ChartSlice> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for insight in insights {
        *counts.entry(insight.category_display.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(name, value)| ChartSlice {
            name: name.to_string(),
            value,
            color: category_color(name),
        })
        .collect()
}

/// Sum of all slice values
pub fn total(slices: &[ChartSlice]) -> usize {
    slices.iter().map(|s| s.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FALLBACK_COLOR;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn insight(category: &str, display: &str) -> Insight {
        Insight::from_value(&json!({ "category": category, "category_display": display }))
    }

    #[test]
    fn test_same_display_different_codes_merge() {
        let insights = vec![insight("RELEASE", "Release"), insight("NEWS", "Release")];
        let slices = aggregate(&insights);
        assert_eq!(
            slices,
            vec![ChartSlice {
                name: "Release".to_string(),
                value: 2,
                color: "#43a047",
            }]
        );
    }

    #[test]
    fn test_first_seen_order_and_totality() {
        let insights = vec![
            insight("NEWS", "News"),
            insight("PRICING", "Pricing"),
            insight("NEWS", "News"),
            insight("HIRING", "Hiring"),
            insight("PRICING", "Pricing"),
            insight("NEWS", "News"),
        ];
        let slices = aggregate(&insights);
        let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["News", "Pricing", "Hiring"]);
        assert_eq!(slices[0].value, 3);
        assert_eq!(slices[1].value, 2);
        assert_eq!(slices[2].value, 1);
        assert_eq!(total(&slices), insights.len());
    }

    #[test]
    fn test_labels_are_case_sensitive_keys() {
        let slices = aggregate(&[insight("NEWS", "News"), insight("NEWS", "news")]);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].color, slices[1].color);
    }

    #[test]
    fn test_backend_labels_fall_back_to_gray() {
        let slices = aggregate(&[insight("RELEASE", "Product Release")]);
        assert_eq!(slices[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
        assert_eq!(total(&[]), 0);
    }
}
