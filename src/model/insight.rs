//! Insight records
//!
//! The backend returns a JSON array of insight objects. Decoding is lenient
//! per element: a record with missing or oddly-typed fields still becomes an
//! `Insight`, with empty text filled in. Only a body that is not an
//! array at all is a decode error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::FetchResult;

/// Opaque record identifier, numeric or textual depending on the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum InsightId {
    Number(i64),
    Text(String),
}

impl InsightId {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(
                n.as_i64()
                    .map(InsightId::Number)
                    .unwrap_or_else(|| InsightId::Text(n.to_string())),
            ),
            Value::String(s) => Some(InsightId::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for InsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightId::Number(n) => write!(f, "{}", n),
            InsightId::Text(s) => f.write_str(s),
        }
    }
}

/// A single competitor event found by the monitor backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<InsightId>,
    pub title: String,
    pub summary: String,
    pub competitor_name: String,
    pub source_url: String,
    /// Raw timestamp as sent by the backend; formatted at render time
    pub event_date: String,
    /// Short code such as `RELEASE`, selects the badge style
    pub category: String,
    /// Human-readable label, badge text and chart group key
    pub category_display: String,
}

impl Insight {
    /// Build an insight from one element of the response array.
    ///
    /// Text fields that are missing, `null`, objects or arrays become `""`;
    /// numbers and booleans keep their JSON text. Nothing is inferred, so a
    /// record without `category_display` groups under `""` rather than
    /// joining a real label's slice.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(text).unwrap_or_default();

        Self {
            id: value.get("id").and_then(InsightId::from_value),
            title: field("title"),
            summary: field("summary"),
            competitor_name: field("competitor_name"),
            source_url: field("source_url"),
            event_date: field("event_date"),
            category: field("category"),
            category_display: field("category_display"),
        }
    }
}

impl Default for Insight {
    fn default() -> Self {
        Self::from_value(&Value::Null)
    }
}

impl<'de> Deserialize<'de> for Insight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Insight::from_value(&value))
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decode a response body into insights, keeping response order
pub fn decode_insights(body: &str) -> FetchResult<Vec<Insight>> {
    let insights: Vec<Insight> = serde_json::from_str(body)?;
    tracing::debug!(count = insights.len(), "Decoded insights");
    Ok(insights)
}
