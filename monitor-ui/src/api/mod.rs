//! API access

pub mod client;

pub use client::{insights_endpoint, GlooInsightSource};
