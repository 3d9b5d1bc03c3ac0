//! Insights endpoint
//!
//! The dashboard talks to exactly one URL: `<api base>/api/insights/`.

/// Backend used when no override is given
pub const DEFAULT_API_BASE: &str = "https://monitor-backend.onrender.com";

/// Variable overriding the API base (build time for the browser, run time
/// for the terminal)
pub const API_BASE_ENV: &str = "MONITOR_API_URL";

pub const INSIGHTS_PATH: &str = "/api/insights/";

/// Full insights URL for an API base, tolerating a trailing slash
pub fn insights_url(base: &str) -> String {
    format!("{}{}", base.trim().trim_end_matches('/'), INSIGHTS_PATH)
}

/// API base compiled into this build: `MONITOR_API_URL` at build time, or
/// the default backend
pub fn build_time_api_base() -> &'static str {
    option_env!("MONITOR_API_URL")
        .filter(|base| !base.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}
