//! HTTP API Client
//!
//! Browser-side insight source for the dashboard controller.

use async_trait::async_trait;
use gloo_net::http::Request;
use insight_monitor::{
    build_time_api_base, decode_insights, insights_url, FetchError, FetchResult, Insight,
    InsightSource,
};
use web_sys::AbortController;

/// Longest slice of an error body kept in `FetchError::Status`
const MAX_ERROR_BODY: usize = 200;

/// Insights URL for this build
pub fn insights_endpoint() -> String {
    insights_url(build_time_api_base())
}

/// Fetches insights with `gloo-net`, cancellable through an `AbortController`
pub struct GlooInsightSource {
    url: String,
    abort: Option<AbortController>,
}

impl GlooInsightSource {
    pub fn new(url: impl Into<String>) -> Self {
        // Without an AbortController the request still runs, it just
        // cannot be cancelled at the transport level
        let abort = AbortController::new().ok();
        Self {
            url: url.into(),
            abort,
        }
    }
}

#[async_trait(?Send)]
impl InsightSource for GlooInsightSource {
    async fn fetch_insights(&self) -> FetchResult<Vec<Insight>> {
        let signal = self.abort.as_ref().map(AbortController::signal);

        let response = Request::get(&self.url)
            .header("Accept", "application/json")
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: response.status(),
                message: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        decode_insights(&body)
    }

    fn cancel(&self) {
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }
}
