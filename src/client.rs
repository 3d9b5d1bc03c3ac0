//! HTTP insight source
//!
//! reqwest-backed [`InsightSource`] for the terminal dashboard. Dropping the
//! fetch future (which is what an abort does) closes the connection.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::dashboard::InsightSource;
use crate::error::{FetchError, FetchResult};
use crate::model::{decode_insights, Insight};

/// Longest slice of an error body kept in `FetchError::Status`
const MAX_ERROR_BODY: usize = 200;

/// Fetches insights with a single `GET`
pub struct HttpInsightSource {
    client: Client,
    url: String,
}

impl HttpInsightSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> FetchResult<Self> {
        Self::new(config.insights_url(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl InsightSource for HttpInsightSource {
    async fn fetch_insights(&self) -> FetchResult<Vec<Insight>> {
        tracing::info!(url = %self.url, "Fetching insights");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;
        decode_insights(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_builds_insights_url() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            request_timeout_secs: 5,
        };
        let source = HttpInsightSource::from_config(&config).unwrap();
        assert_eq!(source.url(), "http://127.0.0.1:8000/api/insights/");
    }
}
