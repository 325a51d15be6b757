//! Datafeed abstraction over the dashboard's REST backend.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::setting::SETTINGS;

use super::object::{BarSeries, DailyBar, Stock};

/// Errors from a datafeed query
#[derive(Debug, Error)]
pub enum DatafeedError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend rejected request: {0}")]
    Backend(String),
}

/// Abstract data source for stock snapshots and daily chart history.
///
/// Implementations must return daily bars newest-first; the renderer
/// relies on that ordering when it windows and reverses the series.
#[async_trait]
pub trait Datafeed: Send + Sync {
    /// Query the daily chart history for a stock code
    async fn query_daily_chart(&self, code: &str) -> Result<BarSeries, DatafeedError>;

    /// Query the current snapshot for a stock code
    async fn query_stock(&self, code: &str) -> Result<Stock, DatafeedError>;
}

/// Daily chart payload returned by the backend
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyChartResponse {
    #[allow(dead_code)]
    stock_code: String,
    items: Vec<DailyBar>,
}

/// Datafeed backed by the dashboard REST API.
pub struct RestDatafeed {
    client: reqwest::Client,
    base_url: String,
}

impl RestDatafeed {
    /// Create a datafeed against the configured backend base URL
    pub fn new() -> Self {
        let base_url = SETTINGS
            .get_string("datafeed.base_url")
            .unwrap_or_else(|| "http://localhost:8080/api".to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for RestDatafeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Datafeed for RestDatafeed {
    async fn query_daily_chart(&self, code: &str) -> Result<BarSeries, DatafeedError> {
        let url = format!("{}/stocks/{}/daily-chart", self.base_url, code);
        tracing::debug!(%url, "querying daily chart");

        let response: DailyChartResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Broker payloads occasionally carry placeholder rows without a date
        let items: Vec<DailyBar> = response
            .items
            .into_iter()
            .filter(|item| !item.date.trim().is_empty())
            .collect();

        tracing::info!(code, bars = items.len(), "daily chart loaded");
        Ok(BarSeries::newest_first(items))
    }

    async fn query_stock(&self, code: &str) -> Result<Stock, DatafeedError> {
        let url = format!("{}/stocks/{}", self.base_url, code);
        tracing::debug!(%url, "querying stock snapshot");

        let stock: Stock = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(stock)
    }
}
