//! Mock datafeed producing random-walk fixtures for demos and tests.

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

use super::datafeed::{Datafeed, DatafeedError};
use super::object::{BarSeries, DailyBar, Stock};

/// Number of daily bars a mock chart query returns
const SAMPLE_DAYS: usize = 90;

/// Datafeed serving generated fixtures instead of a live backend.
pub struct MockDatafeed {
    stock_name: String,
}

impl MockDatafeed {
    pub fn new() -> Self {
        Self {
            stock_name: "삼성전자".to_string(),
        }
    }
}

impl Default for MockDatafeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Datafeed for MockDatafeed {
    async fn query_daily_chart(&self, code: &str) -> Result<BarSeries, DatafeedError> {
        tracing::debug!(code, "serving mock daily chart");
        Ok(sample_series(SAMPLE_DAYS))
    }

    async fn query_stock(&self, code: &str) -> Result<Stock, DatafeedError> {
        let series = sample_series(SAMPLE_DAYS);
        let latest = series.latest().cloned().unwrap_or(DailyBar {
            date: String::new(),
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0.0,
            change_sign: "3".to_string(),
        });

        let prev_close = series
            .bars()
            .get(1)
            .map(|bar| bar.close)
            .unwrap_or(latest.open);
        let change_price = latest.close - prev_close;
        let change_rate = if prev_close > 0.0 {
            change_price / prev_close * 100.0
        } else {
            0.0
        };

        Ok(Stock {
            code: code.to_string(),
            name: self.stock_name.clone(),
            current_price: latest.close,
            change_price,
            change_rate,
            volume: latest.volume,
            high: latest.high,
            low: latest.low,
            open: latest.open,
        })
    }
}

/// Generate a newest-first random-walk series of `count` daily bars
/// ending today.
pub fn sample_series(count: usize) -> BarSeries {
    let mut rng = rand::rng();
    let today = Local::now().date_naive();
    let mut price = 70000.0_f64;
    let mut oldest_first: Vec<DailyBar> = Vec::with_capacity(count);

    for i in 0..count {
        let date = today - Duration::days((count - 1 - i) as i64);
        let change = (rng.random_range(0.0..1.0) - 0.48) * 1500.0;

        let open = price;
        let close = (price + change).max(1.0);
        let high = open.max(close) + rng.random_range(0.0..400.0);
        let low = (open.min(close) - rng.random_range(0.0..400.0)).max(1.0);
        let volume = 10_000_000.0 + rng.random_range(0.0..8_000_000.0);

        oldest_first.push(DailyBar {
            date: format_date(date),
            open,
            high,
            low,
            close,
            volume,
            change_sign: change_sign(close, open),
        });

        price = close;
    }

    oldest_first.reverse();
    BarSeries::newest_first(oldest_first)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn change_sign(close: f64, open: f64) -> String {
    if close > open {
        "2".to_string()
    } else if close < open {
        "5".to_string()
    } else {
        "3".to_string()
    }
}
