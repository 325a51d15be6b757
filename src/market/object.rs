//! Basic data structures for the market data layer.

use serde::{Deserialize, Serialize};

/// Direction of a daily price change, decoded from the broker's
/// categorical change-sign code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Up,
    Down,
    Unchanged,
}

impl PriceDirection {
    /// Decode a change-sign code: `"1"`/`"2"` are up-like (limit-up and
    /// up), `"4"`/`"5"` are down-like (limit-down and down), anything
    /// else is treated as unchanged.
    pub fn from_sign(sign: &str) -> Self {
        match sign {
            "1" | "2" => PriceDirection::Up,
            "4" | "5" => PriceDirection::Down,
            _ => PriceDirection::Unchanged,
        }
    }
}

/// One trading day's OHLCV record.
///
/// `date` is an 8-digit `YYYYMMDD` string; it is used for display and
/// ordering only and is never parsed as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default)]
    pub change_sign: String,
}

impl DailyBar {
    /// Direction decoded from the change-sign code
    pub fn direction(&self) -> PriceDirection {
        PriceDirection::from_sign(&self.change_sign)
    }
}

/// Ordered sequence of daily bars, newest-first as supplied by the
/// data source.
///
/// The series is read-only renderer input: it is fully replaced on every
/// query and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarSeries(Vec<DailyBar>);

impl BarSeries {
    /// Wrap a newest-first list of bars
    pub fn newest_first(bars: Vec<DailyBar>) -> Self {
        Self(bars)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All bars, newest-first
    pub fn bars(&self) -> &[DailyBar] {
        &self.0
    }

    /// Most recent bar, if any
    pub fn latest(&self) -> Option<&DailyBar> {
        self.0.first()
    }

    /// The `min(len, max_bars)` most recent bars in chronological
    /// (oldest-first) order, ready for left-to-right layout.
    pub fn display_window(&self, max_bars: usize) -> Vec<&DailyBar> {
        self.0.iter().take(max_bars).rev().collect()
    }
}

/// Stock snapshot shown in the detail header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub code: String,
    pub name: String,
    pub current_price: f64,
    pub change_price: f64,
    pub change_rate: f64,
    pub volume: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
}
