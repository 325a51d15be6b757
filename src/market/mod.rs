//! Market data layer: bar and stock objects plus datafeed sources.

mod datafeed;
mod mock;
mod object;

pub use datafeed::{Datafeed, DatafeedError, RestDatafeed};
pub use mock::{sample_series, MockDatafeed};
pub use object::{BarSeries, DailyBar, PriceDirection, Stock};
