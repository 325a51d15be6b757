//! Stock Chart - candlestick chart rendering for a trading dashboard
//!
//! This crate provides:
//!
//! - A pure candlestick renderer that turns a daily bar series into a
//!   list of drawing commands (grid, price axis, candle glyphs, legend)
//! - A surface executor abstraction with an egui backend (`gui` feature)
//! - A market data layer with REST and mock datafeeds
//! - Redraw coalescing so resize storms cost one repaint per frame
//!
//! # Quick Start
//!
//! ```
//! use stock_chart::chart::{render_frame, Viewport};
//! use stock_chart::market::sample_series;
//!
//! let series = sample_series(90);
//! let commands = render_frame(&series, &Viewport::new(800.0));
//! assert!(!commands.is_empty());
//! ```

pub mod chart;
pub mod logging;
pub mod market;
pub mod setting;

// Re-export commonly used types
pub use chart::{render_frame, Color, DrawCommand, RedrawScheduler, Surface, TextAlign, Viewport};
pub use market::{BarSeries, DailyBar, Datafeed, DatafeedError, MockDatafeed, PriceDirection, RestDatafeed, Stock};
pub use setting::{SettingValue, Settings, SETTINGS};

#[cfg(feature = "gui")]
pub use chart::{ChartWidget, EguiSurface};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
