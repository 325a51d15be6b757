//! Candlestick chart rendering.
//!
//! This module provides:
//! - [`render_frame`] - Pure renderer turning a bar series into draw commands
//! - [`DrawCommand`] - Platform-independent drawing primitives
//! - [`Surface`] - Executor trait binding commands to a concrete backend
//! - [`RedrawScheduler`] - One-redraw-per-frame coalescing for resize events
//! - `ChartWidget` - egui host widget (with `gui` feature)
//!
//! # Example
//!
//! ```
//! use stock_chart::chart::{render_frame, Viewport};
//! use stock_chart::market::BarSeries;
//!
//! let commands = render_frame(&BarSeries::default(), &Viewport::new(800.0));
//! assert!(!commands.is_empty());
//! ```

mod base;
mod command;
mod frame;
mod redraw;
mod surface;

#[cfg(feature = "gui")]
mod widget;

pub use base::*;
pub use command::{Color, DrawCommand, TextAlign};
pub use frame::{render_frame, PriceScale, Viewport};
pub use redraw::RedrawScheduler;
pub use surface::Surface;

#[cfg(feature = "gui")]
pub use surface::EguiSurface;
#[cfg(feature = "gui")]
pub use widget::ChartWidget;
