//! egui widget hosting the candlestick renderer.

use egui::{Response, Sense, Ui, Vec2};

use crate::market::BarSeries;
use crate::setting::SETTINGS;

use super::base::DEFAULT_CHART_HEIGHT;
use super::frame::{render_frame, Viewport};
use super::redraw::RedrawScheduler;
use super::surface::{EguiSurface, Surface};

/// Daily candlestick chart widget.
///
/// The widget owns no drawing state beyond the current series and the
/// observed container width: every frame is a full clear-and-redraw of
/// the renderer output, and a width change only schedules one repaint
/// regardless of how many resize events the host delivers.
pub struct ChartWidget {
    series: BarSeries,
    height: f32,
    scheduler: RedrawScheduler,
    last_width: f32,
}

impl Default for ChartWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartWidget {
    /// Create a widget with the configured chart height
    pub fn new() -> Self {
        let height = SETTINGS
            .get_float("chart.height")
            .map(|h| h as f32)
            .unwrap_or(DEFAULT_CHART_HEIGHT);
        Self::with_height(height)
    }

    pub fn with_height(height: f32) -> Self {
        Self {
            series: BarSeries::default(),
            height,
            scheduler: RedrawScheduler::new(),
            last_width: 0.0,
        }
    }

    /// Replace the displayed series (newest-first) and schedule a redraw
    pub fn update_history(&mut self, series: BarSeries) {
        self.series = series;
        self.scheduler.request();
    }

    /// Drop all data and schedule a redraw of the empty chart
    pub fn clear_all(&mut self) {
        self.series = BarSeries::default();
        self.scheduler.request();
    }

    pub fn bar_count(&self) -> usize {
        self.series.len()
    }

    /// Show the chart, filling the available width.
    ///
    /// A container that has not been laid out yet (zero width) is a
    /// silent no-op: the allocation is kept but nothing is drawn.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let width = ui.available_width();
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width.max(0.0), self.height), Sense::hover());

        if width <= 0.0 {
            return response;
        }

        if (width - self.last_width).abs() > f32::EPSILON {
            self.last_width = width;
            if self.scheduler.request() {
                ui.ctx().request_repaint();
            }
        }
        self.scheduler.begin_frame();

        let viewport = Viewport::new(width)
            .with_height(self.height)
            .with_device_pixel_ratio(ui.ctx().pixels_per_point());

        let commands = render_frame(&self.series, &viewport);
        let mut surface = EguiSurface::new(painter, response.rect.min);
        surface.prepare(&viewport);
        surface.apply(&commands);

        response
    }
}
