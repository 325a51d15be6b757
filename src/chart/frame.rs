//! Pure frame renderer for the daily candlestick chart.
//!
//! [`render_frame`] turns a bar series and a viewport into a flat list of
//! [`DrawCommand`]s: background, grid and price axis, one candle glyph per
//! bar, date labels and the legend. Every invocation renders the whole
//! frame from scratch; there is no incremental patching of prior output.

use crate::market::BarSeries;

use super::base::{
    format_price, month_day, AXIS_FONT_SIZE, AXIS_TEXT_COLOR, BACKGROUND_COLOR, BODY_WIDTH_RATIO,
    DATE_FONT_SIZE, DATE_LABEL_SLOTS, DEFAULT_CHART_HEIGHT, DOWN_COLOR, DOWN_LABEL, GRID_COLOR,
    GRID_INTERVALS, GRID_LINE_WIDTH, LEGEND_TEXT_COLOR, MAX_DISPLAY_BARS, MIN_BODY_HEIGHT,
    MIN_BODY_WIDTH, PADDING_BOTTOM, PADDING_LEFT, PADDING_RIGHT, PADDING_TOP, UP_COLOR, UP_LABEL,
    WICK_WIDTH,
};
use super::command::{DrawCommand, TextAlign};

/// Ephemeral per-draw viewport state: container width, chart height and
/// device pixel ratio, all in logical pixels except the ratio itself.
///
/// The renderer works purely in logical pixels; the executor uses
/// `device_pixel_ratio` to size its backing store (`width * dpr` by
/// `height * dpr`) and apply a uniform scale so output stays crisp on
/// high-density displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Viewport with the default chart height and a 1:1 pixel ratio
    pub fn new(width: f32) -> Self {
        Self {
            width,
            height: DEFAULT_CHART_HEIGHT,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }
}

/// Linear, inverted mapping from price to vertical pixel position.
#[derive(Debug, Clone, Copy)]
pub struct PriceScale {
    top: f32,
    height: f32,
    min_price: f64,
    max_price: f64,
}

impl PriceScale {
    pub fn new(top: f32, height: f32, min_price: f64, max_price: f64) -> Self {
        Self {
            top,
            height,
            min_price,
            max_price,
        }
    }

    /// Map a price to a y coordinate; higher prices map to smaller y.
    ///
    /// A degenerate range (single bar, or all prices equal) maps every
    /// price to the vertical midpoint instead of dividing by zero.
    pub fn price_to_y(&self, price: f64) -> f32 {
        let range = self.max_price - self.min_price;
        if range <= 0.0 {
            return self.top + self.height * 0.5;
        }
        let normalized = ((price - self.min_price) / range) as f32;
        self.top + self.height - normalized * self.height
    }
}

/// Render one complete chart frame as a list of draw commands.
///
/// `series` is newest-first as supplied by the data source; the renderer
/// windows it down to the [`MAX_DISPLAY_BARS`] most recent bars and lays
/// them out oldest-to-newest, left-to-right. An empty series yields only
/// the background fill and the legend. A degenerate viewport (zero or
/// negative extent) yields no commands at all.
pub fn render_frame(series: &BarSeries, viewport: &Viewport) -> Vec<DrawCommand> {
    let width = viewport.width;
    let height = viewport.height;
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let mut commands = vec![DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        color: BACKGROUND_COLOR,
    }];

    let display = series.display_window(MAX_DISPLAY_BARS);
    if display.is_empty() {
        push_legend(&mut commands, width);
        return commands;
    }

    // Price range over the visible window, padded 10% on both sides
    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;
    for bar in &display {
        min_price = min_price.min(bar.low);
        max_price = max_price.max(bar.high);
    }
    let price_padding = (max_price - min_price) * 0.1;
    min_price -= price_padding;
    max_price += price_padding;

    let chart_width = width - PADDING_LEFT - PADDING_RIGHT;
    let chart_height = height - PADDING_TOP - PADDING_BOTTOM;
    let candle_gap = chart_width / display.len() as f32;
    let candle_width = MIN_BODY_WIDTH.max(candle_gap * BODY_WIDTH_RATIO);
    let scale = PriceScale::new(PADDING_TOP, chart_height, min_price, max_price);

    // Grid lines and price axis labels
    for i in 0..=GRID_INTERVALS {
        let y = PADDING_TOP + (chart_height / GRID_INTERVALS as f32) * i as f32;
        commands.push(DrawCommand::Line {
            x1: PADDING_LEFT,
            y1: y,
            x2: width - PADDING_RIGHT,
            y2: y,
            width: GRID_LINE_WIDTH,
            color: GRID_COLOR,
        });

        let price = max_price - ((max_price - min_price) / GRID_INTERVALS as f64) * i as f64;
        commands.push(DrawCommand::Text {
            x: width - PADDING_RIGHT + 5.0,
            y: y + 4.0,
            text: format_price(price),
            size: AXIS_FONT_SIZE,
            color: AXIS_TEXT_COLOR,
            align: TextAlign::Left,
        });
    }

    // Candle glyphs and date labels
    let label_step = display.len().div_ceil(DATE_LABEL_SLOTS);
    for (i, bar) in display.iter().enumerate() {
        let x = PADDING_LEFT + candle_gap * i as f32 + candle_gap / 2.0;
        let color = if bar.close >= bar.open { UP_COLOR } else { DOWN_COLOR };

        // Wick
        commands.push(DrawCommand::Line {
            x1: x,
            y1: scale.price_to_y(bar.high),
            x2: x,
            y2: scale.price_to_y(bar.low),
            width: WICK_WIDTH,
            color,
        });

        // Body, kept visible even for a doji
        let body_top = scale.price_to_y(bar.open.max(bar.close));
        let body_bottom = scale.price_to_y(bar.open.min(bar.close));
        let body_height = (body_bottom - body_top).max(MIN_BODY_HEIGHT);
        commands.push(DrawCommand::FillRect {
            x: x - candle_width / 2.0,
            y: body_top,
            width: candle_width,
            height: body_height,
            color,
        });

        if i % label_step == 0 {
            commands.push(DrawCommand::Text {
                x,
                y: height - PADDING_BOTTOM + 15.0,
                text: month_day(&bar.date),
                size: DATE_FONT_SIZE,
                color: AXIS_TEXT_COLOR,
                align: TextAlign::Center,
            });
        }
    }

    push_legend(&mut commands, width);
    commands
}

/// Two fixed swatches in the top-right corner labeling the palette
fn push_legend(commands: &mut Vec<DrawCommand>, width: f32) {
    commands.push(DrawCommand::FillRect {
        x: width - 100.0,
        y: 10.0,
        width: 12.0,
        height: 12.0,
        color: UP_COLOR,
    });
    commands.push(DrawCommand::Text {
        x: width - 85.0,
        y: 20.0,
        text: UP_LABEL.to_string(),
        size: AXIS_FONT_SIZE,
        color: LEGEND_TEXT_COLOR,
        align: TextAlign::Left,
    });
    commands.push(DrawCommand::FillRect {
        x: width - 100.0,
        y: 28.0,
        width: 12.0,
        height: 12.0,
        color: DOWN_COLOR,
    });
    commands.push(DrawCommand::Text {
        x: width - 85.0,
        y: 38.0,
        text: DOWN_LABEL.to_string(),
        size: AXIS_FONT_SIZE,
        color: LEGEND_TEXT_COLOR,
        align: TextAlign::Left,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::DailyBar;

    fn bar(date: &str, open: f64, high: f64, low: f64, close: f64) -> DailyBar {
        DailyBar {
            date: date.to_string(),
            open,
            high,
            low,
            close,
            volume: 1000.0,
            change_sign: String::new(),
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(800.0)
    }

    /// Candle bodies are every fill rect except the leading background
    /// fill and the two trailing legend swatches.
    fn candle_bodies(commands: &[DrawCommand]) -> Vec<(f32, f32, f32, f32)> {
        let rects: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect();
        rects[1..rects.len() - 2].to_vec()
    }

    fn body_colors(commands: &[DrawCommand]) -> Vec<crate::chart::Color> {
        let colors: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        colors[1..colors.len() - 2].to_vec()
    }

    #[test]
    fn test_price_to_y_monotone_non_increasing() {
        let scale = PriceScale::new(20.0, 340.0, 90.0, 110.0);
        let mut prev = f32::INFINITY;
        for step in 0..=40 {
            let price = 90.0 + step as f64 * 0.5;
            let y = scale.price_to_y(price);
            assert!(y <= prev, "price {} mapped above a lower price", price);
            prev = y;
        }
    }

    #[test]
    fn test_price_to_y_zero_range_maps_to_midpoint() {
        let scale = PriceScale::new(20.0, 340.0, 100.0, 100.0);
        assert_eq!(scale.price_to_y(100.0), 20.0 + 170.0);
        assert_eq!(scale.price_to_y(50.0), 20.0 + 170.0);
    }

    #[test]
    fn test_empty_series_draws_background_and_legend_only() {
        let commands = render_frame(&BarSeries::default(), &viewport());

        // Background fill plus two swatches and two labels
        assert_eq!(commands.len(), 5);
        match &commands[0] {
            DrawCommand::FillRect { x, y, color, .. } => {
                assert_eq!((*x, *y), (0.0, 0.0));
                assert_eq!(*color, BACKGROUND_COLOR);
            }
            other => panic!("expected background fill, got {:?}", other),
        }
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_degenerate_viewport_is_a_no_op() {
        let series = BarSeries::newest_first(vec![bar("20240101", 100.0, 105.0, 95.0, 102.0)]);
        assert!(render_frame(&series, &Viewport::new(0.0)).is_empty());
        assert!(render_frame(&series, &Viewport::new(800.0).with_height(0.0)).is_empty());
    }

    #[test]
    fn test_windowing_caps_at_sixty_most_recent() {
        // 80 bars, newest-first
        let bars: Vec<DailyBar> = (0..80)
            .map(|i| {
                let day = 80 - i;
                bar(&format!("2024{:04}", day), 100.0, 105.0, 95.0, 102.0)
            })
            .collect();
        let series = BarSeries::newest_first(bars);

        let commands = render_frame(&series, &viewport());
        assert_eq!(candle_bodies(&commands).len(), 60);

        // Wicks (one per bar) plus six grid lines
        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 60 + GRID_INTERVALS + 1);
    }

    #[test]
    fn test_chronological_left_to_right_layout() {
        // Newest-first input: Jan 2 then Jan 1
        let series = BarSeries::newest_first(vec![
            bar("20240102", 100.0, 110.0, 95.0, 105.0),
            bar("20240101", 90.0, 100.0, 85.0, 98.0),
        ]);

        let commands = render_frame(&series, &viewport());
        let bodies = candle_bodies(&commands);
        assert_eq!(bodies.len(), 2);

        // Jan 1 renders left of Jan 2
        assert!(bodies[0].0 < bodies[1].0);

        // Both candles are up-colored (close >= open)
        for color in body_colors(&commands) {
            assert_eq!(color, UP_COLOR);
        }
    }

    #[test]
    fn test_down_candle_uses_down_palette() {
        let series = BarSeries::newest_first(vec![bar("20240101", 100.0, 101.0, 94.0, 95.0)]);
        let commands = render_frame(&series, &viewport());
        assert_eq!(body_colors(&commands), vec![DOWN_COLOR]);
    }

    #[test]
    fn test_body_rect_is_well_formed() {
        let bars: Vec<DailyBar> = (1..=30)
            .map(|i| {
                let base = 100.0 + (i as f64 * 7.0) % 13.0;
                bar(
                    &format!("202402{:02}", i),
                    base,
                    base + 3.0,
                    base - 4.0,
                    base + (i as f64 % 5.0) - 2.0,
                )
            })
            .collect();
        let series = BarSeries::newest_first(bars);

        for (_, y, _, height) in candle_bodies(&render_frame(&series, &viewport())) {
            assert!(height >= MIN_BODY_HEIGHT);
            assert!(y + height >= y);
        }
    }

    #[test]
    fn test_doji_body_has_minimum_height() {
        let series = BarSeries::newest_first(vec![bar("20240101", 100.0, 103.0, 97.0, 100.0)]);
        let bodies = candle_bodies(&render_frame(&series, &viewport()));
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].3, MIN_BODY_HEIGHT);
    }

    #[test]
    fn test_single_bar_renders_flat_without_panic() {
        // One bar with zero high-low spread: degenerate price range
        let series = BarSeries::newest_first(vec![bar("20240101", 100.0, 100.0, 100.0, 100.0)]);
        let commands = render_frame(&series, &viewport());

        let mid = PADDING_TOP + (DEFAULT_CHART_HEIGHT - PADDING_TOP - PADDING_BOTTOM) / 2.0;
        let wick = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Line {
                    y1,
                    y2,
                    width,
                    ..
                } if *width == WICK_WIDTH => Some((*y1, *y2)),
                _ => None,
            })
            .expect("wick drawn");
        assert_eq!(wick.0, mid);
        assert_eq!(wick.1, mid);
    }

    #[test]
    fn test_render_is_idempotent() {
        let series = BarSeries::newest_first(vec![
            bar("20240102", 100.0, 110.0, 95.0, 105.0),
            bar("20240101", 90.0, 100.0, 85.0, 98.0),
        ]);
        let vp = viewport();
        assert_eq!(render_frame(&series, &vp), render_frame(&series, &vp));
    }

    #[test]
    fn test_grid_labels_are_thousands_grouped() {
        let series = BarSeries::newest_first(vec![bar("20240101", 71000.0, 72500.0, 70800.0, 72000.0)]);
        let commands = render_frame(&series, &viewport());

        let top_label = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text, align: TextAlign::Left, color, .. }
                    if *color == AXIS_TEXT_COLOR =>
                {
                    Some(text.clone())
                }
                _ => None,
            })
            .expect("axis label drawn");
        assert!(top_label.contains(','), "expected grouping in {top_label}");
    }

    #[test]
    fn test_date_labels_at_most_six_slots() {
        let bars: Vec<DailyBar> = (0..60)
            .map(|i| bar(&format!("2024{:04}", 60 - i), 100.0, 105.0, 95.0, 102.0))
            .collect();
        let series = BarSeries::newest_first(bars);

        let commands = render_frame(&series, &viewport());
        let date_labels = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { align: TextAlign::Center, .. }))
            .count();
        assert_eq!(date_labels, 6);
    }

    #[test]
    fn test_malformed_date_renders_blank_label() {
        let series = BarSeries::newest_first(vec![bar("2024", 100.0, 105.0, 95.0, 102.0)]);
        let commands = render_frame(&series, &viewport());

        let label = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { text, align: TextAlign::Center, .. } => Some(text.clone()),
                _ => None,
            })
            .expect("date label slot still emitted");
        assert!(label.is_empty());
    }
}
