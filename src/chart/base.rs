//! Base constants and utility functions for the chart module.

use super::command::Color;

// Chart palette (dark theme)
pub const BACKGROUND_COLOR: Color = Color::from_rgb(0x0f, 0x17, 0x2a);
pub const GRID_COLOR: Color = Color::from_rgb(0x1e, 0x29, 0x3b);
pub const AXIS_TEXT_COLOR: Color = Color::from_rgb(0x64, 0x74, 0x8b);
pub const LEGEND_TEXT_COLOR: Color = Color::from_rgb(0xe2, 0xe8, 0xf0);

// Price movement colors (Korean style: red up, blue down)
pub const UP_COLOR: Color = Color::from_rgb(0xef, 0x44, 0x44);
pub const DOWN_COLOR: Color = Color::from_rgb(0x3b, 0x82, 0xf6);

// Legend labels
pub const UP_LABEL: &str = "상승";
pub const DOWN_LABEL: &str = "하락";

// Fixed chart margins
pub const PADDING_TOP: f32 = 20.0;
pub const PADDING_RIGHT: f32 = 60.0;
pub const PADDING_BOTTOM: f32 = 40.0;
pub const PADDING_LEFT: f32 = 20.0;

// Layout constants
pub const MAX_DISPLAY_BARS: usize = 60;
pub const GRID_INTERVALS: usize = 5;
pub const DATE_LABEL_SLOTS: usize = 6;
pub const BODY_WIDTH_RATIO: f32 = 0.7;
pub const MIN_BODY_WIDTH: f32 = 3.0;
pub const MIN_BODY_HEIGHT: f32 = 1.0;
pub const WICK_WIDTH: f32 = 1.0;
pub const GRID_LINE_WIDTH: f32 = 0.5;
pub const AXIS_FONT_SIZE: f32 = 11.0;
pub const DATE_FONT_SIZE: f32 = 10.0;
pub const DEFAULT_CHART_HEIGHT: f32 = 400.0;

/// Format a price for the axis: rounded to the nearest integer unit
/// and thousands-grouped.
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Extract an `MM/DD` label from an 8-digit `YYYYMMDD` date string.
///
/// A malformed date (length != 8) yields an empty label rather than
/// aborting the redraw.
pub fn month_day(date: &str) -> String {
    match (date.len() == 8, date.get(4..6), date.get(6..8)) {
        (true, Some(month), Some(day)) => format!("{}/{}", month, day),
        _ => String::new(),
    }
}
