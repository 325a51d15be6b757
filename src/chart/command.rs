//! Drawing primitives produced by the renderer.
//!
//! The renderer never touches a concrete drawing API. It emits a list of
//! [`DrawCommand`] values in logical (CSS) pixel coordinates; a
//! [`Surface`](crate::chart::Surface) executor applies them to whatever
//! backend the platform provides.

/// RGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Horizontal text anchoring relative to the command's x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single drawing operation.
///
/// Coordinates are logical pixels; the y coordinate of [`DrawCommand::Text`]
/// is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Straight line segment
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Color,
    },
    /// Text label
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        color: Color,
        align: TextAlign,
    },
}
