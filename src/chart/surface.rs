//! Surface executors that apply draw commands to a concrete backend.

use super::command::DrawCommand;
use super::frame::Viewport;

/// A drawing surface that can execute renderer output.
///
/// The renderer emits logical-pixel commands; the surface owns the
/// platform binding, including backing-store sizing at
/// `width * device_pixel_ratio` by `height * device_pixel_ratio`.
pub trait Surface {
    /// Size and clear the backing store for a frame
    fn prepare(&mut self, viewport: &Viewport);

    /// Apply a full frame of draw commands
    fn apply(&mut self, commands: &[DrawCommand]);
}

#[cfg(feature = "gui")]
pub use egui_surface::EguiSurface;

#[cfg(feature = "gui")]
mod egui_surface {
    use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

    use super::super::command::{Color, DrawCommand, TextAlign};
    use super::super::frame::Viewport;
    use super::Surface;

    fn to_color32(color: Color) -> Color32 {
        Color32::from_rgb(color.r, color.g, color.b)
    }

    /// Executor that replays draw commands onto an egui painter.
    ///
    /// egui owns the backing store and applies the device pixel ratio
    /// itself (`pixels_per_point`), so `prepare` only clips the painter
    /// to the chart area. Command coordinates are chart-local; `origin`
    /// is the top-left of the allocated widget rect.
    pub struct EguiSurface {
        painter: egui::Painter,
        origin: Pos2,
    }

    impl EguiSurface {
        pub fn new(painter: egui::Painter, origin: Pos2) -> Self {
            Self { painter, origin }
        }

        fn pos(&self, x: f32, y: f32) -> Pos2 {
            Pos2::new(self.origin.x + x, self.origin.y + y)
        }
    }

    impl Surface for EguiSurface {
        fn prepare(&mut self, viewport: &Viewport) {
            let clip = Rect::from_min_size(self.origin, Vec2::new(viewport.width, viewport.height));
            self.painter = self.painter.with_clip_rect(clip);
        }

        fn apply(&mut self, commands: &[DrawCommand]) {
            for command in commands {
                match command {
                    DrawCommand::FillRect {
                        x,
                        y,
                        width,
                        height,
                        color,
                    } => {
                        let rect = Rect::from_min_size(self.pos(*x, *y), Vec2::new(*width, *height));
                        self.painter.rect_filled(rect, 0.0, to_color32(*color));
                    }
                    DrawCommand::Line {
                        x1,
                        y1,
                        x2,
                        y2,
                        width,
                        color,
                    } => {
                        self.painter.line_segment(
                            [self.pos(*x1, *y1), self.pos(*x2, *y2)],
                            Stroke::new(*width, to_color32(*color)),
                        );
                    }
                    DrawCommand::Text {
                        x,
                        y,
                        text,
                        size,
                        color,
                        align,
                    } => {
                        // Command y is the text baseline
                        let anchor = match align {
                            TextAlign::Left => Align2::LEFT_BOTTOM,
                            TextAlign::Center => Align2::CENTER_BOTTOM,
                        };
                        self.painter.text(
                            self.pos(*x, *y),
                            anchor,
                            text,
                            FontId::proportional(*size),
                            to_color32(*color),
                        );
                    }
                }
            }
        }
    }
}
