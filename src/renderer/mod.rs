//! Rendering module
//!
//! Replays the simulation's per-frame draw commands onto a `Surface`.
//! The browser uses a Canvas 2D context; native builds and tests use a
//! character grid.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod grid;

pub use grid::TextGrid;

use crate::sim::{Color, DrawCommand};

/// A display that understands the game's primitive drawing operations
///
/// Text is horizontally centred on `x`.
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_font_size(&mut self, size: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}

/// Draw one frame, in order
pub fn render(surface: &mut impl Surface, commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear {
                color,
                width,
                height,
            } => {
                surface.set_fill(*color);
                surface.fill_rect(0.0, 0.0, *width, *height);
                // Everything drawn on top of the background is white
                surface.set_fill(Color::White);
                surface.set_stroke(Color::White);
            }
            DrawCommand::StrokeText { text, x, y, size } => {
                surface.set_font_size(*size);
                surface.stroke_text(text, *x, *y);
            }
            DrawCommand::FillText { text, x, y, size } => {
                surface.set_font_size(*size);
                surface.fill_text(text, *x, *y);
            }
            DrawCommand::FillOval { x, y, diameter } => {
                surface.fill_oval(*x, *y, *diameter, *diameter);
            }
            DrawCommand::FillRect { x, y, w, h } => surface.fill_rect(*x, *y, *w, *h),
            DrawCommand::StrokeLine { x1, y1, x2, y2 } => {
                surface.stroke_line(*x1, *y1, *x2, *y2)
            }
        }
    }
}
