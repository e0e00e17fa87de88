//! Canvas 2D surface (browser)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::sim::Color;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap the canvas' 2D context; `None` if the browser refuses one
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_text_align("center");
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_fill(&mut self, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
    }

    fn set_stroke(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(color.as_css());
    }

    fn set_font_size(&mut self, size: f32) {
        self.ctx.set_font(&format!("{}px sans-serif", size));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (rx, ry) = (w as f64 / 2.0, h as f64 / 2.0);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.ellipse(
            x as f64 + rx,
            y as f64 + ry,
            rx,
            ry,
            0.0,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Ellipse failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.ctx.stroke_text(text, x as f64, y as f64) {
            log::warn!("stroke_text failed: {:?}", e);
        }
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }
}
