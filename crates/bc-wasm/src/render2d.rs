//! Canvas2D surface.
//!
//! Implements the paint pass's `Surface` on top of an HTML `<canvas>`
//! `CanvasRenderingContext2d`.

use bc_render::paint::Surface;
use kurbo::{Line, Rect};
use peniko::Color;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> Canvas2dSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Surface for Canvas2dSurface<'_> {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_line(&mut self, line: Line, color: Color) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.begin_path();
        self.ctx.move_to(line.p0.x, line.p0.y);
        self.ctx.line_to(line.p1.x, line.p1.y);
        self.ctx.stroke();
    }
}

/// Format a color as a CSS `rgba()` string.
pub fn css_color(color: Color) -> String {
    let [r, g, b, a] = color.components;
    format!(
        "rgba({}, {}, {}, {})",
        channel(r),
        channel(g),
        channel(b),
        a.clamp(0.0, 1.0)
    )
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
