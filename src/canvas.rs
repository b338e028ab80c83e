//! Canvas 2D implementation of the core `Surface`.

use backdrop_core::{Rgba, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not CanvasRenderingContext2d"))?;
        Ok(Self { canvas, ctx })
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    fn arc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32) {
        self.arc(center, radius);
        self.set_fill(color);
        self.ctx.set_shadow_blur(glow as f64);
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.fill();
        // shadow state is sticky on the context
        self.ctx.set_shadow_blur(0.0);
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    #[allow(deprecated)]
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(e) => {
                log::debug!("radial gradient rejected: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &inner.to_css());
        _ = gradient.add_color_stop(1.0, &outer.to_css());
        self.arc(center, radius);
        self.ctx.set_fill_style(gradient.as_ref());
        self.ctx.fill();
    }

    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }
}
