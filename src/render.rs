use player_core::{Dimensions, ParticleField};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    /// Clear, then paint one filled circle per particle.
    pub fn draw(&self, field: &ParticleField, dims: Dimensions) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, dims.width as f64, dims.height as f64);
        for p in field {
            // silent bins are fully transparent
            if p.color.alpha <= 0.0 {
                continue;
            }
            ctx.set_fill_style_str(&p.color.to_css());
            ctx.begin_path();
            if ctx
                .arc(
                    p.position.x as f64,
                    p.position.y as f64,
                    p.size as f64,
                    0.0,
                    TAU,
                )
                .is_ok()
            {
                ctx.fill();
            }
        }
    }
}
