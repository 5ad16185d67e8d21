//! Canvas 2D renderer

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use super::shapes::{build_draw_list, css_color};
use crate::sim::GameState;

/// Paints the draw list onto a `<canvas>` 2D context
pub struct CanvasRenderer {
    ctx: Option<CanvasRenderingContext2d>,
    show_hitboxes: bool,
}

impl CanvasRenderer {
    /// Attach to a canvas. Without a 2D context every draw is a no-op.
    pub fn new(canvas: Option<&HtmlCanvasElement>, show_hitboxes: bool) -> Self {
        let ctx = canvas
            .and_then(|c| c.get_context("2d").ok().flatten())
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            log::warn!("No 2D canvas context - rendering disabled");
        }
        Self { ctx, show_hitboxes }
    }

    pub fn set_show_hitboxes(&mut self, show: bool) {
        self.show_hitboxes = show;
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState) {
        let Some(ctx) = &self.ctx else {
            return;
        };

        for shape in build_draw_list(state, self.show_hitboxes) {
            let r = shape.rect;
            let style = css_color(shape.color);
            if shape.filled {
                ctx.set_fill_style_str(&style);
                ctx.fill_rect(r.left() as f64, r.top() as f64, r.size.x as f64, r.size.y as f64);
            } else {
                ctx.set_stroke_style_str(&style);
                ctx.stroke_rect(r.left() as f64, r.top() as f64, r.size.x as f64, r.size.y as f64);
            }
        }
    }
}
