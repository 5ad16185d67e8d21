//! Rendering module
//!
//! Game state is turned into a flat list of colored rectangles; concrete
//! renderers only paint that list.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{DrawRect, build_draw_list, css_color};

use crate::sim::GameState;

/// Draws the current state. Must be a no-op when no surface is attached.
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Renderer without a surface (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}
