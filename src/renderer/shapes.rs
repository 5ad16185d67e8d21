//! Shape generation for the playfield

use crate::sim::{GameState, ItemKind, Rect};

/// Deep water
const BACKGROUND: [f32; 4] = [0.02, 0.18, 0.35, 1.0];
/// Net
const NET: [f32; 4] = [0.95, 0.85, 0.55, 1.0];
/// Plastic
const PLASTIC: [f32; 4] = [0.85, 0.9, 0.95, 0.9];
/// Fish
const FISH: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
/// Hitbox outline (debug)
const HITBOX: [f32; 4] = [1.0, 0.0, 0.3, 1.0];

/// A rectangle to paint, filled or outlined
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: [f32; 4],
    pub filled: bool,
}

/// Item color by kind
fn item_color(kind: ItemKind) -> [f32; 4] {
    match kind {
        ItemKind::Collectible => PLASTIC,
        ItemKind::Decoy => FISH,
    }
}

/// Build the draw list: background, items in spawn order, then the net on top
pub fn build_draw_list(state: &GameState, show_hitboxes: bool) -> Vec<DrawRect> {
    let mut list = Vec::with_capacity(2 + state.items.len() * 2);

    list.push(DrawRect {
        rect: Rect::new(0.0, 0.0, state.canvas.x, state.canvas.y),
        color: BACKGROUND,
        filled: true,
    });

    for item in &state.items {
        list.push(DrawRect {
            rect: item.rect(),
            color: item_color(item.kind),
            filled: true,
        });
    }

    list.push(DrawRect {
        rect: state.player.rect(),
        color: NET,
        filled: true,
    });

    if show_hitboxes {
        let outlines: Vec<DrawRect> = state
            .items
            .iter()
            .map(|i| i.rect())
            .chain(std::iter::once(state.player.rect()))
            .map(|rect| DrawRect {
                rect,
                color: HITBOX,
                filled: false,
            })
            .collect();
        list.extend(outlines);
    }

    list
}

/// CSS `rgba()` string for a canvas fill/stroke style
pub fn css_color(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}
