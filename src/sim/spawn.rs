//! Item spawner
//!
//! Draws position, speed and kind from the round RNG. Fish only join the
//! mix from tier 2 on, and every tier above 1 adds a flat speed bonus.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Item, ItemKind};
use crate::consts::ITEM_WIDTH;
use crate::tuning::Tuning;

/// Uniform draw in `[lo, hi)`, or `lo` when the range is empty
fn uniform(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Create a new item above the top edge (does not add it to the state)
pub fn spawn_item(state: &mut GameState, tuning: &Tuning, rng: &mut Pcg32) -> Item {
    let max_x = state.canvas.x - ITEM_WIDTH;
    let x = uniform(rng, 0.0, max_x);

    let bonus = f32::from(state.tier.saturating_sub(1)) * tuning.tier_speed_bonus;
    let speed = uniform(rng, tuning.item_speed_min, tuning.item_speed_max) + bonus;
    let phase_offset = uniform(rng, 0.0, tuning.phase_offset_max);

    let kind = if tuning.decoys_enabled(state.tier)
        && rng.random_bool(tuning.decoy_chance.clamp(0.0, 1.0))
    {
        ItemKind::Decoy
    } else {
        ItemKind::Collectible
    };

    Item::new(state.next_item_id(), kind, x, speed, phase_offset)
}
