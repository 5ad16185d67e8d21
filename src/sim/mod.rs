//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, aabb_overlap};
pub use spawn::spawn_item;
pub use state::{
    GameEvent, GameOverReason, GamePhase, GameState, Item, ItemKind, Player, difficulty_label,
};
pub use tick::Simulation;
