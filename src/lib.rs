//! Vida Submarina - A falling-item catcher arcade game
//!
//! Core modules:
//! - `sim`: Simulation (spawning, movement, collisions, game state)
//! - `game`: Frame driver that ties the simulation to its collaborators
//! - `renderer`: Draw list generation and the canvas renderer
//! - `hud`: Lives/score/timer presentation
//! - `platform`: Browser/native input abstraction
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame length (ms) that item and keyboard speeds are tuned against
    pub const REFERENCE_FRAME_MS: f32 = 16.0;

    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player net
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Gap between the net and the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
    /// Keyboard speed in units per reference frame
    pub const KEYBOARD_SPEED: f32 = 8.0;
    /// Fixed low-pass ratio for pointer following (not frame-rate normalized)
    pub const POINTER_SMOOTHING: f32 = 0.2;

    /// Falling items
    pub const ITEM_WIDTH: f32 = 30.0;
    pub const ITEM_HEIGHT: f32 = 30.0;

    /// Zigzag motion (tier 3)
    pub const ZIGZAG_FREQUENCY: f32 = 0.05;
    pub const ZIGZAG_AMPLITUDE: f32 = 50.0;
}
