//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started yet, or stopped by the host
    Idle,
    /// Active gameplay
    Running,
    /// Round ended; only a new start leaves this phase
    GameOver,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    TimeExpired,
    NoLivesLeft,
}

impl GameOverReason {
    /// Text shown on the game over summary
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::TimeExpired => "Time's up!",
            GameOverReason::NoLivesLeft => "Out of lives!",
        }
    }
}

/// Item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Plastic: catch it for a point, miss it and lose a life
    Collectible,
    /// Fish: catching it costs a life, letting it pass is free
    Decoy,
}

/// A falling item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed in units per reference frame
    pub speed: f32,
    /// Zigzag phase offset (added to y before the sine)
    pub phase_offset: f32,
    /// Spawn x the zigzag oscillates around
    pub base_x: f32,
}

impl Item {
    pub fn new(id: u32, kind: ItemKind, x: f32, speed: f32, phase_offset: f32) -> Self {
        Self {
            id,
            kind,
            pos: Vec2::new(x, -ITEM_HEIGHT),
            size: Vec2::new(ITEM_WIDTH, ITEM_HEIGHT),
            speed,
            phase_offset,
            base_x: x,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Advance the item by `frames` reference frames
    pub fn advance(&mut self, frames: f32, zigzag: bool) {
        self.pos.y += self.speed * frames;
        if zigzag {
            self.pos.x = self.base_x
                + ((self.pos.y + self.phase_offset) * ZIGZAG_FREQUENCY).sin() * ZIGZAG_AMPLITUDE;
        }
    }
}

/// The player's net
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    /// Net centered horizontally, resting near the bottom edge
    pub fn new(canvas: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                (canvas.x - PLAYER_WIDTH) / 2.0,
                canvas.y - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Keep the net inside `[0, canvas_width - width]`
    pub fn clamp_to(&mut self, canvas_width: f32) {
        let max_x = (canvas_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ItemSpawned { id: u32, kind: ItemKind },
    ItemCaught { id: u32, kind: ItemKind },
    ItemMissed { id: u32, kind: ItemKind },
    LifeLost { lives_left: u8 },
    TierChanged { tier: u8 },
    GameOver { reason: GameOverReason, score: u32 },
}

/// Display label for a difficulty tier
pub fn difficulty_label(tier: u8) -> &'static str {
    match tier {
        0 | 1 => "Slow",
        2 => "Fast+Fish",
        _ => "ZigZag",
    }
}

/// Complete round state (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u32,
    /// Difficulty tier (1..=3), never decreases within a round
    pub tier: u8,
    /// Countdown in milliseconds, never negative
    pub time_remaining_ms: f64,
    /// Milliseconds since the last spawn
    pub spawn_accumulator_ms: f64,
    /// Live items in spawn order
    pub items: Vec<Item>,
    pub player: Player,
    /// Playfield size
    pub canvas: Vec2,
    /// Set once the round ends
    pub game_over_reason: Option<GameOverReason>,
    /// Ticks simulated this round
    pub ticks: u64,
    /// Next item ID
    next_id: u32,
}

impl GameState {
    /// Fresh round state for the given playfield
    pub fn new(tuning: &Tuning, canvas: Vec2) -> Self {
        Self {
            phase: GamePhase::Idle,
            lives: tuning.starting_lives,
            score: 0,
            tier: 1,
            time_remaining_ms: tuning.round_duration_ms,
            spawn_accumulator_ms: 0.0,
            items: Vec::new(),
            player: Player::new(canvas),
            canvas,
            game_over_reason: None,
            ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new item ID
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Time remaining in seconds
    pub fn time_remaining(&self) -> f64 {
        self.time_remaining_ms / 1000.0
    }

    /// Whole seconds left, rounded up (what the HUD shows)
    pub fn seconds_left(&self) -> u32 {
        (self.time_remaining_ms / 1000.0).ceil().max(0.0) as u32
    }

    pub fn difficulty_label(&self) -> &'static str {
        difficulty_label(self.tier)
    }
}
