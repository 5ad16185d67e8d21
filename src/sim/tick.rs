//! Variable timestep simulation tick
//!
//! Advances a round by the elapsed frame time: countdown, net movement,
//! spawning, falling, catches and misses.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::spawn_item;
use super::state::{GameEvent, GameOverReason, GamePhase, GameState, ItemKind};
use crate::consts::*;
use crate::platform::{InputMode, InputProvider};
use crate::tuning::Tuning;

/// A round of the game plus everything needed to advance it
#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
    tuning: Tuning,
    seed: u64,
    rng: Pcg32,
}

impl Simulation {
    /// Idle simulation on the default playfield
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_canvas(tuning, seed, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
    }

    /// Idle simulation on a playfield of the given size
    pub fn with_canvas(tuning: Tuning, seed: u64, canvas: Vec2) -> Self {
        Self {
            state: GameState::new(&tuning, canvas),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a situation
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Restart the RNG stream (takes effect for the next spawns)
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Back to a fresh, idle round
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.tuning, self.state.canvas);
    }

    /// Start a fresh round. No-op while a round is running.
    pub fn start(&mut self) -> bool {
        if self.state.is_running() {
            return false;
        }
        self.reset();
        self.state.phase = GamePhase::Running;
        log::info!("Round started (seed {})", self.seed);
        true
    }

    /// Halt the round without a game over. Idempotent.
    pub fn stop(&mut self) {
        if self.state.is_running() {
            self.state.phase = GamePhase::Idle;
            log::info!("Round stopped");
        }
    }

    /// End the round. Emits exactly one `GameOver` event per round.
    fn game_over(&mut self, reason: GameOverReason, events: &mut Vec<GameEvent>) {
        if !self.state.is_running() {
            return;
        }
        self.state.phase = GamePhase::GameOver;
        self.state.game_over_reason = Some(reason);
        log::info!(
            "Game over: {} Final score: {}",
            reason.message(),
            self.state.score
        );
        events.push(GameEvent::GameOver {
            reason,
            score: self.state.score,
        });
    }

    /// Advance the round by `dt_ms` milliseconds.
    ///
    /// Does nothing unless the round is running. Returns the events produced
    /// during this tick.
    pub fn update(&mut self, dt_ms: f64, input: &dyn InputProvider) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.state.is_running() {
            return events;
        }
        let dt_ms = dt_ms.max(0.0);
        self.state.ticks += 1;

        // Countdown
        self.state.time_remaining_ms -= dt_ms;
        if self.state.time_remaining_ms <= 0.0 {
            self.state.time_remaining_ms = 0.0;
            self.game_over(GameOverReason::TimeExpired, &mut events);
            return events;
        }

        // Speeds are tuned against a 16ms frame
        let frames = (dt_ms as f32) / REFERENCE_FRAME_MS;

        self.move_player(input, frames);
        self.spawn(dt_ms, &mut events);

        let zigzag = self.state.tier >= 3;
        for item in &mut self.state.items {
            item.advance(frames, zigzag);
        }

        self.resolve_items(&mut events);
        events
    }

    fn move_player(&mut self, input: &dyn InputProvider, frames: f32) {
        let player = &mut self.state.player;
        match input.mode() {
            InputMode::Pointer => {
                // Fixed-ratio low-pass toward the pointer, not scaled by dt.
                // The net holds still until the pointer has been seen.
                if let Some(pointer_x) = input.pointer_x() {
                    let target = pointer_x - player.size.x / 2.0;
                    player.pos.x += (target - player.pos.x) * POINTER_SMOOTHING;
                }
            }
            InputMode::Keyboard => {
                let step = KEYBOARD_SPEED * frames;
                if input.left_held() {
                    player.pos.x -= step;
                }
                if input.right_held() {
                    player.pos.x += step;
                }
            }
        }
        player.clamp_to(self.state.canvas.x);
    }

    fn spawn(&mut self, dt_ms: f64, events: &mut Vec<GameEvent>) {
        self.state.spawn_accumulator_ms += dt_ms;
        let interval = self.tuning.spawn_interval_ms(self.state.tier);
        if self.state.spawn_accumulator_ms >= interval {
            self.state.spawn_accumulator_ms = 0.0;
            let item = spawn_item(&mut self.state, &self.tuning, &mut self.rng);
            log::debug!(
                "Spawned {:?} #{} at x={:.0} speed={:.2}",
                item.kind,
                item.id,
                item.pos.x,
                item.speed
            );
            events.push(GameEvent::ItemSpawned {
                id: item.id,
                kind: item.kind,
            });
            self.state.items.push(item);
        }
    }

    /// Catches and misses in one reverse pass so removal never skips a neighbor
    fn resolve_items(&mut self, events: &mut Vec<GameEvent>) {
        let player_rect = self.state.player.rect();
        let floor = self.state.canvas.y;

        for i in (0..self.state.items.len()).rev() {
            let item = &self.state.items[i];
            let (id, kind) = (item.id, item.kind);
            let caught = item.rect().overlaps(&player_rect);
            let missed = item.pos.y > floor;

            if caught {
                self.state.items.remove(i);
                events.push(GameEvent::ItemCaught { id, kind });
                match kind {
                    ItemKind::Collectible => self.add_point(events),
                    ItemKind::Decoy => self.lose_life(events),
                }
            } else if missed {
                self.state.items.remove(i);
                events.push(GameEvent::ItemMissed { id, kind });
                // Letting plastic through costs a life; fish may pass
                if kind == ItemKind::Collectible {
                    self.lose_life(events);
                }
            }

            if !self.state.is_running() {
                break;
            }
        }
    }

    fn add_point(&mut self, events: &mut Vec<GameEvent>) {
        self.state.score += 1;
        let tier = self.tuning.tier_for_score(self.state.score);
        if tier > self.state.tier {
            self.state.tier = tier;
            log::info!("Difficulty up: tier {} ({})", tier, self.state.difficulty_label());
            events.push(GameEvent::TierChanged { tier });
        }
    }

    fn lose_life(&mut self, events: &mut Vec<GameEvent>) {
        self.state.lives = self.state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: self.state.lives,
        });
        if self.state.lives == 0 {
            self.game_over(GameOverReason::NoLivesLeft, events);
        }
    }
}
