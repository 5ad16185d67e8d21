//! HUD presentation
//!
//! The driver pushes a [`HudSnapshot`] after every mutating tick and a
//! [`GameOverSummary`] once per finished round. Sinks must tolerate a
//! missing presentation surface.

use serde::{Deserialize, Serialize};

use crate::sim::{GameOverReason, GameState};

/// Values shown on the HUD
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub lives: u8,
    pub score: u32,
    /// Whole seconds left, rounded up
    pub seconds_left: u32,
    pub difficulty: &'static str,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            lives: state.lives,
            score: state.score,
            seconds_left: state.seconds_left(),
            difficulty: state.difficulty_label(),
        }
    }
}

/// Terminal summary of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub score: u32,
    pub reason: GameOverReason,
}

impl GameOverSummary {
    pub fn reason_text(&self) -> &'static str {
        self.reason.message()
    }
}

/// Presentation surface for HUD values
pub trait HudSink {
    /// Show current lives, score, timer and difficulty
    fn update(&mut self, hud: &HudSnapshot);
    /// Show the end-of-round summary
    fn show_game_over(&mut self, summary: &GameOverSummary);
    /// Hide the end-of-round summary (a new round started)
    fn hide_game_over(&mut self) {}
}

/// HUD sink that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullHud;

impl HudSink for NullHud {
    fn update(&mut self, _hud: &HudSnapshot) {}
    fn show_game_over(&mut self, _summary: &GameOverSummary) {}
}

/// HUD written into DOM elements by id
#[cfg(target_arch = "wasm32")]
pub struct DomHud {
    document: Option<web_sys::Document>,
}

#[cfg(target_arch = "wasm32")]
impl DomHud {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            log::warn!("No document - HUD disabled");
        }
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.as_ref().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(&self, id: &str, class: &str) {
        if let Some(el) = self.document.as_ref().and_then(|d| d.get_element_by_id(id)) {
            let _ = el.set_attribute("class", class);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for DomHud {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl HudSink for DomHud {
    fn update(&mut self, hud: &HudSnapshot) {
        self.set_text("lives", &hud.lives.to_string());
        self.set_text("score", &hud.score.to_string());
        self.set_text("time", &hud.seconds_left.to_string());
        self.set_text("difficulty", hud.difficulty);
    }

    fn show_game_over(&mut self, summary: &GameOverSummary) {
        self.set_text("final-score", &summary.score.to_string());
        self.set_text("game-over-reason", summary.reason_text());
        self.set_class("game-over", "");
    }

    fn hide_game_over(&mut self) {
        self.set_class("game-over", "hidden");
    }
}
