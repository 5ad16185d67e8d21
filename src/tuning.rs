//! Data-driven game balance
//!
//! Every balance knob lives here so a round can be re-tuned from JSON
//! without touching the simulation. Missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

/// Balance parameters for a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at the start of a round
    pub starting_lives: u8,
    /// Round length in milliseconds
    pub round_duration_ms: f64,

    /// Spawn interval at tier 0 (ms); each tier subtracts `spawn_step_ms`
    pub spawn_base_ms: f64,
    pub spawn_step_ms: f64,
    /// Spawn interval never drops below this (ms)
    pub spawn_floor_ms: f64,

    /// Score needed to reach tier 2
    pub tier2_score: u32,
    /// Score needed to reach tier 3
    pub tier3_score: u32,

    /// Base fall speed range (units per reference frame), `[min, max)`
    pub item_speed_min: f32,
    pub item_speed_max: f32,
    /// Extra fall speed per tier above 1
    pub tier_speed_bonus: f32,
    /// Upper bound (exclusive) of the zigzag phase offset
    pub phase_offset_max: f32,
    /// Chance that a spawn is a fish once fish are enabled (tier 2+)
    pub decoy_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            round_duration_ms: 30_000.0,

            spawn_base_ms: 1500.0,
            spawn_step_ms: 300.0,
            spawn_floor_ms: 500.0,

            tier2_score: 10,
            tier3_score: 20,

            item_speed_min: 2.0,
            item_speed_max: 5.0,
            tier_speed_bonus: 1.5,
            phase_offset_max: 200.0,
            decoy_chance: 0.3,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. A round always starts with at
    /// least one life.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        if tuning.starting_lives == 0 {
            log::warn!("starting_lives must be at least 1, using 1");
            tuning.starting_lives = 1;
        }
        Ok(tuning)
    }

    /// Parse tuning overrides, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Milliseconds between spawns at the given tier
    pub fn spawn_interval_ms(&self, tier: u8) -> f64 {
        (self.spawn_base_ms - f64::from(tier) * self.spawn_step_ms).max(self.spawn_floor_ms)
    }

    /// Tier reached by a score (1..=3)
    pub fn tier_for_score(&self, score: u32) -> u8 {
        if score >= self.tier3_score {
            3
        } else if score >= self.tier2_score {
            2
        } else {
            1
        }
    }

    /// Whether fish can spawn at the given tier
    pub fn decoys_enabled(&self, tier: u8) -> bool {
        tier >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_per_tier() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn_interval_ms(1), 1200.0);
        assert_eq!(tuning.spawn_interval_ms(2), 900.0);
        assert_eq!(tuning.spawn_interval_ms(3), 600.0);
        // Floor kicks in past tier 3
        assert_eq!(tuning.spawn_interval_ms(4), 500.0);
        assert_eq!(tuning.spawn_interval_ms(10), 500.0);
    }

    #[test]
    fn test_tier_thresholds() {
        let tuning = Tuning::default();
        assert_eq!(tuning.tier_for_score(0), 1);
        assert_eq!(tuning.tier_for_score(9), 1);
        assert_eq!(tuning.tier_for_score(10), 2);
        assert_eq!(tuning.tier_for_score(19), 2);
        assert_eq!(tuning.tier_for_score(20), 3);
        assert_eq!(tuning.tier_for_score(500), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "starting_lives": 5, "decoy_chance": 0.5 }"#)
            .expect("valid json");
        assert_eq!(tuning.starting_lives, 5);
        assert_eq!(tuning.decoy_chance, 0.5);
        assert_eq!(tuning.round_duration_ms, 30_000.0);
        assert_eq!(tuning.tier3_score, 20);
    }

    #[test]
    fn test_zero_starting_lives_clamped() {
        let tuning = Tuning::from_json(r#"{ "starting_lives": 0 }"#).expect("valid json");
        assert_eq!(tuning.starting_lives, 1);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(Tuning::from_json("{ nope").is_err());
        assert_eq!(Tuning::from_json_or_default("{ nope"), Tuning::default());
    }
}
