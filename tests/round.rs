//! End-to-end round behavior through the public API

use vida_submarina::consts::{CANVAS_HEIGHT, REFERENCE_FRAME_MS};
use vida_submarina::platform::{InputMode, InputState};
use vida_submarina::sim::{GameEvent, GameOverReason, GamePhase, ItemKind, Simulation};
use vida_submarina::Tuning;

const FRAME: f64 = REFERENCE_FRAME_MS as f64;

fn still() -> InputState {
    InputState::new(InputMode::Keyboard)
}

/// Tuning whose spawner never fires within a round
fn no_spawns() -> Tuning {
    Tuning {
        spawn_base_ms: 1.0e12,
        spawn_floor_ms: 1.0e12,
        ..Default::default()
    }
}

#[test]
fn one_interval_spawns_one_item_and_a_missed_plastic_costs_a_life() {
    let mut sim = Simulation::new(Tuning::default(), 2024);
    assert!(sim.start());
    let input = still();

    // 75 * 16ms = 1200ms, exactly one tier-1 spawn interval
    let mut spawned = 0;
    for _ in 0..75 {
        spawned += sim
            .update(FRAME, &input)
            .iter()
            .filter(|e| matches!(e, GameEvent::ItemSpawned { .. }))
            .count();
    }
    assert_eq!(spawned, 1);
    assert_eq!(sim.state().items.len(), 1);

    let item = &mut sim.state_mut().items[0];
    item.kind = ItemKind::Collectible;
    item.pos.y = CANVAS_HEIGHT + 1.0;
    let id = item.id;

    let events = sim.update(FRAME, &input);
    assert!(events.contains(&GameEvent::ItemMissed {
        id,
        kind: ItemKind::Collectible
    }));
    assert_eq!(sim.state().lives, 2);
    assert!(sim.state().items.is_empty());
}

#[test]
fn timer_runs_out_after_thirty_seconds() {
    let mut sim = Simulation::new(no_spawns(), 1);
    sim.start();
    let input = still();

    for _ in 0..1874 {
        assert!(sim.update(FRAME, &input).is_empty());
    }
    assert!(sim.is_running());
    assert_eq!(sim.state().seconds_left(), 1);

    let events = sim.update(FRAME, &input);
    assert_eq!(
        events,
        vec![GameEvent::GameOver {
            reason: GameOverReason::TimeExpired,
            score: 0
        }]
    );
    assert!(!sim.is_running());
    assert_eq!(sim.state().time_remaining(), 0.0);
    assert_eq!(sim.state().game_over_reason, Some(GameOverReason::TimeExpired));
}

#[test]
fn lives_floor_at_zero_with_a_single_game_over() {
    let mut sim = Simulation::new(no_spawns(), 1);
    sim.start();
    let input = still();

    let mut game_overs = 0;
    for round in 0..6 {
        let state = sim.state_mut();
        let id = state.next_item_id();
        let mut item = vida_submarina::sim::Item::new(id, ItemKind::Collectible, 10.0, 1.0, 0.0);
        item.pos.y = CANVAS_HEIGHT + 1.0 + round as f32;
        state.items.push(item);

        game_overs += sim
            .update(FRAME, &input)
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
    }

    assert_eq!(game_overs, 1);
    assert_eq!(sim.state().lives, 0);
    assert_eq!(sim.state().phase, GamePhase::GameOver);
    assert_eq!(sim.state().game_over_reason, Some(GameOverReason::NoLivesLeft));
}

#[test]
fn start_after_game_over_restores_defaults() {
    let mut sim = Simulation::new(Tuning::default(), 77);
    sim.start();
    let input = still();

    // Let the round play out untouched; misses and the clock end it
    while sim.is_running() {
        sim.update(FRAME, &input);
    }
    assert_eq!(sim.state().phase, GamePhase::GameOver);

    assert!(sim.start());
    let state = sim.state();
    assert_eq!(state.lives, 3);
    assert_eq!(state.score, 0);
    assert_eq!(state.tier, 1);
    assert_eq!(state.time_remaining(), 30.0);
    assert!(state.items.is_empty());
    assert_eq!(state.spawn_accumulator_ms, 0.0);
    assert_eq!(state.game_over_reason, None);
}

#[test]
fn same_seed_same_round() {
    let mut a = Simulation::new(Tuning::default(), 99);
    let mut b = Simulation::new(Tuning::default(), 99);
    a.start();
    b.start();
    let mut input = InputState::default();

    for i in 0..600 {
        input.pointer_moved((i * 7 % 800) as f32);
        let ea = a.update(FRAME, &input);
        let eb = b.update(FRAME, &input);
        assert_eq!(ea, eb);
    }
    assert_eq!(a.state().score, b.state().score);
    assert_eq!(a.state().items.len(), b.state().items.len());
}

#[test]
fn state_serializes_for_debug_dumps() {
    let mut sim = Simulation::new(Tuning::default(), 5);
    sim.start();
    for _ in 0..100 {
        sim.update(FRAME, &still());
    }
    let json = serde_json::to_value(sim.state()).expect("serialize");
    assert_eq!(json["lives"], 3);
    assert_eq!(json["phase"], "Running");
    assert!(json["items"].is_array());
}

#[test]
fn zero_lives_tuning_still_plays_a_round() {
    let tuning = Tuning::from_json(r#"{ "starting_lives": 0 }"#).expect("valid json");
    let mut sim = Simulation::new(tuning, 5);
    assert!(sim.start());
    assert_eq!(sim.state().lives, 1);
    sim.update(FRAME, &still());
    assert!(sim.is_running());
}
