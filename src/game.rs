//! Frame driver
//!
//! Owns the simulation and its collaborators. The host calls [`Game::frame`]
//! once per animation frame with a monotonic timestamp and keeps scheduling
//! frames for as long as it returns `true`.

use crate::hud::{GameOverSummary, HudSink, HudSnapshot};
use crate::platform::InputState;
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameState, Simulation};

/// Game instance holding the simulation and its collaborators
pub struct Game<R: Renderer, H: HudSink> {
    sim: Simulation,
    renderer: R,
    hud: H,
    input: InputState,
    /// Clock baseline (ms) of the previous frame
    last_time: Option<f64>,
}

impl<R: Renderer, H: HudSink> Game<R, H> {
    pub fn new(sim: Simulation, renderer: R, hud: H, input: InputState) -> Self {
        Self {
            sim,
            renderer,
            hud,
            input,
            last_time: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.sim.state()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    /// Input written by host events
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Start a round at `now_ms`. Returns false (and changes nothing) while
    /// a round is already running.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if !self.sim.start() {
            return false;
        }
        self.last_time = Some(now_ms);
        self.hud.hide_game_over();
        self.hud.update(&HudSnapshot::from_state(self.sim.state()));
        self.renderer.draw(self.sim.state());
        true
    }

    /// Stop the round; the host must not schedule another frame
    pub fn stop(&mut self) {
        self.sim.stop();
    }

    /// Run one frame. Returns whether the host should schedule the next one.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.sim.is_running() {
            return false;
        }

        let dt = match self.last_time {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        let events = self.sim.update(dt, &self.input);
        for event in &events {
            self.handle_event(event);
        }

        self.renderer.draw(self.sim.state());
        self.hud.update(&HudSnapshot::from_state(self.sim.state()));

        self.sim.is_running()
    }

    fn handle_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ItemSpawned { id, kind } => log::debug!("Spawned {:?} #{}", kind, id),
            GameEvent::ItemCaught { id, kind } => log::debug!("Caught {:?} #{}", kind, id),
            GameEvent::ItemMissed { id, kind } => log::debug!("Missed {:?} #{}", kind, id),
            GameEvent::LifeLost { lives_left } => log::debug!("Life lost, {} left", lives_left),
            GameEvent::TierChanged { tier } => log::debug!("Tier {} reached", tier),
            GameEvent::GameOver { reason, score } => {
                self.hud.show_game_over(&GameOverSummary { score, reason });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::platform::InputMode;
    use crate::renderer::NullRenderer;
    use crate::sim::GameOverReason;

    #[derive(Default)]
    struct RecordingHud {
        updates: Vec<HudSnapshot>,
        summaries: Vec<GameOverSummary>,
        hidden: usize,
    }

    impl HudSink for RecordingHud {
        fn update(&mut self, hud: &HudSnapshot) {
            self.updates.push(hud.clone());
        }

        fn show_game_over(&mut self, summary: &GameOverSummary) {
            self.summaries.push(summary.clone());
        }

        fn hide_game_over(&mut self) {
            self.hidden += 1;
        }
    }

    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _state: &GameState) {
            self.draws += 1;
        }
    }

    fn game() -> Game<CountingRenderer, RecordingHud> {
        Game::new(
            Simulation::new(Tuning::default(), 3),
            CountingRenderer::default(),
            RecordingHud::default(),
            InputState::new(InputMode::Keyboard),
        )
    }

    #[test]
    fn test_frames_do_nothing_before_start() {
        let mut game = game();
        assert!(!game.frame(100.0));
        assert!(game.hud().updates.is_empty());
        assert_eq!(game.state().ticks, 0);
    }

    #[test]
    fn test_dt_measured_from_start_baseline() {
        let mut game = game();
        assert!(game.start(1_000.0));
        assert!(game.frame(1_016.0));
        assert!(game.frame(1_048.0));
        assert_eq!(game.state().time_remaining_ms, 30_000.0 - 48.0);

        let last = game.hud().updates.last().expect("hud pushed");
        assert_eq!(last.seconds_left, 30);
        assert_eq!(last.difficulty, "Slow");
    }

    #[test]
    fn test_start_while_running_keeps_baseline() {
        let mut game = game();
        game.start(0.0);
        assert!(!game.start(5_000.0));
        game.frame(100.0);
        assert_eq!(game.state().time_remaining_ms, 29_900.0);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut game = game();
        game.start(500.0);
        game.frame(400.0);
        assert_eq!(game.state().time_remaining_ms, 30_000.0);
    }

    #[test]
    fn test_game_over_reported_once() {
        let mut game = game();
        game.start(0.0);
        assert!(!game.frame(30_000.0));
        assert!(!game.frame(30_016.0));
        assert!(!game.frame(30_032.0));

        assert_eq!(
            game.hud().summaries,
            vec![GameOverSummary {
                score: 0,
                reason: GameOverReason::TimeExpired
            }]
        );
        assert_eq!(game.hud().updates.last().map(|h| h.seconds_left), Some(0));
    }

    #[test]
    fn test_stop_halts_scheduling() {
        let mut game = game();
        game.start(0.0);
        assert!(game.frame(16.0));
        game.stop();
        game.stop();
        assert!(!game.frame(32.0));
        assert!(game.hud().summaries.is_empty());
    }

    #[test]
    fn test_restart_hides_summary_and_redraws() {
        let mut game = game();
        game.start(0.0);
        game.frame(31_000.0);
        let draws = game.renderer_mut().draws;

        assert!(game.start(40_000.0));
        assert_eq!(game.hud().hidden, 2);
        assert_eq!(game.renderer_mut().draws, draws + 1);
        assert_eq!(game.state().lives, 3);
        assert!(game.frame(40_016.0));
    }

    #[test]
    fn test_spawn_frame_is_handled_without_summary() {
        let mut game = game();
        game.start(0.0);
        assert!(game.frame(1_200.0));
        assert_eq!(game.state().items.len(), 1);
        assert!(game.hud().summaries.is_empty());
    }

    #[test]
    fn test_headless_collaborators() {
        let mut game = Game::new(
            Simulation::new(Tuning::default(), 3),
            NullRenderer,
            crate::hud::NullHud,
            InputState::default(),
        );
        game.start(0.0);
        for i in 1..=10 {
            assert!(game.frame(i as f64 * 16.0));
        }
    }
}
