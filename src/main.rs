//! Vida Submarina entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use glam::Vec2;
    use vida_submarina::hud::DomHud;
    use vida_submarina::platform::{DirectionKey, InputState};
    use vida_submarina::renderer::CanvasRenderer;
    use vida_submarina::sim::Simulation;
    use vida_submarina::{Game, Settings, Tuning};

    /// Browser host: the game plus loop bookkeeping
    struct Host {
        game: Game<CanvasRenderer, DomHud>,
        settings: Settings,
        /// An animation frame is pending
        scheduled: bool,
    }

    impl Host {
        /// Start a round and make sure the loop is running
        fn start(host: &Rc<RefCell<Host>>) {
            let started = {
                let mut h = host.borrow_mut();
                let seed = h.settings.seed_or(js_sys::Date::now() as u64);
                let sim = h.game.simulation_mut();
                if !sim.is_running() {
                    sim.reseed(seed);
                }
                h.game.start(now())
            };
            if started {
                log::info!("Round started");
                schedule(host.clone());
            }
        }
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Convert a client-space x to canvas pixels
    fn canvas_x(canvas: &HtmlCanvasElement, client_x: f64) -> f32 {
        let rect = canvas.get_bounding_client_rect();
        let css_width = rect.width().max(1.0);
        ((client_x - rect.left()) * canvas.width() as f64 / css_width) as f32
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Vida Submarina starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let canvas: Option<HtmlCanvasElement> = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into().ok());

        let canvas_size = canvas
            .as_ref()
            .map(|c| Vec2::new(c.width() as f32, c.height() as f32))
            .unwrap_or(Vec2::new(
                vida_submarina::consts::CANVAS_WIDTH,
                vida_submarina::consts::CANVAS_HEIGHT,
            ));

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let sim = Simulation::with_canvas(Tuning::default(), seed, canvas_size);
        let renderer = CanvasRenderer::new(canvas.as_ref(), settings.show_hitboxes);
        let input = InputState::new(settings.preferred_input);

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(sim, renderer, DomHud::new(), input),
            settings,
            scheduled: false,
        }));

        if let Some(canvas) = &canvas {
            setup_pointer_handlers(canvas, host.clone());
        }
        setup_keyboard_handlers(host.clone());
        setup_buttons(host.clone());

        log::info!("Vida Submarina ready ({}x{})", canvas_size.x, canvas_size.y);
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        // Mouse move
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let x = canvas_x(&canvas_clone, event.client_x() as f64);
                host.borrow_mut().game.input_mut().pointer_moved(x);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move
        for name in ["touchstart", "touchmove"] {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let x = canvas_x(&canvas_clone, touch.client_x() as f64);
                    host.borrow_mut().game.input_mut().pointer_moved(x);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().expect("no window");

        for (name, down) in [("keydown", true), ("keyup", false)] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = DirectionKey::from_key(&event.key()) {
                    event.prevent_default();
                    host.borrow_mut().game.input_mut().key_changed(key, down);
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // H toggles hitbox outlines and remembers the choice
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() || !matches!(event.key().as_str(), "h" | "H") {
                    return;
                }
                let mut h = host.borrow_mut();
                let show = h.settings.toggle_hitboxes();
                h.game.renderer_mut().set_show_hitboxes(show);
                h.settings.save();
                log::info!("Hitboxes {}", if show { "on" } else { "off" });
            });
            let _ =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur never delivers keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                host.borrow_mut().game.input_mut().release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(host: Rc<RefCell<Host>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let host = host.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    Host::start(&host);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("stop-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                host.borrow_mut().game.stop();
                log::info!("Round stopped by player");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Request the next animation frame unless one is already pending
    fn schedule(host: Rc<RefCell<Host>>) {
        {
            let mut h = host.borrow_mut();
            if h.scheduled {
                return;
            }
            h.scheduled = true;
        }
        request_animation_frame(host);
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        let keep_going = {
            let mut h = host.borrow_mut();
            let keep_going = h.game.frame(time);
            if !keep_going {
                h.scheduled = false;
            }
            keep_going
        };

        if keep_going {
            request_animation_frame(host);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Vida Submarina (native) starting...");
    log::info!("Native mode runs a headless demo round - use `trunk serve` for the web version");

    let tuning = load_tuning();
    let settings = vida_submarina::Settings::load();
    let seed = settings.seed_or(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    );

    let state = demo::run(tuning, seed);
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Tuning overrides from the JSON file named by `VIDA_TUNING`, if any
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning() -> vida_submarina::Tuning {
    use vida_submarina::Tuning;

    let Ok(path) = std::env::var("VIDA_TUNING") else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => {
            log::info!("Loading tuning from {}", path);
            Tuning::from_json_or_default(&json)
        }
        Err(e) => {
            log::warn!("Cannot read tuning file {} ({}), using defaults", path, e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use vida_submarina::hud::NullHud;
    use vida_submarina::platform::InputState;
    use vida_submarina::renderer::NullRenderer;
    use vida_submarina::sim::{GameState, ItemKind, Simulation};
    use vida_submarina::{Game, Tuning};

    /// Simulated frame length (~60 FPS)
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Where the autopilot wants the net: under the lowest plastic
    fn autopilot_target(state: &GameState) -> Option<f32> {
        state
            .items
            .iter()
            .filter(|i| i.kind == ItemKind::Collectible)
            .max_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|i| i.pos.x + i.size.x / 2.0)
    }

    /// Play one round with the autopilot and return the final state
    pub fn run(tuning: Tuning, seed: u64) -> GameState {
        let mut game = Game::new(
            Simulation::new(tuning, seed),
            NullRenderer,
            NullHud,
            InputState::default(),
        );

        let mut now = 0.0;
        game.start(now);
        loop {
            if let Some(x) = autopilot_target(game.state()) {
                game.input_mut().pointer_moved(x);
            }
            now += FRAME_MS;
            if !game.frame(now) {
                break;
            }
        }

        let state = game.state().clone();
        log::info!(
            "Demo finished after {} frames: score {}, lives {}, tier {} ({:?})",
            state.ticks,
            state.score,
            state.lives,
            state.tier,
            state.game_over_reason
        );
        state
    }
}
