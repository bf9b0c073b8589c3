//! WENP Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use wenp_hop::consts::*;
    use wenp_hop::renderer::CanvasRenderer;
    use wenp_hop::reward::{FetchRewards, NoRewards, RewardSink, reward_for};
    use wenp_hop::sim::{GameEvent, GameState, Hop, TickInput, tick};
    use wenp_hop::{HudText, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        settings: Settings,
        rewards: Box<dyn RewardSink>,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// HUD last written to the DOM
        last_hud: Option<HudText>,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Hops are one-shot
                self.input.hop = None;
            }

            for event in self.state.drain_events() {
                self.handle_event(&event);
            }
        }

        fn handle_event(&self, event: &GameEvent) {
            match event {
                GameEvent::PlayerHit => log::info!("Ouch! Bear hit"),
                GameEvent::CoinCollected {
                    score,
                    coins_collected,
                    coins_needed,
                } => log::info!("Coin! score {} ({}/{})", score, coins_collected, coins_needed),
                _ => {}
            }
            if let Some(request) = reward_for(event, self.settings.reward_wallet.as_deref()) {
                self.rewards.send(request);
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.renderer.render(&self.state, &self.settings) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = HudText::project(&self.state.progress);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            for (id, text) in [
                ("hud-score", &hud.score),
                ("hud-level", &hud.level),
                ("hud-coins", &hud.coins),
            ] {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text));
                }
            }
            self.last_hud = Some(hud);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }
        log::info!("WENP Hop starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Backing store at device resolution
        let dpr = window.device_pixel_ratio();
        canvas.set_width((GAME_WIDTH as f64 * dpr) as u32);
        canvas.set_height((GAME_HEIGHT as f64 * dpr) as u32);

        let settings = Settings::load();
        let tuning = Settings::load_tuning();
        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_tuning(seed, tuning).map_err(|e| e.to_string())?;
        log::info!("Game initialized with seed: {}", seed);

        let rewards: Box<dyn RewardSink> = if settings.reward_wallet.is_some() {
            log::info!("Rewards enabled ({})", settings.reward_endpoint);
            Box::new(FetchRewards::new(settings.reward_endpoint.clone()))
        } else {
            Box::new(NoRewards)
        };

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer: CanvasRenderer::new(&canvas)?,
            settings,
            rewards,
            accumulator: 0.0,
            last_time: 0.0,
            input: TickInput::default(),
            last_hud: None,
        }));

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_keyboard(game.clone())?;
        setup_visibility(game.clone())?;

        request_animation_frame(game);
        log::info!("WENP Hop running!");
        Ok(())
    }

    /// Map a key to a hop (arrows and WASD)
    fn key_to_hop(key: &str) -> Option<Hop> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Hop::Up),
            "ArrowDown" | "s" | "S" => Some(Hop::Down),
            "ArrowLeft" | "a" | "A" => Some(Hop::Left),
            "ArrowRight" | "d" | "D" => Some(Hop::Right),
            _ => None,
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Held keys auto-repeat; only the initial press hops
            if event.repeat() {
                return;
            }
            if let Some(hop) = key_to_hop(event.key().as_str()) {
                event.prevent_default();
                let mut g = game.borrow_mut();
                // First press in a tick wins
                if g.input.hop.is_none() {
                    g.input.hop = Some(hop);
                }
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Drop the frame backlog when the tab comes back so timers don't jump
    fn setup_visibility(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Visible {
                let mut g = game.borrow_mut();
                g.last_time = 0.0;
                g.accumulator = 0.0;
                log::info!("Resumed (tab visible)");
            }
        });
        document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("WENP Hop (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the playable web version");

    demo::run(42, 60.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless scripted run: a bot that waits for a gap and hops toward the coin
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use wenp_hop::HudText;
    use wenp_hop::consts::*;
    use wenp_hop::sim::collision::{bear_hitbox, player_hitbox};
    use wenp_hop::sim::{GameEvent, GameState, Hop, TickInput, tick};

    /// Ticks between bot decisions (~4 hops per second)
    const THINK_EVERY: u64 = 30;

    pub fn run(seed: u64, seconds: f32) {
        let mut state = GameState::new(seed);
        let total_ticks = (seconds / SIM_DT) as u64;

        for _ in 0..total_ticks {
            let input = TickInput {
                hop: choose_hop(&state),
            };
            tick(&mut state, &input, SIM_DT);

            for event in state.drain_events() {
                match event {
                    GameEvent::LevelUp { level, .. } => log::info!("LEVEL UP! -> {}", level),
                    GameEvent::PlayerHit => log::info!("Hit by a bear"),
                    GameEvent::CoinCollected { score, .. } => log::info!("Coin, score {}", score),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        let hud = HudText::project(&state.progress);
        println!("{} | {} | {}", hud.score, hud.level, hud.coins);
    }

    fn choose_hop(state: &GameState) -> Option<Hop> {
        if state.time_ticks % THINK_EVERY != 0 || state.player.hit.is_stunned() {
            return None;
        }
        let next = state.player.pos + Hop::Up.delta();
        let next_box = player_hitbox(next);
        // Look a little ahead along each bear's path
        let lookahead = THINK_EVERY as f32 * SIM_DT;
        let blocked = state.spawner.bears.iter().any(|b| {
            let mut ahead = b.pos;
            ahead.x += b.speed * lookahead;
            next_box.overlaps(&bear_hitbox(b.pos)) || next_box.overlaps(&bear_hitbox(ahead))
        });
        if blocked { None } else { Some(Hop::Up) }
    }
}
