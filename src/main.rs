//! Skyfall entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use skyfall::audio::AudioManager;
    use skyfall::consts::*;
    use skyfall::renderer::{RenderState, mesh};
    use skyfall::settings::Settings;
    use skyfall::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let audio = AudioManager::new(settings.music_volume);
            Self {
                state: GameState::new(seed),
                render_state: None,
                audio,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.activate = false;
                self.input.reset = false;
            }
            if substeps == MAX_SUBSTEPS {
                // Drop the backlog rather than spiraling
                self.accumulator = 0.0;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            // Drive audio from sim events
            for event in self.state.drain_events() {
                match event {
                    GameEvent::Started => {
                        self.audio.resume();
                        self.audio.start_music();
                    }
                    GameEvent::GameOver | GameEvent::Reset => self.audio.stop_music(),
                    GameEvent::Jumped => {}
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Live distance readout
            if let Some(el) = document.get_element_by_id("hud-distance") {
                if self.state.phase == GamePhase::Running {
                    el.set_text_content(Some(&format!(
                        "Distance: {:.2} units",
                        self.state.distance()
                    )));
                } else if self.state.phase == GamePhase::Idle {
                    el.set_text_content(Some("Press Space or click to start"));
                }
            }

            // FPS counter
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    el.set_text_content(None);
                }
            }

            // Game over panel
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(time_el) = document.get_element_by_id("final-time") {
                        time_el.set_text_content(Some(&format!(
                            "You lasted {:.2} seconds",
                            self.state.elapsed_secs()
                        )));
                    }
                    if let Some(dist_el) = document.get_element_by_id("final-distance") {
                        dist_el.set_text_content(Some(&format!(
                            "Distance traveled: {:.2} units",
                            self.state.distance()
                        )));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skyfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let star_count = game.borrow().settings.quality.star_count();
        let decorations = mesh::decorations(seed, star_count);
        let render_state = RenderState::new(surface, &adapter, width, height, &decorations).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_blur_mute(game.clone());
        setup_resize(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Skyfall running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space starts, flaps, or (in game over) resets and restarts
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.key() == " " {
                    event.prevent_default();
                    game.borrow_mut().input.activate = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer click: start-or-jump only; game over waits for the key
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase != GamePhase::GameOver {
                    g.input.activate = true;
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.reset = true;
                log::info!("Session reset");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_blur_mute(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyfall::consts::SIM_DT;
    use skyfall::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Skyfall (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Play a deterministic demo episode: flap every half second
    let mut state = GameState::new(0xC0FFEE);
    let activate = TickInput {
        activate: true,
        reset: false,
    };
    tick(&mut state, &activate);
    let mut ticks: u64 = 1;
    while state.phase == GamePhase::Running && ticks < 36_000 {
        let input = if ticks % 30 == 0 {
            activate
        } else {
            TickInput::default()
        };
        tick(&mut state, &input);
        ticks += 1;
    }

    log::info!(
        "Demo run over after {:.2}s: distance {:.2} units, {} obstacles live",
        state.run_ticks as f32 * SIM_DT,
        state.distance(),
        state.obstacles.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
