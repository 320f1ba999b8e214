//! Galaxy Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{EventTarget, HtmlCanvasElement};

    use galaxy_dash::renderer::{self, RenderState};
    use galaxy_dash::sim::{GameState, GameStatus, SurfaceSize, TickInput, tick};
    use galaxy_dash::tuning::Tunables;

    /// A registered DOM event listener, deregistered on drop so restarts
    /// and unmounts never stack handlers
    struct EventListener {
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl EventListener {
        fn add(
            target: &EventTarget,
            event: &'static str,
            handler: impl FnMut(web_sys::Event) + 'static,
        ) -> Self {
            let closure = Closure::<dyn FnMut(_)>::new(handler);
            let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            Self {
                target: target.clone(),
                event,
                closure,
            }
        }
    }

    impl Drop for EventListener {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        /// Cancellation token for the currently scheduled frame loop;
        /// setting it stops stale callbacks from re-scheduling
        loop_token: Rc<Cell<bool>>,
        /// Listener handles scoped to the mounted lifetime of the game
        listeners: Vec<EventListener>,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, tunables: Tunables) -> Self {
            Self {
                state: GameState::new(seed, width, height, tunables),
                render_state: None,
                input: TickInput::default(),
                loop_token: Rc::new(Cell::new(false)),
                listeners: Vec::new(),
            }
        }

        /// Advance one frame; `time` is the rAF timestamp in ms.
        fn update(&mut self, time: f64) {
            let input = self.input;
            tick(&mut self.state, &input, time);
            // Clear one-shot inputs after processing
            self.input.jump = false;
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = renderer::build_frame(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        render_state.resize(w, h);
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
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&format!("Score: {}", self.state.score)));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.status == GameStatus::Over {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el
                            .set_text_content(Some(&format!("Final Score: {}", self.state.score)));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Rebuild the simulation for a fresh run on the same surface
        fn restart(&mut self, seed: u64) {
            let SurfaceSize { width, height } = self.state.surface;
            self.state = GameState::new(seed, width, height, self.state.tunables);
            self.input = TickInput::default();
        }

        /// Apply a new canvas size to both renderer and simulation
        fn resize(&mut self, width: u32, height: u32) {
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
            self.state.resize(width as f32, height as f32);
        }
    }

    /// Canvas size in device pixels
    fn canvas_device_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width().max(0) as f64 * dpr) as u32;
        let height = (canvas.client_height().max(0) as f64 * dpr) as u32;
        (width, height)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Galaxy Dash starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window; cannot start");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document; cannot start");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #canvas element; cannot start");
                return;
            }
        };

        let (width, height) = canvas_device_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let tunables = Tunables::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            width as f32,
            height as f32,
            tunables,
        )));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU; any missing precondition logs and bails
        // without drawing a partial frame
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {e}");
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {e}");
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => render_state,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                return;
            }
        };
        game.borrow_mut().render_state = Some(render_state);

        let listeners = setup_handlers(&window, &canvas, game.clone());
        game.borrow_mut().listeners = listeners;

        start_loop(&game);

        log::info!("Galaxy Dash running!");
    }

    /// Register input, resize, and restart handlers. The returned handles
    /// deregister everything when dropped.
    fn setup_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Vec<EventListener> {
        let mut listeners = Vec::new();
        let window_target: &EventTarget = window.as_ref();

        // Any key and any pointer button both mean "jump" - intentional,
        // preserved for parity with the original game
        {
            let game = game.clone();
            listeners.push(EventListener::add(window_target, "keydown", move |_| {
                game.borrow_mut().input.jump = true;
            }));
        }
        {
            let game = game.clone();
            listeners.push(EventListener::add(window_target, "mousedown", move |_| {
                game.borrow_mut().input.jump = true;
            }));
        }

        {
            let game = game.clone();
            let window = window.clone();
            let canvas = canvas.clone();
            listeners.push(EventListener::add(window_target, "resize", move |_| {
                let (width, height) = canvas_device_size(&window, &canvas);
                canvas.set_width(width);
                canvas.set_height(height);
                game.borrow_mut().resize(width, height);
            }));
        }

        if let Some(btn) = window
            .document()
            .and_then(|d| d.get_element_by_id("restart-btn"))
        {
            let game_for_btn = game.clone();
            listeners.push(EventListener::add(btn.as_ref(), "click", move |_| {
                let seed = js_sys::Date::now() as u64;
                {
                    let mut g = game_for_btn.borrow_mut();
                    // Cancel any frame still scheduled for the old run
                    g.loop_token.set(true);
                    g.restart(seed);
                }
                start_loop(&game_for_btn);
                log::info!("Game restarted with seed: {}", seed);
            }));
        }

        listeners
    }

    /// Kick off a fresh frame loop with its own cancellation token.
    fn start_loop(game: &Rc<RefCell<Game>>) {
        let token = Rc::new(Cell::new(false));
        game.borrow_mut().loop_token = token.clone();
        schedule_frame(game.clone(), token);
    }

    fn schedule_frame(game: Rc<RefCell<Game>>, token: Rc<Cell<bool>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(game, token, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(game: Rc<RefCell<Game>>, token: Rc<Cell<bool>>, time: f64) {
        if token.get() {
            return;
        }

        let running = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
            g.state.status == GameStatus::Running
        };

        // Voluntary self-halt on game over; restart starts a new loop
        if running {
            schedule_frame(game, token);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Galaxy Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a render surface: fixed seed, synthetic
/// 60 Hz timestamps, a jump every 45 frames.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use galaxy_dash::Tunables;
    use galaxy_dash::sim::{GameState, GameStatus, TickInput, tick};

    let mut state = GameState::new(0xD07, 800.0, 600.0, Tunables::load());
    let mut frames: u64 = 0;

    while state.status == GameStatus::Running && frames < 3600 {
        let input = TickInput {
            jump: frames % 45 == 0,
        };
        tick(&mut state, &input, frames as f64 * (1000.0 / 60.0));
        frames += 1;
    }

    log::info!(
        "Headless run finished after {} frames (status {:?})",
        frames,
        state.status
    );
    println!("Final score: {}", state.score);
}
