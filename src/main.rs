//! Bouncing Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

    use bouncing_ball::consts::*;
    use bouncing_ball::input::{get_key_from_event, key_to_input};
    use bouncing_ball::presenter::{self, FrameSync, colors};
    use bouncing_ball::renderer::{RenderState, Vertex, shapes};
    use bouncing_ball::sim::Tint;
    use bouncing_ball::{GameConfig, GameError, Presenter, Scene, SceneEvent, SceneRouter};

    /// Presenter backed by the WebGPU canvas and DOM labels
    struct WebPresenter {
        document: Document,
        render_state: Option<RenderState>,
        vertices: Vec<Vertex>,
    }

    impl WebPresenter {
        fn element(&self, id: &str) -> Option<Element> {
            self.document.get_element_by_id(id)
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.element(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_color(&self, id: &str, color: [f32; 4]) {
            if let Some(el) = self.element(id) {
                let style = format!("color: {}", presenter::css_color(color));
                let _ = el.set_attribute("style", &style);
            }
        }

        fn set_visible(&self, id: &str, visible: bool) {
            if let Some(el) = self.element(id) {
                let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
            }
        }

        /// Draw everything queued this frame
        fn flush(&mut self) {
            let vertices = std::mem::take(&mut self.vertices);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    impl Presenter for WebPresenter {
        fn draw_ball(&mut self, x: f64, y: f64, radius: f64, tint: Tint) {
            let center = glam::Vec2::new(x as f32, y as f32);
            self.vertices
                .extend(shapes::ball(center, radius as f32, tint));
        }

        fn set_speed_text(&mut self, speed: f64) {
            self.set_text("hud-speed", &presenter::speed_text(speed));
        }

        fn set_score_text(&mut self, score: u32, target: u32) {
            self.set_text("hud-score", &presenter::score_text(score, target));
        }

        fn set_max_speed_text(&mut self, max_speed: f64) {
            self.set_text("hud-max-speed", &presenter::max_speed_text(max_speed));
        }

        fn show_scene(&mut self, scene: Scene) {
            self.set_visible("welcome-screen", scene == Scene::Welcome);
            self.set_visible("game-screen", scene == Scene::Playing);
            self.set_visible("end-screen", matches!(scene, Scene::Ended { .. }));
            if !scene.is_ticking() {
                // Leave the last frame out of the next match
                self.vertices.clear();
                self.flush();
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        router: SceneRouter,
        sync: FrameSync,
        presenter: WebPresenter,
    }

    impl Game {
        /// Feed one event and refresh static screen text if the scene changed
        fn handle(&mut self, event: SceneEvent) {
            let result = self.router.handle(event);
            if result.changed() {
                self.present();
            }
        }

        /// Push the current state to the page
        fn present(&mut self) {
            let before = self.sync.shown();
            self.sync.present(&self.router, &mut self.presenter);
            if self.sync.shown() != before {
                self.fill_screen_text();
            }
            self.presenter.flush();
        }

        fn fill_screen_text(&self) {
            let p = &self.presenter;
            match self.router.scene() {
                Scene::Welcome => {
                    p.set_text(
                        "welcome-text",
                        &presenter::welcome_text(&self.router.welcome_params()),
                    );
                }
                Scene::Playing => {}
                Scene::Ended { win } => {
                    p.set_text("end-title", presenter::end_title(win));
                    p.set_color("end-title", if win { colors::WIN } else { colors::LOSS });
                    if let Some(summary) = self.router.summary() {
                        p.set_text("final-score", &presenter::final_score_text(&summary));
                    }
                }
            }
        }

        /// One animation frame: physics first, then the snapshot is read
        fn frame(&mut self) {
            if self.router.scene().is_ticking() {
                self.router.handle(SceneEvent::Tick);
            }
            self.present();
        }
    }

    fn require(document: &Document, id: &str) -> Result<Element, GameError> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::MissingElement(id.to_string()))
    }

    async fn create_renderer(canvas: HtmlCanvasElement) -> Result<RenderState, GameError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| GameError::Graphics(format!("surface creation failed: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Graphics(format!("no adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(
            surface,
            &adapter,
            ARENA_WIDTH as u32,
            ARENA_HEIGHT as u32,
            (ARENA_WIDTH as f32, ARENA_HEIGHT as f32),
        )
        .await
    }

    pub async fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Bouncing Ball starting...");

        let window = web_sys::window().ok_or_else(|| GameError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::MissingElement("document".into()))?;
        document.set_title(WINDOW_TITLE);

        let canvas: HtmlCanvasElement = require(&document, "canvas")?
            .dyn_into()
            .map_err(|_| GameError::MissingElement("canvas".into()))?;

        // Fixed 800x600, not resizable
        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);

        for id in ["hud-speed", "hud-score", "hud-max-speed"] {
            require(&document, id)?;
        }

        // Without a GPU the HUD and screens still work; the ball is just not drawn
        let render_state = match create_renderer(canvas).await {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("{e}");
                None
            }
        };

        let presenter = WebPresenter {
            document: document.clone(),
            render_state,
            vertices: Vec::new(),
        };
        presenter.set_color("hud-speed", colors::SPEED);
        presenter.set_color("hud-score", colors::SCORE);
        presenter.set_color("hud-max-speed", colors::MAX_SPEED);

        let game = Rc::new(RefCell::new(Game {
            router: SceneRouter::new(GameConfig::default()),
            sync: FrameSync::new(),
            presenter,
        }));
        game.borrow_mut().present();

        setup_buttons(&document, game.clone())?;
        setup_keyboard(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Bouncing Ball running!");
        Ok(())
    }

    fn on_click(
        document: &Document,
        id: &str,
        game: Rc<RefCell<Game>>,
        event: SceneEvent,
    ) -> Result<(), GameError> {
        let btn = require(document, id)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().handle(event);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        on_click(document, "start-btn", game.clone(), SceneEvent::StartPressed)?;
        on_click(document, "exit-btn", game.clone(), SceneEvent::ExitPressed)?;
        on_click(document, "restart-btn", game.clone(), SceneEvent::RestartPressed)?;
        on_click(document, "end-exit-btn", game, SceneEvent::ExitPressed)?;
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            // Unbound keys fall through untouched
            if let Some(input) = key_to_input(&get_key_from_event(&event)) {
                event.prevent_default();
                game.borrow_mut().handle(SceneEvent::Input(input));
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let exit = {
            let mut g = game.borrow_mut();
            g.frame();
            g.router.exit_requested()
        };

        if exit {
            log::info!("Bouncing Ball exiting");
            if let Some(window) = web_sys::window() {
                let _ = window.close();
            }
            return;
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {e}");
    }
}

/// Headless match: Welcome → Start → ticks until the match ends → Exit
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bouncing_ball::presenter::{FrameSync, LogPresenter};
    use bouncing_ball::{GameConfig, SceneEvent, SceneRouter};

    /// Generous cap; an untouched ball wins long before this
    const MAX_TICKS: u64 = 1_000_000;

    env_logger::init();
    log::info!("Bouncing Ball (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let mut router = SceneRouter::new(GameConfig::default());
    let mut sync = FrameSync::new();
    let mut presenter = LogPresenter::default();

    sync.present(&router, &mut presenter);
    router.handle(SceneEvent::StartPressed);

    let mut ticks = 0;
    while router.scene().is_ticking() && ticks < MAX_TICKS {
        router.handle(SceneEvent::Tick);
        sync.present(&router, &mut presenter);
        ticks += 1;
    }

    match router.summary() {
        Some(summary) => log::info!(
            "{} after {} ticks - final score {} / {}",
            bouncing_ball::presenter::end_title(summary.win),
            ticks,
            summary.score,
            summary.params.target()
        ),
        None => log::warn!("Match still running after {} ticks", ticks),
    }

    router.handle(SceneEvent::ExitPressed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
