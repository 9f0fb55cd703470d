//! Sky Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sky_flap::consts::SIM_DT;
    use sky_flap::platform::RawInput;
    use sky_flap::renderer::{TextSize, display_list, hud_text};
    use sky_flap::{FrameStatus, FrameToken, Game, SimConfig};

    /// Browser-side wrapper around the frame driver
    struct App {
        game: Game,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
        /// Pending requestAnimationFrame handle
        raf_id: Option<i32>,
    }

    impl App {
        /// Paint the current snapshot
        fn render(&self) {
            let snapshot = self.game.snapshot();
            let config = self.game.config();

            for quad in display_list(&snapshot, config) {
                let size = quad.size();
                self.ctx.set_fill_style_str(&quad.color.to_css());
                self.ctx.fill_rect(
                    quad.min.x as f64,
                    quad.min.y as f64,
                    size.x as f64,
                    size.y as f64,
                );
            }

            self.ctx.set_fill_style_str("white");
            self.ctx.set_text_align("center");
            let center_x = config.playfield_width as f64 / 2.0;
            for line in hud_text(&snapshot, config) {
                let font = match line.size {
                    TextSize::Large => "bold 40px sans-serif",
                    TextSize::Small => "18px sans-serif",
                };
                self.ctx.set_font(font);
                let _ = self.ctx.fill_text(&line.text, center_x, line.y as f64);
            }
        }

        /// Cancel the scheduled frame (if any) so nothing ticks until the next activate
        fn suspend(&mut self) {
            self.game.stop();
            self.last_time = 0.0;
            if let Some(id) = self.raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Sky Flap starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;

        let config = SimConfig::default();
        canvas.set_width(config.playfield_width as u32);
        canvas.set_height(config.playfield_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let app = Rc::new(RefCell::new(App {
            game,
            ctx,
            last_time: 0.0,
            raf_id: None,
        }));
        app.borrow().render();

        setup_input_handlers(&canvas, app.clone());
        setup_auto_pause(app);

        log::info!("Sky Flap running!");
        Ok(())
    }

    fn on_input(app: &Rc<RefCell<App>>, input: RawInput) {
        let token = app.borrow_mut().game.handle_input(&input);
        if let Some(token) = token {
            request_animation_frame(app.clone(), token);
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                on_input(&app, RawInput::PointerDown);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                on_input(&app, RawInput::TouchStart);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let input = RawInput::Key {
                    key: event.key(),
                    repeat: event.repeat(),
                };
                if input.is_activate() {
                    // Keep space from scrolling the page
                    event.prevent_default();
                }
                on_input(&app, input);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop ticking while the tab is hidden; the next activate resumes
    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if doc.hidden() {
                app.borrow_mut().suspend();
                log::info!("Auto-paused (tab hidden)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>, token: FrameToken) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let frame_app = app.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(frame_app, token, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().raf_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, token: FrameToken, time: f64) {
        let next = {
            let mut a = app.borrow_mut();

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };

            match a.game.frame(token, dt) {
                FrameStatus::Stale => return,
                FrameStatus::Continue(next) => {
                    a.last_time = time;
                    a.render();
                    Some(next)
                }
                FrameStatus::Suspended => {
                    a.last_time = 0.0;
                    a.raf_id = None;
                    a.render();
                    None
                }
            }
        };

        if let Some(next) = next {
            request_animation_frame(app, next);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use clap::Parser;

    use sky_flap::consts::SIM_DT;
    use sky_flap::sim::autopilot;
    use sky_flap::sim::{GameEvent, GamePhase};
    use sky_flap::{FrameStatus, Game, SimConfig};

    #[derive(Parser, Debug)]
    #[command(about = "Run the Sky Flap simulation headless on autopilot", version)]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum number of frames to simulate
        #[arg(long, default_value_t = 36_000)]
        frames: u32,
        /// Number of runs to play before stopping
        #[arg(long, default_value_t = 1)]
        runs: u32,
        /// JSON file overriding simulation constants
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the final snapshot as JSON
        #[arg(long)]
        dump_snapshot: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                SimConfig::from_json_str(&text)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });

        log::info!("Sky Flap (native) starting...");
        let mut game = Game::new(config, seed)?;

        let mut token = None;
        let mut finished_runs = 0u32;
        let mut best = 0u32;

        for _ in 0..args.frames {
            if autopilot::should_activate(game.state(), game.config()) {
                let idle = matches!(game.phase(), GamePhase::Start | GamePhase::GameOver);
                if idle && finished_runs >= args.runs {
                    break;
                }
                if let Some(t) = game.activate() {
                    token = Some(t);
                }
            }

            let Some(current) = token else {
                break;
            };
            token = match game.frame(current, SIM_DT) {
                FrameStatus::Continue(next) => Some(next),
                FrameStatus::Suspended | FrameStatus::Stale => None,
            };

            for event in &game.state().events {
                if let GameEvent::Crashed { cause } = event {
                    finished_runs += 1;
                    let state = game.state();
                    best = best.max(state.score);
                    println!(
                        "Run {}: score {} after {} ticks ({:?})",
                        finished_runs, state.score, state.time_ticks, cause
                    );
                }
            }
        }

        println!("Seed {}: {} run(s), best score {}", seed, finished_runs, best);

        if args.dump_snapshot {
            println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
