//! POnG entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use pong::consts::WINDOW_TITLE;
    use pong::platform::canvas_y;
    use pong::renderer::canvas::CanvasSurface;
    use pong::renderer::render;
    use pong::{Session, Tuning};

    #[derive(Debug, thiserror::Error)]
    pub enum StartupError {
        #[error("no window")]
        NoWindow,
        #[error("no document")]
        NoDocument,
        #[error("no element with id `canvas`")]
        NoCanvas,
        #[error("canvas has no 2D context")]
        NoContext,
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
    }

    impl Game {
        /// Run due ticks and draw the latest frame
        fn frame(&mut self, time: f64) {
            if self.session.update(time) > 0 {
                render(&mut self.surface, self.session.last_frame());
            }
        }
    }

    pub fn run() -> Result<(), StartupError> {
        log::info!("POnG starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;
        document.set_title(WINDOW_TITLE);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(StartupError::NoCanvas)?
            .dyn_into()
            .map_err(|_| StartupError::NoCanvas)?;

        let tuning = Tuning::load();
        canvas.set_width(tuning.field_width as u32);
        canvas.set_height(tuning.field_height as u32);

        let surface = CanvasSurface::new(&canvas).ok_or(StartupError::NoContext)?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning, seed),
            surface,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("POnG running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - paddle one follows the pointer
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let rect = canvas_clone.get_bounding_client_rect();
                let field_height = g.session.tuning().field_height;
                let y = canvas_y(
                    event.client_y() as f32,
                    rect.top() as f32,
                    rect.height() as f32,
                    field_height,
                );
                g.session.on_pointer_move(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - start the next rally
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.on_click();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window went away, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use pong::renderer::{TextGrid, render};
    use pong::{Session, Tuning, TuningError};

    /// Ticks simulated when no count is given (30 seconds of play)
    const DEFAULT_TICKS: u64 = 3000;

    #[derive(Debug, thiserror::Error)]
    pub enum StartupError {
        #[error(transparent)]
        Tuning(#[from] TuningError),
        #[error("invalid tick count `{0}`")]
        Ticks(String),
        #[error("usage: pong [TUNING_JSON] [TICKS]")]
        Usage,
    }

    struct Args {
        tuning: Option<PathBuf>,
        ticks: u64,
    }

    fn parse_args(args: &[String]) -> Result<Args, StartupError> {
        let parse_ticks = |s: &String| s.parse::<u64>().map_err(|_| StartupError::Ticks(s.clone()));
        match args {
            [] => Ok(Args {
                tuning: None,
                ticks: DEFAULT_TICKS,
            }),
            [one] => match one.parse::<u64>() {
                Ok(ticks) => Ok(Args {
                    tuning: None,
                    ticks,
                }),
                Err(_) => Ok(Args {
                    tuning: Some(PathBuf::from(one)),
                    ticks: DEFAULT_TICKS,
                }),
            },
            [path, ticks] => Ok(Args {
                tuning: Some(PathBuf::from(path)),
                ticks: parse_ticks(ticks)?,
            }),
            _ => Err(StartupError::Usage),
        }
    }

    /// Run an autoplay match without a display and print the last frame
    pub fn run(args: &[String]) -> Result<(), StartupError> {
        let args = parse_args(args)?;
        let tuning = match &args.tuning {
            Some(path) => Tuning::load_file(path)?,
            None => Tuning::default(),
        };

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::info!("Headless autoplay for {} ticks, seed {}", args.ticks, seed);

        let mut session = Session::new(tuning, seed);
        session.set_autoplay(true);
        for _ in 0..args.ticks {
            session.step();
        }

        let state = session.state();
        log::info!(
            "Final score {} - {} after {} ticks",
            state.score_one,
            state.score_two,
            session.ticks()
        );

        let field = session.tuning();
        let mut grid = TextGrid::new(80, 30, field.field_width, field.field_height);
        render(&mut grid, session.last_frame());
        print!("{}", grid);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("POnG (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = headless::run(&args) {
        log::error!("Something went wrong: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
