//! Fruit Survivor entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent};

    use fruit_survivor::consts::TICKS_PER_SECOND;
    use fruit_survivor::sim::{Snapshot, Viewport};
    use fruit_survivor::{FrameOutcome, Session, Settings};

    fn window_size() -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w as f32, h as f32)
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn set_text(document: &Document, selector: &str, text: &str) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    /// Hand a completed tick to the DOM presentation layer
    fn present(session: &Session, snapshot: &Snapshot) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(world) = document.get_element_by_id("world") {
            let transform = format!(
                "translate(-{}px, -{}px)",
                snapshot.camera.x, snapshot.camera.y
            );
            if let Ok(world) = world.clone().dyn_into::<web_sys::HtmlElement>() {
                let _ = world.style().set_property("transform", &transform);
            }
            match snapshot.to_json() {
                Ok(json) => {
                    let _ = world.set_attribute("data-snapshot", &json);
                }
                Err(e) => log::warn!("Snapshot encode failed: {}", e),
            }
        }

        if session.settings().show_hud {
            let player = &snapshot.player;
            let stats = &snapshot.stats;
            let health = format!("{}/{}", player.health, player.max_health);
            let time = format!("{}s", snapshot.time_survived_secs());
            set_text(&document, "#hud-health .hud-value", &health);
            set_text(&document, "#hud-time .hud-value", &time);
            set_text(&document, "#hud-score .hud-value", &stats.score.to_string());
            let enemies = stats.enemy_count.to_string();
            set_text(&document, "#hud-enemies .hud-value", &enemies);
            set_text(&document, "#hud-tier .hud-value", &stats.tier.to_string());
        }
    }

    /// Show the game-over overlay with the latched final stats
    fn show_game_over(outcome: &FrameOutcome) {
        let Some(info) = outcome.game_over else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        set_text(&document, "#final-score", &info.final_score.to_string());
        let secs = info.final_time / TICKS_PER_SECOND;
        set_text(&document, "#final-time", &format!("{}s", secs));
        set_hidden(&document, "game-over", false);
        log::info!("Game Over! Score: {}, Time: {}s", info.final_score, secs);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        let level = settings.log_level_filter().to_level().unwrap_or(log::Level::Info);
        console_log::init_with_level(level).expect("Failed to init logger");

        log::info!("Fruit Survivor starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let (w, h) = window_size();
        let seed = js_sys::Date::now() as u64;
        let session = Rc::new(RefCell::new(Session::new(
            Viewport::from_window(w, h),
            seed,
            settings,
        )));

        setup_input_handlers(session.clone());
        setup_resize_handler(session.clone());
        setup_buttons(&document, session.clone());

        set_hidden(&document, "loading", true);
        if !session.borrow().settings().show_hud {
            set_hidden(&document, "hud", true);
        }
        schedule(&session);

        log::info!("Fruit Survivor running!");
    }

    fn setup_input_handlers(session: Rc<RefCell<Session>>) {
        let window = web_sys::window().expect("no window");

        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "h" || key == "H" {
                    let show = session.borrow_mut().toggle_hud();
                    session.borrow().settings().save();
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        set_hidden(&document, "hud", !show);
                    }
                    return;
                }
                session.borrow_mut().key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                session.borrow_mut().key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                session.borrow_mut().release_all_keys();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(session: Rc<RefCell<Session>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = window_size();
            session.borrow_mut().request_resize(w, h, now_ms());
            schedule(&session);
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, session: Rc<RefCell<Session>>) {
        // Start screen: enter play
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                session.borrow_mut().activate(js_sys::Date::now() as u64);
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_hidden(&document, "start-screen", true);
                }
                schedule(&session);
            });
            let _ =
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Game over: try again
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let seed = js_sys::Date::now() as u64;
                session.borrow_mut().restart(seed);
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_hidden(&document, "game-over", true);
                }
                schedule(&session);
            });
            let _ =
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Request a display frame only while the session has work for one.
    ///
    /// The loop goes idle on the start and game-over screens; the button and
    /// resize handlers wake it again.
    fn schedule(session: &Rc<RefCell<Session>>) {
        if session.borrow_mut().should_request_frame() {
            request_animation_frame(session.clone());
        }
    }

    fn request_animation_frame(session: Rc<RefCell<Session>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(session, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(session: Rc<RefCell<Session>>, time: f64) {
        {
            let mut s = session.borrow_mut();
            let outcome = s.frame(time);
            if let Some(snapshot) = &outcome.snapshot {
                present(&s, snapshot);
            }
            show_game_over(&outcome);
        }

        schedule(&session);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fruit_survivor::consts::TICKS_PER_SECOND;
    use fruit_survivor::sim::Viewport;
    use fruit_survivor::{Session, Settings};

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level_filter())
        .parse_default_env()
        .init();
    log::info!("Fruit Survivor (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let mut session = Session::new(Viewport::from_window(1280.0, 720.0), 2024, settings);
    session.activate(2024);

    // Circle the map: hold each direction pair for a few seconds
    const SCRIPT: [&[&str]; 4] = [&["d"], &["s", "d"], &["a"], &["w", "a"]];
    const MAX_TICKS: u64 = TICKS_PER_SECOND * 60 * 5;

    let mut now = 0.0;
    let mut phase = None;
    while session.is_active() && session.state().game_time < MAX_TICKS {
        let current = session.state().game_time / 180;
        if phase != Some(current) {
            phase = Some(current);
            session.release_all_keys();
            for key in SCRIPT[current as usize % SCRIPT.len()] {
                session.key_down(key);
            }
        }

        let outcome = session.frame(now);
        if let Some(info) = outcome.game_over {
            log::info!(
                "Game Over! Score: {}, Time: {}s",
                info.final_score,
                info.final_time / TICKS_PER_SECOND
            );
        }
        now += 1000.0 / TICKS_PER_SECOND as f64;
    }

    let state = session.state();
    log::info!(
        "Run finished: {} ticks, score {}, health {}/{}, {} enemies alive",
        state.game_time,
        state.score,
        state.player.health,
        state.player.max_health,
        state.enemies.len()
    );
}
