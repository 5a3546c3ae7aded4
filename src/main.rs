//! Dino Runner entry point
//!
//! On the web the JavaScript host owns the frame loop and drives
//! `platform::web::WebGame`; this only installs logging. Natively it runs a
//! headless demo session with the autopilot at a fixed 60 Hz.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Dino Runner starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_runner::sim::{GameEvent, GameState, autopilot, handle_input, tick};
    use dino_runner::{Tuning, hud};

    env_logger::init();
    log::info!("Dino Runner (native) starting...");

    // Usage: dino-runner [tuning.json] [seed] [seconds]
    let mut args = std::env::args().skip(1);
    let tuning = args.next().map(Tuning::load).unwrap_or_default();
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5EED_u64);
    let seconds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    const FRAME_MS: f32 = 1000.0 / 60.0;
    let mut state = GameState::with_tuning(seed, tuning);
    let mut runs = 0u32;

    for _ in 0..seconds * 60 {
        if let Some(input) = autopilot(&state) {
            handle_input(&mut state, input);
        }
        tick(&mut state, FRAME_MS);

        for event in state.drain_events() {
            if let GameEvent::GameOver { score, best } = event {
                runs += 1;
                println!(
                    "run {:>3}: {}  {}",
                    runs,
                    hud::format_score(score),
                    hud::format_best(best)
                );
            }
        }
    }

    println!(
        "\n{} simulated seconds, {} game over(s), current {}  {}",
        seconds,
        runs,
        hud::format_score(state.clock.score),
        hud::format_best(state.clock.best.max(state.clock.score))
    );
}
