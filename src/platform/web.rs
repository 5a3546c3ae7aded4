//! Browser bridge
//!
//! A JavaScript host (canvas renderer, keyboard listeners, Web Audio) drives the
//! game through [`WebGame`]. Data crosses the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::assets::MANIFEST;
use crate::settings::Tuning;
use crate::sim::{GameState, InputEvent, handle_input, tick};

/// Game instance exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session sized to the canvas. `tuning_json` may override balance values.
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, viewport_height: f32, tuning_json: Option<String>) -> WebGame {
        let mut tuning = match tuning_json.as_deref().map(Tuning::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Ignoring tuning override: {}", e);
                Tuning::default()
            }
            None => Tuning::default(),
        };
        if viewport_width > 0.0 && viewport_height > 0.0 {
            tuning.viewport_width = viewport_width;
            tuning.viewport_height = viewport_height;
        }

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            state: GameState::with_tuning(seed, tuning),
        }
    }

    /// Per-frame host callback
    pub fn tick(&mut self, delta_ms: f32) {
        tick(&mut self.state, delta_ms);
    }

    pub fn jump_pressed(&mut self) {
        handle_input(&mut self.state, InputEvent::JumpPressed);
    }

    pub fn duck_pressed(&mut self) {
        handle_input(&mut self.state, InputEvent::DuckPressed);
    }

    pub fn duck_released(&mut self) {
        handle_input(&mut self.state, InputEvent::DuckReleased);
    }

    pub fn restart_pressed(&mut self) {
        handle_input(&mut self.state, InputEvent::RestartPressed);
    }

    /// Everything needed to draw the current frame
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.state
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Events raised since the last call (sound cues, transitions)
    pub fn drain_events_json(&mut self) -> Result<String, JsValue> {
        let events = self.state.drain_events();
        serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Keys the host must load before the first tick
    pub fn asset_manifest_json() -> Result<String, JsValue> {
        serde_json::to_string(&MANIFEST[..]).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
