//! Dino Runner - a side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic play-state engine (run states, spawning, collisions, scoring)
//! - `hud`: Score text formatting and milestone flash
//! - `assets`: Stable asset keys the host must resolve before the run starts
//! - `platform`: Host bridges (WebAssembly)
//! - `settings`: Data-driven tuning

pub mod assets;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Tuning, TuningError};
pub use sim::{GameEvent, GameState, InputEvent, RunState, SoundCue, tick};

/// World geometry constants that are fixed by the art assets
pub mod consts {
    /// Agent sprite frame (dino-run)
    pub const AGENT_FRAME_WIDTH: f32 = 88.0;
    pub const AGENT_FRAME_HEIGHT: f32 = 94.0;

    /// Agent collision box, centered horizontally in the frame
    pub const AGENT_BOX_WIDTH: f32 = 44.0;
    pub const AGENT_BOX_X_OFFSET: f32 = (AGENT_FRAME_WIDTH - AGENT_BOX_WIDTH) / 2.0;

    /// Standing box height (H). Height + top inset equals this for every posture.
    pub const AGENT_STAND_HEIGHT: f32 = 92.0;
    /// Ducking box height (H')
    pub const AGENT_DUCK_HEIGHT: f32 = 58.0;

    /// Ground line in world space (y-up)
    pub const GROUND_Y: f32 = 0.0;

    /// Start trigger region size
    pub const START_TRIGGER_WIDTH: f32 = AGENT_FRAME_WIDTH;
    pub const START_TRIGGER_HEIGHT: f32 = 10.0;

    /// Flying obstacle sprite frame (enemy-bird)
    pub const BIRD_FRAME_WIDTH: f32 = 92.0;
    pub const BIRD_FRAME_HEIGHT: f32 = 77.0;
    /// Frames in the bird flap loop
    pub const BIRD_FLAP_FRAMES: u32 = 2;
    /// Milliseconds per flap frame
    pub const BIRD_FLAP_FRAME_MS: f32 = 166.0;

    /// Score display width in digits
    pub const SCORE_DIGITS: usize = 6;
}
