//! Game tuning
//!
//! Every balance number the play-state engine uses. Loaded from JSON so the
//! difficulty curve can be adjusted without a rebuild; missing fields fall back
//! to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors from loading or validating a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside the range the engine can run with
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Most timer periods a single capped frame may complete
const MAX_FIRES_PER_FRAME: f32 = 1000.0;

/// Balance and layout values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Difficulty ramp ===
    /// Scroll speed at the start of every run (px per frame)
    pub initial_speed: f32,
    /// Added to scroll speed on every score tick
    pub speed_step: f32,
    /// Score tick period
    pub score_period_ms: f32,
    /// Chime and flash every this many points
    pub milestone_interval: u64,

    // === Spawning ===
    /// Distance accumulator threshold (speed x ms)
    pub spawn_threshold: f32,
    /// Gap past the right viewport edge, inclusive range
    pub spawn_gap_min: f32,
    pub spawn_gap_max: f32,
    /// Heights of the bird's bottom edge above the ground
    pub bird_altitudes: [f32; 2],
    /// Bird collision box height = sprite height / this
    pub bird_hitbox_divisor: f32,

    // === Intro ===
    /// Height of the start trigger's bottom edge above the ground
    pub trigger_elevation: f32,
    /// Background growth per expand tick
    pub expand_step: f32,
    pub expand_period_ms: f32,

    // === Agent ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Upward velocity set by a jump (px/s)
    pub jump_impulse: f32,

    // === Frame pacing ===
    /// Longest frame delta accepted from the host
    pub max_frame_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: 1000.0,
            viewport_height: 340.0,

            initial_speed: 10.0,
            speed_step: 0.01,
            score_period_ms: 100.0,
            milestone_interval: 100,

            spawn_threshold: 15000.0,
            spawn_gap_min: 600.0,
            spawn_gap_max: 900.0,
            bird_altitudes: [20.0, 50.0],
            bird_hitbox_divisor: 1.5,

            trigger_elevation: 150.0,
            expand_step: 20.0,
            expand_period_ms: 10.0,

            gravity: 5000.0,
            jump_impulse: 1600.0,

            max_frame_ms: 100.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing out a template)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let values = [
            self.viewport_width,
            self.viewport_height,
            self.initial_speed,
            self.speed_step,
            self.score_period_ms,
            self.spawn_threshold,
            self.spawn_gap_min,
            self.spawn_gap_max,
            self.bird_altitudes[0],
            self.bird_altitudes[1],
            self.bird_hitbox_divisor,
            self.trigger_elevation,
            self.expand_step,
            self.expand_period_ms,
            self.gravity,
            self.jump_impulse,
            self.max_frame_ms,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(TuningError::Invalid("values must be finite"));
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(TuningError::Invalid("viewport must have positive size"));
        }
        if !(self.score_period_ms > 0.0 && self.expand_period_ms > 0.0) {
            return Err(TuningError::Invalid("timer periods must be positive"));
        }
        if self.max_frame_ms / self.score_period_ms > MAX_FIRES_PER_FRAME
            || self.max_frame_ms / self.expand_period_ms > MAX_FIRES_PER_FRAME
        {
            return Err(TuningError::Invalid("timer period too short for max_frame_ms"));
        }
        if !(self.expand_step > 0.0) {
            return Err(TuningError::Invalid("expand_step must be positive"));
        }
        if !(self.spawn_threshold > 0.0) {
            return Err(TuningError::Invalid("spawn_threshold must be positive"));
        }
        if !(self.spawn_gap_min >= 0.0 && self.spawn_gap_min <= self.spawn_gap_max) {
            return Err(TuningError::Invalid("spawn gap range is empty"));
        }
        if !(self.initial_speed >= 0.0 && self.speed_step >= 0.0) {
            return Err(TuningError::Invalid("speed must not decrease"));
        }
        if self.bird_altitudes.iter().any(|a| *a < 0.0) {
            return Err(TuningError::Invalid("bird altitudes must not be below ground"));
        }
        if self.milestone_interval == 0 {
            return Err(TuningError::Invalid("milestone_interval must be nonzero"));
        }
        if !(self.bird_hitbox_divisor >= 1.0) {
            return Err(TuningError::Invalid("bird_hitbox_divisor must be at least 1"));
        }
        if !(self.gravity > 0.0 && self.jump_impulse > 0.0) {
            return Err(TuningError::Invalid("gravity and jump_impulse must be positive"));
        }
        if !(self.max_frame_ms > 0.0) {
            return Err(TuningError::Invalid("max_frame_ms must be positive"));
        }
        Ok(())
    }

    /// Read a tuning file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Self::default()
            }
        }
    }
}
