//! Asset keys
//!
//! The host's loader resolves every key in [`MANIFEST`] before the run starts.
//! The core only ever refers to assets by these strings.

use serde::Serialize;

pub const DINO_IDLE: &str = "dino-idle";
pub const DINO_RUN: &str = "dino-run";
pub const DINO_DOWN: &str = "dino-down";
pub const DINO_HURT: &str = "dino-hurt";
pub const ENEMY_BIRD: &str = "enemy-bird";
pub const GROUND: &str = "ground";
pub const OBSTACLES: [&str; 6] = [
    "obstacle-1",
    "obstacle-2",
    "obstacle-3",
    "obstacle-4",
    "obstacle-5",
    "obstacle-6",
];
pub const GAME_OVER: &str = "game-over";
pub const RESTART: &str = "restart";
pub const SOUND_JUMP: &str = "jump";
pub const SOUND_HIT: &str = "hit";
pub const SOUND_REACH: &str = "reach";

/// How the loader should treat a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetKind {
    Image,
    /// Horizontal strip of equally sized frames
    Spritesheet { frame_width: u32, frame_height: u32 },
    Audio,
}

/// One entry in the load list
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssetEntry {
    pub key: &'static str,
    pub kind: AssetKind,
}

const fn image(key: &'static str) -> AssetEntry {
    AssetEntry {
        key,
        kind: AssetKind::Image,
    }
}

const fn sheet(key: &'static str, frame_width: u32, frame_height: u32) -> AssetEntry {
    AssetEntry {
        key,
        kind: AssetKind::Spritesheet {
            frame_width,
            frame_height,
        },
    }
}

const fn audio(key: &'static str) -> AssetEntry {
    AssetEntry {
        key,
        kind: AssetKind::Audio,
    }
}

/// Everything the host must have loaded before the core starts
pub static MANIFEST: [AssetEntry; 17] = [
    audio(SOUND_JUMP),
    audio(SOUND_HIT),
    audio(SOUND_REACH),
    image(DINO_HURT),
    image(RESTART),
    image(GAME_OVER),
    image(DINO_IDLE),
    image(GROUND),
    sheet(DINO_RUN, 88, 94),
    sheet(DINO_DOWN, 118, 94),
    sheet(ENEMY_BIRD, 92, 77),
    image(OBSTACLES[0]),
    image(OBSTACLES[1]),
    image(OBSTACLES[2]),
    image(OBSTACLES[3]),
    image(OBSTACLES[4]),
    image(OBSTACLES[5]),
];

/// Look up a manifest entry by key
pub fn find(key: &str) -> Option<&'static AssetEntry> {
    MANIFEST.iter().find(|e| e.key == key)
}
