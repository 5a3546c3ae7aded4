//! Deterministic play-state engine
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Host-reported frame deltas only, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (obstacles by spawn id)
//! - No rendering, audio or platform dependencies

pub mod agent;
pub mod autopilot;
pub mod clock;
pub mod geometry;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use agent::{Agent, AgentVisual, BoxProfile, Posture};
pub use autopilot::autopilot;
pub use clock::{ScoreClock, Timer};
pub use geometry::Aabb;
pub use snapshot::{ObstacleView, Snapshot};
pub use spawner::{CATALOG, Obstacle, ObstacleKind, Spawner, place_obstacle};
pub use state::{GameEvent, GameState, MAX_PENDING_EVENTS, RunState, SoundCue};
pub use tick::{InputEvent, handle_input, tick};
