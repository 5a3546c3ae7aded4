//! Read-only view of the play state for a rendering host
//!
//! Everything a host needs to draw one frame, with asset keys already resolved.
//! Serializes to JSON for hosts on the other side of an FFI boundary.

use serde::Serialize;

use super::agent::AgentVisual;
use super::geometry::Aabb;
use super::spawner::ObstacleKind;
use super::state::{GameState, RunState};
use crate::hud;

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub asset: &'static str,
    pub sprite: Aabb,
    pub hitbox: Aabb,
    pub frame: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub run_state: RunState,
    pub agent_x: f32,
    pub agent_y: f32,
    pub agent_box: Aabb,
    pub agent_visual: AgentVisual,
    pub agent_asset: &'static str,
    pub agent_animated: bool,
    pub obstacles: Vec<ObstacleView>,
    pub background_width: f32,
    pub scroll_x: f32,
    pub score_text: String,
    /// Hidden until the first game over
    pub best_text: Option<String>,
    pub score_alpha: f32,
    /// Score is shown once the run has started
    pub score_visible: bool,
    pub game_over_visible: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let agent = &state.agent;
        let obstacles = state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                id: o.id,
                kind: o.kind,
                asset: o.kind.asset_key(),
                sprite: o.sprite,
                hitbox: o.bounds(),
                frame: o.frame(),
            })
            .collect();

        Self {
            run_state: state.run_state,
            agent_x: agent.x,
            agent_y: agent.y,
            agent_box: agent.bounds(),
            agent_visual: agent.visual,
            agent_asset: agent.visual.asset_key(),
            // Animations are paused during game over
            agent_animated: agent.visual.is_animated() && state.run_state != RunState::GameOver,
            obstacles,
            background_width: state.background_width,
            scroll_x: state.scroll_x,
            score_text: hud::format_score(state.clock.score),
            best_text: state
                .clock
                .has_best
                .then(|| hud::format_best(state.clock.best)),
            score_alpha: hud::flash_alpha(state.clock.flash_elapsed()),
            score_visible: matches!(state.run_state, RunState::Running | RunState::GameOver),
            game_over_visible: state.game_over_visible,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_snapshot() {
        let state = GameState::new(1);
        let snap = state.snapshot();
        assert_eq!(snap.run_state, RunState::Idle);
        assert_eq!(snap.score_text, "000000");
        assert!(snap.best_text.is_none());
        assert!(!snap.score_visible);
        assert_eq!(snap.agent_asset, "dino-idle");
        assert_eq!(snap.background_width, 0.0);
    }

    #[test]
    fn test_game_over_snapshot() {
        let mut state = GameState::new(1);
        state.begin_intro();
        while !state.expand_background() {}
        state.clock.score = 345;
        state.game_over();

        let snap = state.snapshot();
        assert!(snap.game_over_visible);
        assert_eq!(snap.best_text.as_deref(), Some("HI 000345"));
        assert_eq!(snap.agent_asset, "dino-hurt");
        assert!(!snap.agent_animated);
    }

    #[test]
    fn test_json_shape() {
        let mut state = GameState::new(5);
        state.spawn_obstacle();
        let json = state.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["run_state"], "Idle");
        assert_eq!(value["obstacles"].as_array().map(|a| a.len()), Some(1));
    }
}
