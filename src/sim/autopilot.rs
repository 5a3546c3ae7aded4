//! Demo-mode player
//!
//! Looks at the nearest obstacle ahead and decides which input to send this
//! frame. Used by the headless driver and attract screens; never by the tick.

use super::agent::Posture;
use super::state::{GameState, RunState};
use super::tick::InputEvent;
use crate::consts::AGENT_DUCK_HEIGHT;

/// Frames of lead before an obstacle reaches the agent
const JUMP_LEAD_FRAMES: f32 = 6.0;
const DUCK_LEAD_FRAMES: f32 = 12.0;

/// Pick an input for this frame, if any
pub fn autopilot(state: &GameState) -> Option<InputEvent> {
    match state.run_state {
        RunState::GameOver => return Some(InputEvent::RestartPressed),
        // Jump into the start trigger
        RunState::Idle if state.agent.is_grounded() => return Some(InputEvent::JumpPressed),
        RunState::Running => {}
        _ => return None,
    }

    let agent = &state.agent;
    let agent_box = agent.bounds();
    let speed = state.clock.speed.max(1.0);
    let ducking = agent.posture == Posture::Ducking;

    let nearest = state
        .obstacles
        .iter()
        .filter(|o| o.bounds().right() > agent_box.left())
        .min_by(|a, b| a.sprite.left().total_cmp(&b.sprite.left()));

    let Some(obstacle) = nearest else {
        return ducking.then_some(InputEvent::DuckReleased);
    };

    let hitbox = obstacle.bounds();
    let distance = hitbox.left() - agent_box.right();
    let passes_over_duck = hitbox.bottom() >= AGENT_DUCK_HEIGHT;

    if passes_over_duck {
        if distance < speed * DUCK_LEAD_FRAMES && !ducking && agent.is_grounded() {
            return Some(InputEvent::DuckPressed);
        }
        return None;
    }

    if ducking {
        return Some(InputEvent::DuckReleased);
    }
    if distance < speed * JUMP_LEAD_FRAMES && agent.is_grounded() {
        return Some(InputEvent::JumpPressed);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{handle_input, tick};

    const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Frame of the first game over, if any
    fn first_game_over(seed: u64, frames: u32, with_pilot: bool) -> Option<u32> {
        let mut state = GameState::new(seed);
        handle_input(&mut state, InputEvent::JumpPressed);
        for frame in 0..frames {
            if with_pilot {
                if let Some(input) = autopilot(&state) {
                    handle_input(&mut state, input);
                }
            }
            tick(&mut state, FRAME_MS);
            if state.run_state == RunState::GameOver {
                return Some(frame);
            }
        }
        None
    }

    #[test]
    fn test_restarts_after_game_over() {
        let mut state = GameState::new(1);
        state.begin_intro();
        while !state.expand_background() {}
        state.game_over();
        assert_eq!(autopilot(&state), Some(InputEvent::RestartPressed));
    }

    #[test]
    fn test_jumps_to_start() {
        let state = GameState::new(1);
        assert_eq!(autopilot(&state), Some(InputEvent::JumpPressed));
    }

    #[test]
    fn test_outlasts_idle_player() {
        let idle = first_game_over(4242, 60 * 60, false);
        // Standing still, the first obstacle always connects
        assert!(idle.is_some());
        let pilot = first_game_over(4242, 60 * 60, true);
        assert!(pilot.is_none() || pilot >= idle);
    }
}
