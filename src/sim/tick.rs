//! Per-frame update and input handling
//!
//! The host calls [`tick`] once per rendered frame with the frame delta.
//! Inputs are applied the moment they arrive through [`handle_input`]; only
//! motion, spawning and scoring wait for the next tick.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, RunState, SoundCue};

/// Discrete edge-triggered input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    JumpPressed,
    DuckPressed,
    DuckReleased,
    /// Pointer down on the restart control
    RestartPressed,
}

/// Apply an input immediately
pub fn handle_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::JumpPressed => {
            // Accepted in every run state, gated only by ground contact
            if state.agent.jump(state.tuning.jump_impulse) {
                state.push_event(GameEvent::Sound(SoundCue::Jump));
            }
        }
        InputEvent::DuckPressed => state.agent.duck(),
        InputEvent::DuckReleased => state.agent.stand_up(),
        InputEvent::RestartPressed => state.restart(),
    }
}

/// Clamp a host-reported frame delta into something the simulation can use
fn sanitize_delta(dt_ms: f32, max_ms: f32) -> f32 {
    if dt_ms.is_finite() && dt_ms > 0.0 {
        dt_ms.min(max_ms)
    } else {
        0.0
    }
}

/// Advance the game by one frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, dt_ms: f32) {
    let dt_ms = sanitize_delta(dt_ms, state.tuning.max_frame_ms);
    state.frames += 1;

    // Score timer keeps counting in every state; fires only matter while Running
    let score_fires = state.score_timer.advance(dt_ms);

    // Physics is paused while the run is over
    if state.run_state != RunState::GameOver {
        state.agent.integrate(state.tuning.gravity, dt_ms / 1000.0);
    }

    match state.run_state {
        RunState::Idle => {
            let touched = state
                .start_trigger
                .is_some_and(|trigger| trigger.overlaps(&state.agent.bounds()));
            if touched {
                state.begin_intro();
            }
        }

        RunState::Expanding => {
            let fires = state.expand_timer.advance(dt_ms);
            for _ in 0..fires {
                if state.expand_background() {
                    break;
                }
            }
        }

        RunState::Running => {
            for _ in 0..score_fires {
                if state.clock.on_score_tick(&state.tuning) {
                    let score = state.clock.score;
                    state.push_event(GameEvent::Sound(SoundCue::Reach));
                    state.push_event(GameEvent::Milestone { score });
                    log::info!("Milestone {}", score);
                }
            }
            state.clock.advance_flash(dt_ms);

            // Uniform horizontal translation by the current speed
            let speed = state.clock.speed;
            state.scroll_x += speed;
            for obstacle in &mut state.obstacles {
                obstacle.scroll(speed);
                obstacle.animate(dt_ms);
            }

            if state
                .spawner
                .advance(speed, dt_ms, state.tuning.spawn_threshold)
            {
                state.spawn_obstacle();
            }

            state.cull_obstacles();

            if state.colliding_obstacle().is_some() {
                state.game_over();
            }
        }

        RunState::GameOver => {}
    }

    // Visual follows physical state; the hurt pose holds while animations are paused.
    // A grounded agent in Idle shows the idle sprite, not the running cycle.
    if state.run_state != RunState::GameOver {
        let idle = state.run_state == RunState::Idle;
        state.agent.resolve_visual(idle);
    }
}
