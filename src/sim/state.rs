//! Run state and the transitions between states
//!
//! `GameState` is the single owner of everything that changes during play.
//! Transitions are methods here; `tick` and the input handlers decide when to
//! call them.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::clock::{ScoreClock, Timer};
use super::geometry::Aabb;
use super::spawner::{Obstacle, ObstacleKind, Spawner, place_obstacle};
use crate::assets;
use crate::consts::*;
use crate::settings::Tuning;

/// Overall progression of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the agent to jump into the start trigger
    Idle,
    /// Background widening into view
    Expanding,
    /// Scrolling, spawning and scoring
    Running,
    /// Collided; waits for restart
    GameOver,
}

/// Short sound cues for the audio host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Jump,
    Hit,
    Reach,
}

impl SoundCue {
    pub fn asset_key(self) -> &'static str {
        match self {
            SoundCue::Jump => assets::SOUND_JUMP,
            SoundCue::Hit => assets::SOUND_HIT,
            SoundCue::Reach => assets::SOUND_REACH,
        }
    }
}

/// Things the host should react to, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundCue),
    IntroStarted,
    RunStarted,
    Milestone { score: u64 },
    ObstacleSpawned { id: u32, kind: ObstacleKind },
    GameOver { score: u64, best: u64 },
    Restarted,
}

/// Oldest events are dropped past this if the host never drains
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete play state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub run_state: RunState,
    pub agent: Agent,
    /// Live obstacles, in spawn (id) order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub clock: ScoreClock,
    /// Score period timer; always counting, only applied while Running
    pub score_timer: Timer,
    /// Background widening timer; active only while Expanding
    pub expand_timer: Timer,
    /// Visible background width
    pub background_width: f32,
    /// Ground tile scroll offset
    pub scroll_x: f32,
    /// One-shot start region, consumed on first overlap
    pub start_trigger: Option<Aabb>,
    pub game_over_visible: bool,
    /// Frames processed
    pub frames: u64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// New session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// New session with custom tuning. Tuning that fails validation is
    /// replaced by the defaults.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Tuning::default()
            }
        };
        let start_trigger = Aabb::new(
            0.0,
            tuning.trigger_elevation,
            START_TRIGGER_WIDTH,
            START_TRIGGER_HEIGHT,
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            run_state: RunState::Idle,
            agent: Agent::new(),
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            clock: ScoreClock::new(tuning.initial_speed),
            score_timer: Timer::new(tuning.score_period_ms),
            expand_timer: Timer::stopped(tuning.expand_period_ms),
            background_width: 0.0,
            scroll_x: 0.0,
            start_trigger: Some(start_trigger),
            game_over_visible: false,
            frames: 0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Idle -> Expanding
    pub fn begin_intro(&mut self) {
        if self.run_state != RunState::Idle {
            return;
        }
        self.start_trigger = None;
        self.background_width = 0.0;
        self.expand_timer.start();
        self.run_state = RunState::Expanding;
        self.push_event(GameEvent::IntroStarted);
        log::info!("Intro started");
    }

    /// One expand-timer fire. Returns true once the background is full width.
    pub fn expand_background(&mut self) -> bool {
        if self.run_state != RunState::Expanding {
            return false;
        }
        let target = self.tuning.viewport_width;
        self.background_width = (self.background_width + self.tuning.expand_step).min(target);
        if self.background_width >= target {
            self.background_width = target;
            self.expand_timer.cancel();
            self.run_state = RunState::Running;
            self.push_event(GameEvent::RunStarted);
            log::info!("Run started (seed {})", self.seed);
            true
        } else {
            false
        }
    }

    /// Append a freshly placed obstacle
    pub fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        let obstacle = place_obstacle(&mut self.rng, id, &self.tuning);
        log::debug!(
            "Spawned {:?} #{} at x={:.0}",
            obstacle.kind,
            id,
            obstacle.sprite.left()
        );
        self.push_event(GameEvent::ObstacleSpawned {
            id,
            kind: obstacle.kind,
        });
        self.obstacles.push(obstacle);
    }

    /// Drop obstacles that have scrolled fully off the left edge
    pub fn cull_obstacles(&mut self) {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::debug!("Culled {} obstacle(s), {} live", removed, self.obstacles.len());
        }
    }

    /// First obstacle overlapping the agent, if any
    pub fn colliding_obstacle(&self) -> Option<&Obstacle> {
        let agent_box = self.agent.bounds();
        self.obstacles
            .iter()
            .find(|o| o.bounds().overlaps(&agent_box))
    }

    /// Running -> GameOver. No-op from any other state.
    pub fn game_over(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }
        self.run_state = RunState::GameOver;
        self.agent.hurt();
        let new_best = self.clock.record_best();
        self.game_over_visible = true;
        self.spawner.reset();

        let (score, best) = (self.clock.score, self.clock.best);
        self.push_event(GameEvent::Sound(SoundCue::Hit));
        self.push_event(GameEvent::GameOver { score, best });
        if new_best {
            log::info!("Game over at {} (new best)", score);
        } else {
            log::info!("Game over at {} (best {})", score, best);
        }
    }

    /// GameOver -> Running. Silently ignored from any other state.
    pub fn restart(&mut self) {
        if self.run_state != RunState::GameOver {
            return;
        }
        self.agent.reset_pose();
        self.obstacles.clear();
        self.spawner.reset();
        self.clock.reset_run(self.tuning.initial_speed);
        self.game_over_visible = false;
        self.run_state = RunState::Running;
        self.push_event(GameEvent::Restarted);
        log::info!("Restarted (best {})", self.clock.best);
    }
}
