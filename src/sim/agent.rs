//! The player-controlled runner
//!
//! The agent never moves horizontally. Vertical motion is a small gravity
//! integrator with a ground clamp, so "grounded" is an exact predicate:
//! `y == GROUND_Y`.

use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::assets;
use crate::consts::*;

/// Collision-box shape and active animation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    Standing,
    Ducking,
    Airborne,
}

/// Height and top inset of the agent's collision box.
///
/// `height + offset == AGENT_STAND_HEIGHT` for every posture, so the bottom
/// edge (the feet) never moves when posture changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxProfile {
    pub height: f32,
    pub offset: f32,
}

const STANDING_PROFILE: BoxProfile = BoxProfile {
    height: AGENT_STAND_HEIGHT,
    offset: 0.0,
};

const DUCKING_PROFILE: BoxProfile = BoxProfile {
    height: AGENT_DUCK_HEIGHT,
    offset: AGENT_STAND_HEIGHT - AGENT_DUCK_HEIGHT,
};

impl Posture {
    /// The one place box geometry is decided
    pub const fn profile(self) -> BoxProfile {
        match self {
            Posture::Standing | Posture::Airborne => STANDING_PROFILE,
            Posture::Ducking => DUCKING_PROFILE,
        }
    }
}

/// What the host should draw for the agent this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentVisual {
    /// Waiting for the first jump
    Idle,
    /// Running cycle animation
    Running,
    /// Ducking cycle animation
    Ducking,
    /// Fixed mid-jump frame, cycles suspended
    MidJump,
    /// Collision pose, held until restart
    Hurt,
}

impl AgentVisual {
    pub fn asset_key(self) -> &'static str {
        match self {
            AgentVisual::Idle => assets::DINO_IDLE,
            // MidJump holds the first frame of the run sheet
            AgentVisual::Running | AgentVisual::MidJump => assets::DINO_RUN,
            AgentVisual::Ducking => assets::DINO_DOWN,
            AgentVisual::Hurt => assets::DINO_HURT,
        }
    }

    /// Whether the host should loop a cycle animation for this visual
    pub fn is_animated(self) -> bool {
        matches!(self, AgentVisual::Running | AgentVisual::Ducking)
    }
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Fixed horizontal position (sprite's left edge)
    pub x: f32,
    /// Sprite's bottom edge
    pub y: f32,
    /// Vertical velocity, positive is up (px/s)
    pub vy: f32,
    pub posture: Posture,
    pub visual: AgentVisual,
    /// Height at the start of the last physics step, for displacement checks
    #[serde(skip)]
    prev_y: f32,
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: GROUND_Y,
            vy: 0.0,
            posture: Posture::Standing,
            visual: AgentVisual::Idle,
            prev_y: GROUND_Y,
        }
    }

    /// Ground contact: resting exactly on the ground line
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.y <= GROUND_Y
    }

    /// Collision box for the current posture
    pub fn bounds(&self) -> Aabb {
        let profile = self.posture.profile();
        // Top inset is measured from the standing top; bottom stays at y
        let bottom = self.y + (AGENT_STAND_HEIGHT - profile.offset - profile.height);
        Aabb::new(
            self.x + AGENT_BOX_X_OFFSET,
            bottom,
            AGENT_BOX_WIDTH,
            profile.height,
        )
    }

    /// Jump key pressed. Returns true if the impulse was applied.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.posture = Posture::Standing;
        self.vy = impulse;
        true
    }

    /// Duck key pressed. Applies with or without ground contact.
    pub fn duck(&mut self) {
        self.posture = Posture::Ducking;
    }

    /// Duck key released
    pub fn stand_up(&mut self) {
        self.posture = if self.is_grounded() {
            Posture::Standing
        } else {
            Posture::Airborne
        };
    }

    /// Restore the standing pose at rest (restart)
    pub fn reset_pose(&mut self) {
        self.vy = 0.0;
        self.posture = Posture::Standing;
    }

    /// Integrate one physics step and clamp to the ground
    pub fn integrate(&mut self, gravity: f32, dt: f32) {
        self.prev_y = self.y;
        self.vy -= gravity * dt;
        self.y += self.vy * dt;

        if self.y <= GROUND_Y {
            self.y = GROUND_Y;
            self.vy = self.vy.max(0.0);
        }

        match self.posture {
            Posture::Standing if !self.is_grounded() => self.posture = Posture::Airborne,
            Posture::Airborne if self.is_grounded() => self.posture = Posture::Standing,
            _ => {}
        }
    }

    /// Derive the visual from physical state. Not itself a state change.
    pub fn resolve_visual(&mut self, idle: bool) {
        let displaced = self.y != self.prev_y || !self.is_grounded();
        self.visual = if displaced {
            AgentVisual::MidJump
        } else if self.posture == Posture::Ducking {
            AgentVisual::Ducking
        } else if idle {
            AgentVisual::Idle
        } else {
            AgentVisual::Running
        };
    }

    /// Freeze in the collision pose
    pub fn hurt(&mut self) {
        self.visual = AgentVisual::Hurt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const IMPULSE: f32 = 1600.0;
    const GRAVITY: f32 = 5000.0;
    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_profiles_keep_feet_planted() {
        for posture in [Posture::Standing, Posture::Ducking, Posture::Airborne] {
            let p = posture.profile();
            assert_eq!(p.height + p.offset, AGENT_STAND_HEIGHT);
        }
        assert_eq!(Posture::Ducking.profile().height, 58.0);
        assert_eq!(Posture::Ducking.profile().offset, 34.0);
    }

    #[test]
    fn test_bounds_bottom_invariant() {
        let mut agent = Agent::new();
        let standing = agent.bounds();
        agent.duck();
        let ducking = agent.bounds();
        assert_eq!(standing.bottom(), ducking.bottom());
        assert_eq!(standing.size.y, 92.0);
        assert_eq!(ducking.size.y, 58.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut agent = Agent::new();
        assert!(agent.jump(IMPULSE));
        assert_eq!(agent.vy, IMPULSE);
        assert_eq!(agent.posture, Posture::Standing);
    }

    #[test]
    fn test_jump_midair_is_ignored() {
        let mut agent = Agent::new();
        agent.jump(IMPULSE);
        agent.integrate(GRAVITY, DT);
        assert!(!agent.is_grounded());
        let vy = agent.vy;

        assert!(!agent.jump(IMPULSE));
        assert_eq!(agent.vy, vy);
    }

    #[test]
    fn test_jump_resets_duck() {
        let mut agent = Agent::new();
        agent.duck();
        agent.jump(IMPULSE);
        assert_eq!(agent.bounds().size.y, AGENT_STAND_HEIGHT);
    }

    #[test]
    fn test_jump_lands() {
        let mut agent = Agent::new();
        agent.jump(IMPULSE);
        let mut apex: f32 = 0.0;
        for _ in 0..120 {
            agent.integrate(GRAVITY, DT);
            apex = apex.max(agent.y);
        }
        assert!(agent.is_grounded());
        assert_eq!(agent.y, GROUND_Y);
        assert_eq!(agent.vy, 0.0);
        assert_eq!(agent.posture, Posture::Standing);
        // v² / 2g = 256, discretization lands close to it
        assert!(apex > 200.0 && apex < 300.0);
    }

    #[test]
    fn test_airborne_posture_while_rising() {
        let mut agent = Agent::new();
        agent.jump(IMPULSE);
        agent.integrate(GRAVITY, DT);
        assert_eq!(agent.posture, Posture::Airborne);
    }

    #[test]
    fn test_duck_midair_then_release() {
        let mut agent = Agent::new();
        agent.jump(IMPULSE);
        agent.integrate(GRAVITY, DT);
        agent.duck();
        assert_eq!(agent.posture, Posture::Ducking);
        agent.stand_up();
        assert_eq!(agent.posture, Posture::Airborne);
    }

    #[test]
    fn test_visual_resolution() {
        let mut agent = Agent::new();
        agent.integrate(GRAVITY, DT);
        agent.resolve_visual(true);
        assert_eq!(agent.visual, AgentVisual::Idle);
        agent.resolve_visual(false);
        assert_eq!(agent.visual, AgentVisual::Running);

        agent.duck();
        agent.integrate(GRAVITY, DT);
        agent.resolve_visual(false);
        assert_eq!(agent.visual, AgentVisual::Ducking);

        agent.jump(IMPULSE);
        agent.integrate(GRAVITY, DT);
        agent.resolve_visual(false);
        assert_eq!(agent.visual, AgentVisual::MidJump);
        assert!(!agent.visual.is_animated());
    }

    proptest! {
        #[test]
        fn prop_feet_stay_planted(ops in prop::collection::vec(0u8..5, 0..200)) {
            let mut agent = Agent::new();
            for op in ops {
                match op {
                    0 => { agent.jump(IMPULSE); }
                    1 => agent.duck(),
                    2 => agent.stand_up(),
                    3 => agent.reset_pose(),
                    _ => agent.integrate(GRAVITY, DT),
                }
                prop_assert_eq!(agent.bounds().bottom(), agent.y);
                prop_assert!(agent.y >= GROUND_Y);
            }
        }
    }

    #[test]
    fn test_reset_pose() {
        let mut agent = Agent::new();
        agent.jump(IMPULSE);
        agent.duck();
        agent.reset_pose();
        assert_eq!(agent.vy, 0.0);
        assert_eq!(agent.posture, Posture::Standing);
    }
}
