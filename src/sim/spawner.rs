//! Obstacle catalog and spawn policy
//!
//! A new obstacle is due whenever the distance scrolled since the last one
//! (speed x frame milliseconds) reaches the spawn threshold. Kind is a uniform
//! draw over the seven catalog entries; x is just past the right edge of the
//! viewport plus a uniformly drawn gap.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::assets;
use crate::consts::*;
use crate::settings::Tuning;

/// Obstacle catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    CactusSmall1,
    CactusSmall2,
    CactusSmall3,
    CactusBig1,
    CactusBig2,
    CactusBig3,
    /// Flying obstacle at one of two altitudes
    Bird,
}

/// Every kind, in draw order
pub const CATALOG: [ObstacleKind; 7] = [
    ObstacleKind::CactusSmall1,
    ObstacleKind::CactusSmall2,
    ObstacleKind::CactusSmall3,
    ObstacleKind::CactusBig1,
    ObstacleKind::CactusBig2,
    ObstacleKind::CactusBig3,
    ObstacleKind::Bird,
];

impl ObstacleKind {
    pub fn asset_key(self) -> &'static str {
        match self {
            ObstacleKind::CactusSmall1 => assets::OBSTACLES[0],
            ObstacleKind::CactusSmall2 => assets::OBSTACLES[1],
            ObstacleKind::CactusSmall3 => assets::OBSTACLES[2],
            ObstacleKind::CactusBig1 => assets::OBSTACLES[3],
            ObstacleKind::CactusBig2 => assets::OBSTACLES[4],
            ObstacleKind::CactusBig3 => assets::OBSTACLES[5],
            ObstacleKind::Bird => assets::ENEMY_BIRD,
        }
    }

    /// Sprite size in world units (width, height)
    pub fn sprite_size(self) -> (f32, f32) {
        match self {
            ObstacleKind::CactusSmall1 => (34.0, 70.0),
            ObstacleKind::CactusSmall2 => (68.0, 70.0),
            ObstacleKind::CactusSmall3 => (102.0, 70.0),
            ObstacleKind::CactusBig1 => (49.0, 100.0),
            ObstacleKind::CactusBig2 => (98.0, 100.0),
            ObstacleKind::CactusBig3 => (147.0, 100.0),
            ObstacleKind::Bird => (BIRD_FRAME_WIDTH, BIRD_FRAME_HEIGHT),
        }
    }

    #[inline]
    pub fn is_flying(self) -> bool {
        self == ObstacleKind::Bird
    }
}

/// A live obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Visual extent, bottom-left anchored
    pub sprite: Aabb,
    /// Collision box height, hung from the sprite's top edge
    pub hitbox_height: f32,
    /// Milliseconds into the flap loop (birds only)
    pub anim_ms: f32,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, x: f32, y: f32, tuning: &Tuning) -> Self {
        let (w, h) = kind.sprite_size();
        let hitbox_height = if kind.is_flying() {
            h / tuning.bird_hitbox_divisor
        } else {
            h
        };
        Self {
            id,
            kind,
            sprite: Aabb::new(x, y, w, h),
            hitbox_height,
            anim_ms: 0.0,
        }
    }

    /// Collision box
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            self.sprite.left(),
            self.sprite.top() - self.hitbox_height,
            self.sprite.size.x,
            self.hitbox_height,
        )
    }

    /// Scroll left by `speed`
    pub fn scroll(&mut self, speed: f32) {
        self.sprite.translate_x(-speed);
    }

    /// Advance the looping animation, if any
    pub fn animate(&mut self, dt_ms: f32) {
        if self.kind.is_flying() {
            let loop_ms = BIRD_FLAP_FRAME_MS * BIRD_FLAP_FRAMES as f32;
            self.anim_ms = (self.anim_ms + dt_ms) % loop_ms;
        }
    }

    /// Current animation frame
    pub fn frame(&self) -> u32 {
        if self.kind.is_flying() {
            ((self.anim_ms / BIRD_FLAP_FRAME_MS) as u32).min(BIRD_FLAP_FRAMES - 1)
        } else {
            0
        }
    }

    /// Fully past the left edge of the viewport
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.sprite.right() < 0.0
    }
}

/// Distance accumulator deciding when the next obstacle is due
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Scrolled distance since the last spawn (speed x ms)
    pub distance: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one frame of scrolling. Returns true when a spawn is due,
    /// resetting the accumulator.
    pub fn advance(&mut self, speed: f32, dt_ms: f32, threshold: f32) -> bool {
        self.distance += speed * dt_ms;
        if self.distance >= threshold {
            self.distance = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.distance = 0.0;
    }
}

/// Build the next obstacle. Always succeeds.
pub fn place_obstacle<R: Rng + ?Sized>(rng: &mut R, id: u32, tuning: &Tuning) -> Obstacle {
    let kind = CATALOG[rng.random_range(0..CATALOG.len())];
    let gap = rng.random_range(tuning.spawn_gap_min..=tuning.spawn_gap_max);
    let x = tuning.viewport_width + gap;
    let y = if kind.is_flying() {
        tuning.bird_altitudes[rng.random_range(0..tuning.bird_altitudes.len())]
    } else {
        GROUND_Y
    };
    Obstacle::new(id, kind, x, y, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bird_hitbox_is_forgiving() {
        let tuning = Tuning::default();
        let bird = Obstacle::new(1, ObstacleKind::Bird, 500.0, 20.0, &tuning);
        let hitbox = bird.bounds();
        assert!((hitbox.size.y - 77.0 / 1.5).abs() < 1e-4);
        assert_eq!(hitbox.top(), bird.sprite.top());
        assert!(hitbox.bottom() > bird.sprite.bottom());
    }

    #[test]
    fn test_cactus_uses_sprite_box() {
        let tuning = Tuning::default();
        let cactus = Obstacle::new(1, ObstacleKind::CactusBig3, 500.0, 0.0, &tuning);
        assert_eq!(cactus.bounds(), cactus.sprite);
    }

    #[test]
    fn test_spawner_threshold() {
        let mut spawner = Spawner::new();
        // 10 px/frame * 16 ms = 160 per frame; 15000 needs 94 frames
        let mut frames = 0;
        while !spawner.advance(10.0, 16.0, 15000.0) {
            frames += 1;
        }
        assert_eq!(frames, 93);
        assert_eq!(spawner.distance, 0.0);
    }

    #[test]
    fn test_offscreen() {
        let tuning = Tuning::default();
        let mut cactus = Obstacle::new(1, ObstacleKind::CactusSmall1, 10.0, 0.0, &tuning);
        assert!(!cactus.is_offscreen());
        cactus.scroll(40.0);
        // right edge at 4
        assert!(!cactus.is_offscreen());
        cactus.scroll(5.0);
        assert!(cactus.is_offscreen());
    }

    #[test]
    fn test_bird_flap_loops() {
        let tuning = Tuning::default();
        let mut bird = Obstacle::new(1, ObstacleKind::Bird, 0.0, 50.0, &tuning);
        assert_eq!(bird.frame(), 0);
        bird.animate(BIRD_FLAP_FRAME_MS + 1.0);
        assert_eq!(bird.frame(), 1);
        bird.animate(BIRD_FLAP_FRAME_MS);
        assert_eq!(bird.frame(), 0);
    }

    #[test]
    fn test_all_kinds_drawn() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 7];
        for id in 0..500 {
            let o = place_obstacle(&mut rng, id, &tuning);
            let idx = CATALOG.iter().position(|k| *k == o.kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    proptest! {
        #[test]
        fn prop_spawn_gap_in_range(seed in any::<u64>(), count in 1usize..64) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            for id in 0..count {
                let o = place_obstacle(&mut rng, id as u32, &tuning);
                let gap = o.sprite.left() - tuning.viewport_width;
                prop_assert!((600.0..=900.0).contains(&gap));
            }
        }

        #[test]
        fn prop_placement_altitude(seed in any::<u64>()) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let o = place_obstacle(&mut rng, 0, &tuning);
            if o.kind.is_flying() {
                prop_assert!(tuning.bird_altitudes.contains(&o.sprite.bottom()));
            } else {
                prop_assert_eq!(o.sprite.bottom(), GROUND_Y);
            }
        }
    }
}
