//! Periodic timers and the score/speed clock
//!
//! Timers are keyed off the master frame delta: the host reports elapsed
//! milliseconds, each timer accumulates them and reports how many periods
//! completed. Nothing here reads wall time.

use serde::{Deserialize, Serialize};

use crate::hud::FLASH_DURATION_MS;
use crate::settings::Tuning;

/// A cancellable periodic callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    period_ms: f32,
    elapsed_ms: f32,
    active: bool,
}

impl Timer {
    /// A running timer
    pub fn new(period_ms: f32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
            active: true,
        }
    }

    /// A timer that does nothing until started
    pub fn stopped(period_ms: f32) -> Self {
        Self {
            active: false,
            ..Self::new(period_ms)
        }
    }

    /// (Re)start from zero
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed_ms = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accumulate `dt_ms` and return how many periods elapsed
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if !self.active || self.period_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut fires = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            fires += 1;
        }
        fires
    }
}

/// Score, scroll speed and the session best
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreClock {
    pub score: u64,
    /// Horizontal translation per frame; never decreases during a run
    pub speed: f32,
    /// Best score this session. Survives restarts, never decreases.
    pub best: u64,
    /// Whether `best` has been recorded at least once (shows the HI text)
    pub has_best: bool,
    /// Milliseconds into the milestone flash, if one is playing
    flash_ms: Option<f32>,
}

impl ScoreClock {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            score: 0,
            speed: initial_speed,
            best: 0,
            has_best: false,
            flash_ms: None,
        }
    }

    /// One score period elapsed. Returns true on a milestone.
    pub fn on_score_tick(&mut self, tuning: &Tuning) -> bool {
        self.score += 1;
        self.speed += tuning.speed_step;

        let milestone = self.score % tuning.milestone_interval == 0;
        if milestone {
            self.flash_ms = Some(0.0);
        }
        milestone
    }

    /// Snapshot the current score into the session best
    pub fn record_best(&mut self) -> bool {
        self.has_best = true;
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }

    /// Fresh run: score back to zero, speed back to the start. Best is kept.
    pub fn reset_run(&mut self, initial_speed: f32) {
        self.score = 0;
        self.speed = initial_speed;
        self.flash_ms = None;
    }

    /// Advance the milestone flash
    pub fn advance_flash(&mut self, dt_ms: f32) {
        if let Some(t) = self.flash_ms.as_mut() {
            *t += dt_ms;
            if *t >= FLASH_DURATION_MS {
                self.flash_ms = None;
            }
        }
    }

    pub fn flash_elapsed(&self) -> Option<f32> {
        self.flash_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_per_period() {
        let mut timer = Timer::new(100.0);
        assert_eq!(timer.advance(50.0), 0);
        assert_eq!(timer.advance(50.0), 1);
        assert_eq!(timer.advance(250.0), 2);
        // 50 carried over
        assert_eq!(timer.advance(50.0), 1);
    }

    #[test]
    fn test_cancelled_timer_is_silent() {
        let mut timer = Timer::new(10.0);
        timer.cancel();
        assert!(!timer.is_active());
        assert_eq!(timer.advance(1000.0), 0);

        let mut stopped = Timer::stopped(10.0);
        assert_eq!(stopped.advance(100.0), 0);
        stopped.start();
        assert_eq!(stopped.advance(100.0), 10);
    }

    #[test]
    fn test_score_tick_ramps_speed() {
        let tuning = Tuning::default();
        let mut clock = ScoreClock::new(tuning.initial_speed);
        for _ in 0..10 {
            clock.on_score_tick(&tuning);
        }
        assert_eq!(clock.score, 10);
        assert!((clock.speed - 10.10).abs() < 1e-4);
    }

    #[test]
    fn test_milestone_every_hundred() {
        let tuning = Tuning::default();
        let mut clock = ScoreClock::new(tuning.initial_speed);
        let milestones = (0..250).filter(|_| clock.on_score_tick(&tuning)).count();
        assert_eq!(milestones, 2);
    }

    #[test]
    fn test_flash_expires() {
        let tuning = Tuning::default();
        let mut clock = ScoreClock::new(tuning.initial_speed);
        clock.score = 99;
        assert!(clock.on_score_tick(&tuning));
        assert_eq!(clock.flash_elapsed(), Some(0.0));
        clock.advance_flash(FLASH_DURATION_MS / 2.0);
        assert!(clock.flash_elapsed().is_some());
        clock.advance_flash(FLASH_DURATION_MS);
        assert!(clock.flash_elapsed().is_none());
    }

    #[test]
    fn test_best_never_decreases() {
        let mut clock = ScoreClock::new(10.0);
        clock.score = 120;
        assert!(clock.record_best());
        clock.reset_run(10.0);
        clock.score = 40;
        assert!(!clock.record_best());
        assert_eq!(clock.best, 120);
        assert_eq!(clock.score, 40);
    }
}
