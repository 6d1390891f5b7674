//! Difficulty ramp
//!
//! Every pop makes all balloons rise faster and shortens the spawn interval.
//! An escape resets the speed multiplier so a struggling player can catch up.
//! The spawn interval is left alone on escape unless
//! `Tuning::reset_interval_on_escape` is set.

use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    /// Applied to every live balloon's velocity; >= 1.0
    pub speed_multiplier: f32,
    /// Seconds between spawns (difficulty-driven timer mode)
    pub spawn_interval: f32,
    base_spawn_interval: f32,
    spawn_interval_step: f32,
    min_spawn_interval: f32,
    speed_increment: f32,
    reset_interval_on_escape: bool,
}

impl Difficulty {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            speed_multiplier: 1.0,
            spawn_interval: tuning.base_spawn_interval,
            base_spawn_interval: tuning.base_spawn_interval,
            spawn_interval_step: tuning.spawn_interval_step,
            min_spawn_interval: tuning.min_spawn_interval,
            speed_increment: tuning.speed_increment,
            reset_interval_on_escape: tuning.reset_interval_on_escape,
        }
    }

    /// Ramp up after a successful pop
    pub fn on_pop(&mut self) {
        self.speed_multiplier += self.speed_increment;
        self.spawn_interval =
            (self.spawn_interval - self.spawn_interval_step).max(self.min_spawn_interval);
    }

    /// Ease off after a balloon escapes
    pub fn on_escape(&mut self) {
        self.speed_multiplier = 1.0;
        if self.reset_interval_on_escape {
            self.spawn_interval = self.base_spawn_interval;
        }
    }

    /// True once further pops can no longer shorten the spawn interval
    pub fn interval_at_floor(&self) -> bool {
        self.spawn_interval <= self.min_spawn_interval
    }

    /// Points for popping a balloon at the current speed.
    ///
    /// Rounded rather than truncated: 1.0 + 0.05 is 1.0499999 in f32.
    pub fn pop_score(&self, base: u32) -> u64 {
        (base as f32 * self.speed_multiplier).round().max(0.0) as u64
    }
}
