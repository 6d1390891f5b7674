//! Spawn interval timer

use rand::Rng;

use super::difficulty::Difficulty;
use crate::tuning::SpawnTimerMode;

/// Produces the delay before the next balloon spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimer {
    pub mode: SpawnTimerMode,
}

impl SpawnTimer {
    pub fn new(mode: SpawnTimerMode) -> Self {
        Self { mode }
    }

    /// Seconds until the next spawn
    pub fn next_interval<R: Rng>(&self, rng: &mut R, difficulty: &Difficulty) -> f32 {
        match self.mode {
            SpawnTimerMode::Jitter { min, max } if max > min => rng.random_range(min..=max),
            SpawnTimerMode::Jitter { min, .. } => min,
            SpawnTimerMode::Difficulty => difficulty.spawn_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_jitter_stays_in_range() {
        let timer = SpawnTimer::new(SpawnTimerMode::Jitter { min: 2.0, max: 5.0 });
        let difficulty = Difficulty::from_tuning(&Tuning::default());
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let interval = timer.next_interval(&mut rng, &difficulty);
            assert!((2.0..=5.0).contains(&interval), "interval {interval} out of range");
        }
    }

    #[test]
    fn test_degenerate_jitter_is_fixed() {
        let timer = SpawnTimer::new(SpawnTimerMode::Jitter { min: 1.5, max: 1.5 });
        let difficulty = Difficulty::from_tuning(&Tuning::default());
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(timer.next_interval(&mut rng, &difficulty), 1.5);
    }

    #[test]
    fn test_difficulty_mode_follows_ramp() {
        let timer = SpawnTimer::new(SpawnTimerMode::Difficulty);
        let mut difficulty = Difficulty::from_tuning(&Tuning::default());
        let mut rng = Pcg32::seed_from_u64(0);

        let before = timer.next_interval(&mut rng, &difficulty);
        difficulty.on_pop();
        let after = timer.next_interval(&mut rng, &difficulty);

        assert!((before - 2.0).abs() < 1e-6);
        assert!(after < before);
    }

    #[test]
    fn test_same_seed_same_intervals() {
        let timer = SpawnTimer::new(SpawnTimerMode::Jitter { min: 2.0, max: 5.0 });
        let difficulty = Difficulty::from_tuning(&Tuning::default());
        let mut a = Pcg32::seed_from_u64(9);
        let mut b = Pcg32::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(
                timer.next_interval(&mut a, &difficulty),
                timer.next_interval(&mut b, &difficulty)
            );
        }
    }
}
