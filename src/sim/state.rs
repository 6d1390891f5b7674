//! Game state and core simulation types
//!
//! `GameState` exclusively owns every balloon and fragment. Nothing outside the
//! simulation holds references into these collections.

use std::collections::VecDeque;

use glam::{Vec2, Vec3, Vec4};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::difficulty::Difficulty;
use super::timer::SpawnTimer;
use crate::consts::TOP_BOUNDARY;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// A rising balloon
#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub pos: Vec2,
    /// Base velocity, scaled by `speed`
    pub vel: Vec2,
    /// Speed multiplier from the difficulty ramp
    pub speed: f32,
    /// Visual radius; always > 0
    pub size: f32,
    /// RGB, each channel in [0, 1]
    pub color: Vec3,
}

impl Balloon {
    pub fn new(pos: Vec2, size: f32, color: Vec3) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed: 1.0,
            size,
            color,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2, speed: f32) -> Self {
        self.vel = vel;
        self.speed = speed;
        self
    }

    /// Pure translation, no acceleration
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * self.speed * dt;
    }

    /// True once the balloon has floated past the top of the scene
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > TOP_BOUNDARY
    }
}

/// A short-lived explosion particle
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub pos: Vec2,
    pub vel: Vec2,
    /// RGBA; alpha fades to 0 over the fragment's lifetime
    pub color: Vec4,
    pub size: f32,
    /// Seconds remaining
    pub lifetime: f32,
    /// Lifetime at creation; fixed alpha-decay divisor
    initial_lifetime: f32,
}

impl Fragment {
    pub fn new(pos: Vec2, vel: Vec2, color: Vec4, size: f32, lifetime: f32) -> Self {
        Self {
            pos,
            vel,
            color,
            size,
            lifetime,
            initial_lifetime: lifetime.max(f32::EPSILON),
        }
    }

    /// Advance position, apply gravity, fade, and age the fragment.
    ///
    /// Alpha drops by `dt / initial_lifetime` so the fade is linear and hits
    /// zero together with the lifetime.
    pub fn update(&mut self, dt: f32, gravity: f32) {
        self.pos += self.vel * dt;
        self.vel.y += gravity * dt;
        self.color.w = (self.color.w - dt / self.initial_lifetime).max(0.0);
        self.lifetime -= dt;
    }

    pub fn alpha(&self) -> f32 {
        self.color.w
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0 || self.color.w <= 0.0
    }
}

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Gameplay events for the presentation layer (sound, HUD flashes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    Spawned { pos: Vec2 },
    Popped { pos: Vec2, points: u64 },
    Escaped { lives_left: u8 },
    GameOver { score: u64 },
}

/// Running totals for the end-of-game summary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    /// Simulated seconds since the game started
    pub elapsed: f64,
    pub spawned: u32,
    pub popped: u32,
    pub escaped: u32,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub difficulty: Difficulty,
    pub timer: SpawnTimer,
    /// Absolute time (seconds) of the next spawn
    pub next_spawn_at: f64,
    /// Live balloons, in spawn order until removals reorder them
    pub balloons: Vec<Balloon>,
    /// Live fragments, oldest first
    pub fragments: Vec<Fragment>,
    pub stats: SessionStats,
    pub(crate) rng: Pcg32,
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed and balance.
    ///
    /// `tuning` is used as-is; run [`Tuning::validate`] first on untrusted values.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let difficulty = Difficulty::from_tuning(&tuning);
        let timer = SpawnTimer::new(tuning.spawn_timer);
        let mut rng = Pcg32::seed_from_u64(seed);
        let first_interval = timer.next_interval(&mut rng, &difficulty);

        log::debug!("New game (seed {seed}), first spawn in {first_interval:.2}s");

        Self {
            seed,
            lives: tuning.starting_lives,
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            difficulty,
            timer,
            next_spawn_at: f64::from(first_interval),
            balloons: Vec::new(),
            fragments: Vec::new(),
            stats: SessionStats::default(),
            rng,
            events: VecDeque::new(),
        }
    }

    /// New game with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tuning::default())
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    pub fn current_lives(&self) -> u8 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Simulated seconds since the game started
    pub fn elapsed(&self) -> f64 {
        self.stats.elapsed
    }

    /// Seconds until the spawner is due (0 if already due)
    pub fn time_until_spawn(&self) -> f64 {
        (self.next_spawn_at - self.stats.elapsed).max(0.0)
    }

    /// Take all events recorded since the last drain, oldest first.
    ///
    /// At most [`MAX_PENDING_EVENTS`] are kept between drains.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Propagate the current speed multiplier to every live balloon
    pub(crate) fn apply_speed_multiplier(&mut self) {
        let speed = self.difficulty.speed_multiplier;
        for balloon in &mut self.balloons {
            balloon.speed = speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rising(y: f32) -> Balloon {
        Balloon::new(Vec2::new(0.0, y), 0.1, Vec3::ONE).with_velocity(Vec2::new(0.0, 0.5), 1.0)
    }

    #[test]
    fn test_balloon_update_scales_by_speed() {
        let mut balloon = rising(0.0).with_velocity(Vec2::new(0.0, 0.5), 2.0);
        balloon.update(0.5);
        assert!((balloon.pos.y - 0.5).abs() < 1e-6);
        assert!(balloon.pos.x.abs() < 1e-6);
    }

    #[test]
    fn test_off_screen_boundary() {
        assert!(!rising(1.0).is_off_screen());
        assert!(rising(1.01).is_off_screen());
    }

    #[test]
    fn test_fragment_fades_linearly() {
        let mut fragment = Fragment::new(Vec2::ZERO, Vec2::X, Vec4::ONE, 0.02, 1.0);
        fragment.update(0.25, 0.0);
        assert!((fragment.alpha() - 0.75).abs() < 1e-6);
        fragment.update(0.25, 0.0);
        assert!((fragment.alpha() - 0.5).abs() < 1e-6);
        assert!((fragment.lifetime - 0.5).abs() < 1e-6);
        assert!(!fragment.is_expired());
    }

    #[test]
    fn test_fragment_gravity_and_motion() {
        let mut fragment = Fragment::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec4::ONE, 0.02, 1.0);
        fragment.update(0.1, -9.8);
        // Position moves with the pre-gravity velocity
        assert!((fragment.pos.x - 0.1).abs() < 1e-6);
        assert!(fragment.pos.y.abs() < 1e-6);
        assert!((fragment.vel.y + 0.98).abs() < 1e-5);
    }

    #[test]
    fn test_fragment_expires_with_lifetime() {
        let mut fragment = Fragment::new(Vec2::ZERO, Vec2::ZERO, Vec4::ONE, 0.02, 0.5);
        fragment.update(0.5, 0.0);
        assert!(fragment.is_expired());
        assert_eq!(fragment.alpha(), 0.0);
    }

    #[test]
    fn test_fragment_alpha_never_negative() {
        let mut fragment = Fragment::new(Vec2::ZERO, Vec2::ZERO, Vec4::ONE, 0.02, 0.1);
        fragment.update(3.0, 0.0);
        assert_eq!(fragment.alpha(), 0.0);
        assert!(fragment.is_expired());
    }

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::with_seed(7);
        assert_eq!(state.current_lives(), 3);
        assert_eq!(state.current_score(), 0);
        assert!(!state.is_game_over());
        assert!(state.balloons.is_empty());
        assert!(state.fragments.is_empty());
        assert!(state.next_spawn_at > 0.0);
        assert!((state.difficulty.speed_multiplier - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_apply_speed_multiplier_reaches_all_balloons() {
        let mut state = GameState::with_seed(1);
        state.balloons.push(rising(0.0));
        state.balloons.push(rising(0.5));
        state.difficulty.speed_multiplier = 1.5;
        state.apply_speed_multiplier();
        assert!(state.balloons.iter().all(|b| (b.speed - 1.5).abs() < 1e-6));
    }

    proptest! {
        #[test]
        fn prop_rising_balloon_never_sinks(y in -1.0f32..1.0, vy in 0.001f32..2.0, speed in 1.0f32..5.0, dt in 0.0f32..1.0) {
            let mut balloon = rising(y).with_velocity(Vec2::new(0.0, vy), speed);
            let before = balloon.pos.y;
            balloon.update(dt);
            prop_assert!(balloon.pos.y >= before);
        }

        #[test]
        fn prop_off_screen_iff_above_top(y in -2.0f32..2.0) {
            prop_assert_eq!(rising(y).is_off_screen(), y > TOP_BOUNDARY);
        }

        #[test]
        fn prop_fragment_alpha_stays_in_unit_range(steps in proptest::collection::vec(0.0f32..0.2, 1..20)) {
            let mut fragment = Fragment::new(Vec2::ZERO, Vec2::X, Vec4::ONE, 0.02, 1.0);
            let mut last_lifetime = fragment.lifetime;
            for dt in steps {
                fragment.update(dt, -9.8);
                prop_assert!((0.0..=1.0).contains(&fragment.alpha()));
                prop_assert!(fragment.lifetime <= last_lifetime);
                last_lifetime = fragment.lifetime;
            }
        }
    }
}
