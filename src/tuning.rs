//! Data-driven game balance
//!
//! Every knob that shapes how the game plays lives in [`Tuning`]. Values load
//! from JSON; fields missing from the document keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest accepted `fragments_per_pop` / `max_fragments`
pub const MAX_FRAGMENT_LIMIT: usize = 65_536;

/// How big newly spawned balloons are
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizeMode {
    /// Every balloon has the same size
    Fixed { size: f32 },
    /// Uniform random size in [min, max]
    Random { min: f32, max: f32 },
}

/// Where the spawn timer gets its next interval from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SpawnTimerMode {
    /// Uniform random interval in [min, max] seconds, ignores difficulty
    Jitter { min: f32, max: f32 },
    /// Current difficulty spawn interval (shrinks with every pop)
    Difficulty,
}

/// Tuning load/validation errors
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or wrong field types
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside the range the simulation can handle
    #[error("{field} must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f32,
    },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Session ===
    /// Lives at the start of a game
    pub starting_lives: u8,
    /// Points for a pop at speed multiplier 1.0
    pub pop_base_score: u32,

    // === Balloons ===
    /// Base rise velocity (normalized units/s) before the speed multiplier
    pub rise_speed: f32,
    /// Size of spawned balloons
    pub balloon_size: SizeMode,
    /// Click forgiveness: hitbox radius = size * hitbox_scale
    pub hitbox_scale: f32,

    // === Spawning & difficulty ===
    pub spawn_timer: SpawnTimerMode,
    /// Spawn interval at the start of a game (seconds)
    pub base_spawn_interval: f32,
    /// Interval reduction per pop
    pub spawn_interval_step: f32,
    /// Interval never drops below this
    pub min_spawn_interval: f32,
    /// Speed multiplier gained per pop
    pub speed_increment: f32,
    /// Also restore the base spawn interval when a balloon escapes
    pub reset_interval_on_escape: bool,

    // === Fragments ===
    pub fragments_per_pop: usize,
    pub fragment_size: f32,
    /// Seconds until a fragment disappears
    pub fragment_lifetime: f32,
    /// Initial fragment speed (normalized units/s)
    pub fragment_speed: f32,
    /// Vertical acceleration on fragments (negative = down)
    pub gravity: f32,
    /// Live fragment cap; oldest are dropped first
    pub max_fragments: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            pop_base_score: 100,

            rise_speed: 0.5,
            balloon_size: SizeMode::Random {
                min: 0.05,
                max: 0.15,
            },
            hitbox_scale: 1.1,

            spawn_timer: SpawnTimerMode::Difficulty,
            base_spawn_interval: 2.0,
            spawn_interval_step: 0.1,
            min_spawn_interval: 0.5,
            speed_increment: 0.05,
            reset_interval_on_escape: false,

            fragments_per_pop: 10,
            fragment_size: 0.02,
            fragment_lifetime: 1.0,
            fragment_speed: 1.0,
            gravity: -9.8,
            max_fragments: 256,
        }
    }
}

impl Tuning {
    /// First playable version: fixed 0.2 balloons every 2-5 seconds
    pub fn classic() -> Self {
        Self {
            balloon_size: SizeMode::Fixed { size: 0.2 },
            spawn_timer: SpawnTimerMode::Jitter { min: 2.0, max: 5.0 },
            ..Self::default()
        }
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value against the range the simulation supports
    pub fn validate(&self) -> Result<(), TuningError> {
        check(
            "starting_lives",
            self.starting_lives >= 1,
            ">= 1",
            f32::from(self.starting_lives),
        )?;
        positive("rise_speed", self.rise_speed)?;
        positive("hitbox_scale", self.hitbox_scale)?;

        match self.balloon_size {
            SizeMode::Fixed { size } => positive("balloon_size.size", size)?,
            SizeMode::Random { min, max } => {
                positive("balloon_size.min", min)?;
                at_least("balloon_size.max", max, min, ">= balloon_size.min and finite")?;
            }
        }

        if let SpawnTimerMode::Jitter { min, max } = self.spawn_timer {
            positive("spawn_timer.min", min)?;
            at_least("spawn_timer.max", max, min, ">= spawn_timer.min and finite")?;
        }

        positive("min_spawn_interval", self.min_spawn_interval)?;
        check(
            "base_spawn_interval",
            self.base_spawn_interval.is_finite()
                && self.base_spawn_interval >= self.min_spawn_interval,
            ">= min_spawn_interval",
            self.base_spawn_interval,
        )?;
        non_negative("spawn_interval_step", self.spawn_interval_step)?;
        non_negative("speed_increment", self.speed_increment)?;

        positive("fragment_size", self.fragment_size)?;
        positive("fragment_lifetime", self.fragment_lifetime)?;
        non_negative("fragment_speed", self.fragment_speed)?;
        check("gravity", self.gravity.is_finite(), "finite", self.gravity)?;
        at_most_fragments("fragments_per_pop", self.fragments_per_pop)?;
        at_most_fragments("max_fragments", self.max_fragments)?;

        Ok(())
    }
}

fn check(
    field: &'static str,
    ok: bool,
    expected: &'static str,
    value: f32,
) -> Result<(), TuningError> {
    if ok {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    check(field, value.is_finite() && value > 0.0, "finite and > 0", value)
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    check(field, value.is_finite() && value >= 0.0, "finite and >= 0", value)
}

/// Upper end of a range: finite and not below `min`
fn at_least(
    field: &'static str,
    value: f32,
    min: f32,
    expected: &'static str,
) -> Result<(), TuningError> {
    check(field, value.is_finite() && value >= min, expected, value)
}

fn at_most_fragments(field: &'static str, value: usize) -> Result<(), TuningError> {
    check(field, value <= MAX_FRAGMENT_LIMIT, "<= 65536", value as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert!(Tuning::classic().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "hitbox_scale": 1.5, "starting_lives": 5 }"#).unwrap();
        assert_eq!(tuning.starting_lives, 5);
        assert!((tuning.hitbox_scale - 1.5).abs() < 1e-6);
        assert_eq!(tuning.fragments_per_pop, 10);
        assert_eq!(tuning.spawn_timer, SpawnTimerMode::Difficulty);
    }

    #[test]
    fn test_tagged_modes_parse() {
        let json = r#"{
            "balloon_size": { "mode": "fixed", "size": 0.2 },
            "spawn_timer": { "mode": "jitter", "min": 2.0, "max": 5.0 }
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.balloon_size, SizeMode::Fixed { size: 0.2 });
        assert_eq!(tuning.spawn_timer, SpawnTimerMode::Jitter { min: 2.0, max: 5.0 });
    }

    #[test]
    fn test_json_roundtrip_preserves_classic() {
        let classic = Tuning::classic();
        let json = classic.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), classic);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_names_field() {
        let err = Tuning::from_json(r#"{ "hitbox_scale": 0.0 }"#).unwrap_err();
        match err {
            TuningError::OutOfRange { field, .. } => assert_eq!(field, "hitbox_scale"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let mut tuning = Tuning::default();
        tuning.balloon_size = SizeMode::Random { min: 0.2, max: 0.1 };
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.base_spawn_interval = 0.25;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.starting_lives = 0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_overflowing_range_max_rejected() {
        let err = Tuning::from_json(r#"{"balloon_size":{"mode":"random","min":0.1,"max":1e39}}"#)
            .unwrap_err();
        match err {
            TuningError::OutOfRange { field, value, .. } => {
                assert_eq!(field, "balloon_size.max");
                assert!(value.is_infinite());
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = Tuning::from_json(r#"{"spawn_timer":{"mode":"jitter","min":2.0,"max":1e39}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::OutOfRange {
                field: "spawn_timer.max",
                ..
            }
        ));
    }

    #[test]
    fn test_fragment_counts_bounded() {
        let mut tuning = Tuning::default();
        tuning.fragments_per_pop = usize::MAX;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.max_fragments = MAX_FRAGMENT_LIMIT + 1;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.max_fragments = MAX_FRAGMENT_LIMIT;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load_from_file("/nonexistent/pop-balloons/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
