//! Pop Balloons entry point
//!
//! Native builds have no window yet: this runs a headless session at 60 Hz
//! with an autopilot doing the clicking, then logs the result.
//!
//! Environment:
//! - `POP_BALLOONS_SEED`: run seed (defaults to the current time)
//! - `POP_BALLOONS_TUNING`: path to a JSON tuning file
//! - `RUST_LOG`: log filter (`debug` shows every spawn and pop)

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pop_balloons::Tuning;
use pop_balloons::renderer::{FrameBuilder, Presenter, Viewport};
use pop_balloons::sim::{GameEvent, GameState, TickInput, step};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this much simulated time
const MAX_SECONDS: f32 = 300.0;

/// Demo player: every few frames, clicks near the balloon closest to escaping
struct Autopilot {
    rng: Pcg32,
    /// Frames between clicks
    reaction_frames: u64,
    /// Aim error as a fraction of the target's size
    aim_error: f32,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed_ba11),
            reaction_frames: 24,
            aim_error: 1.6,
        }
    }

    /// Pixel position to click this frame, if any
    fn aim(&mut self, frame: u64, state: &GameState, viewport: &Viewport) -> Option<Vec2> {
        if frame % self.reaction_frames != 0 {
            return None;
        }

        let target = state
            .balloons
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;

        let spread = target.size * self.aim_error;
        let jitter = Vec2::new(
            self.rng.random_range(-spread..=spread),
            self.rng.random_range(-spread..=spread),
        );
        Some(viewport.to_pixels(target.pos + jitter))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::var("POP_BALLOONS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let tuning = match std::env::var("POP_BALLOONS_TUNING") {
        Ok(path) => match Tuning::load_from_file(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => Tuning::default(),
    };

    log::info!("Pop Balloons (headless) starting with seed {seed}");

    let mut state = GameState::new(seed, tuning);
    let viewport = Viewport::new(1920, 1080);
    let mut frame_builder = FrameBuilder::new();
    let mut autopilot = Autopilot::new(seed);

    let max_frames = (MAX_SECONDS / FRAME_DT) as u64;
    for frame in 0..max_frames {
        let mut input = TickInput::default();
        if let Some(px) = autopilot.aim(frame, &state, &viewport) {
            input.clicks.push(viewport.click(px.x, px.y));
        }

        let result = step(&mut state, &input, FRAME_DT);
        frame_builder.render(&state.snapshot_balloons(), &state.snapshot_fragments());

        for event in state.drain_events() {
            if let GameEvent::Escaped { lives_left } = event {
                log::info!("Balloon escaped at {:.1}s, {lives_left} lives left", state.elapsed());
            }
        }

        if !result.still_playing {
            break;
        }
    }

    if !state.is_game_over() {
        log::info!("Time limit reached with {} lives left", state.current_lives());
    }

    match serde_json::to_string(&state.stats) {
        Ok(json) => log::info!("Session: {json}"),
        Err(e) => log::warn!("Could not serialize session stats: {e}"),
    }
    log::info!(
        "Final score {} over {} frames",
        state.current_score(),
        frame_builder.frames()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds are driven by the host page, not this binary
}
