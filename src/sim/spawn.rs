//! Balloon spawning and pop bursts

use glam::{Vec2, Vec3};
use rand::Rng;

use super::state::{Balloon, Fragment, GameEvent, GameState};
use crate::consts::{SPAWN_HALF_WIDTH, SPAWN_Y};
use crate::tuning::SizeMode;

/// Spawn a balloon if the deadline has passed, then schedule the next one.
///
/// Returns true if a balloon was spawned.
pub fn maybe_spawn(state: &mut GameState) -> bool {
    let now = state.stats.elapsed;
    if now < state.next_spawn_at {
        return false;
    }

    spawn_balloon(state);

    let interval = state.timer.next_interval(&mut state.rng, &state.difficulty);
    state.next_spawn_at = now + f64::from(interval);
    true
}

/// Create one balloon at the bottom edge with random x, color, and size
pub fn spawn_balloon(state: &mut GameState) -> usize {
    let rng = &mut state.rng;

    let x = rng.random_range(-SPAWN_HALF_WIDTH..=SPAWN_HALF_WIDTH);
    let color = Vec3::new(
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
        rng.random_range(0.0..=1.0),
    );
    let size = match state.tuning.balloon_size {
        SizeMode::Random { min, max } if max > min => rng.random_range(min..=max),
        SizeMode::Random { min, .. } => min,
        SizeMode::Fixed { size } => size,
    };

    let pos = Vec2::new(x, SPAWN_Y);
    let balloon = Balloon::new(pos, size, color).with_velocity(
        Vec2::new(0.0, state.tuning.rise_speed),
        state.difficulty.speed_multiplier,
    );
    state.balloons.push(balloon);
    state.stats.spawned += 1;
    state.push_event(GameEvent::Spawned { pos });

    log::debug!(
        "Spawned balloon #{} at x={x:.2} size={size:.3} ({} live)",
        state.stats.spawned,
        state.balloons.len()
    );

    state.balloons.len() - 1
}

/// Emit a burst of fragments flying out from `pos` in random directions.
///
/// Keeps at most `max_fragments` alive, dropping the oldest to make room.
pub fn spawn_burst(state: &mut GameState, pos: Vec2, color: Vec3) {
    let tuning = &state.tuning;
    let count = tuning.fragments_per_pop.min(tuning.max_fragments);
    if count == 0 {
        return;
    }

    let overflow = state
        .fragments
        .len()
        .saturating_add(count)
        .saturating_sub(tuning.max_fragments);
    if overflow > 0 {
        state.fragments.drain(..overflow);
    }

    for _ in 0..count {
        let angle = state.rng.random_range(0.0..std::f32::consts::TAU);
        let vel = Vec2::from_angle(angle) * tuning.fragment_speed;
        state.fragments.push(Fragment::new(
            pos,
            vel,
            color.extend(1.0),
            tuning.fragment_size,
            tuning.fragment_lifetime,
        ));
    }
}
