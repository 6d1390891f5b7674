//! Per-frame simulation step and click handling
//!
//! Tick order is fixed: fragments, balloons, escapes, spawn. A balloon that
//! escapes this tick was already moved, so its last rendered position is the
//! one from the previous frame.

use glam::Vec2;

use super::collision::pick_balloon;
use super::spawn::{maybe_spawn, spawn_burst};
use super::state::{GameEvent, GamePhase, GameState};

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub still_playing: bool,
}

/// A pointer press already converted to normalized scene coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub pos: Vec2,
    /// Aspect ratio used for the pixel conversion
    pub aspect_ratio: f32,
}

/// Input collected by the presentation layer since the last frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub clicks: Vec<PointerClick>,
}

/// Apply queued input, then advance the simulation by `dt`.
///
/// Clicks refer to what the player saw on the last rendered frame, so they are
/// resolved before anything moves.
pub fn step(state: &mut GameState, input: &TickInput, dt: f32) -> TickResult {
    for click in &input.clicks {
        handle_click(state, click.pos.x, click.pos.y, click.aspect_ratio);
    }
    tick(state, dt)
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, dt: f32) -> TickResult {
    if state.phase == GamePhase::GameOver {
        return TickResult {
            still_playing: false,
        };
    }

    let dt = sanitize_dt(dt);
    state.stats.elapsed += f64::from(dt);

    // Fragments
    let gravity = state.tuning.gravity;
    for fragment in &mut state.fragments {
        fragment.update(dt, gravity);
    }
    state.fragments.retain(|f| !f.is_expired());

    // Balloons
    for balloon in &mut state.balloons {
        balloon.update(dt);
    }

    // Escapes
    let mut i = 0;
    while i < state.balloons.len() {
        if !state.balloons[i].is_off_screen() {
            i += 1;
            continue;
        }

        // Swapped-in balloon lands at `i` and is checked next
        state.balloons.swap_remove(i);
        lose_life(state);

        if state.lives == 0 {
            end_game(state);
            return TickResult {
                still_playing: false,
            };
        }
    }

    maybe_spawn(state);

    TickResult {
        still_playing: true,
    }
}

/// Resolve a click at normalized (x, y). Returns true if a balloon popped.
pub fn handle_click(state: &mut GameState, x: f32, y: f32, aspect_ratio: f32) -> bool {
    if state.phase != GamePhase::Playing {
        log::debug!("Ignoring click at ({x:.3}, {y:.3}): game over");
        return false;
    }

    match pick_balloon(
        &state.balloons,
        Vec2::new(x, y),
        aspect_ratio,
        state.tuning.hitbox_scale,
    ) {
        Some(index) => pop_balloon(state, index),
        None => false,
    }
}

/// Pop the balloon at `index`: score it, burst it, ramp difficulty, remove it.
///
/// Out-of-range indices and pops after game over are ignored.
pub fn pop_balloon(state: &mut GameState, index: usize) -> bool {
    if state.phase != GamePhase::Playing || index >= state.balloons.len() {
        return false;
    }

    let balloon = state.balloons.swap_remove(index);
    let points = state.difficulty.pop_score(state.tuning.pop_base_score);
    state.score += points;

    spawn_burst(state, balloon.pos, balloon.color);

    state.difficulty.on_pop();
    state.apply_speed_multiplier();

    state.stats.popped += 1;
    state.push_event(GameEvent::Popped {
        pos: balloon.pos,
        points,
    });

    log::debug!(
        "Popped balloon at ({:.2}, {:.2}) for {points} points (speed x{:.2}, interval {:.2}s)",
        balloon.pos.x,
        balloon.pos.y,
        state.difficulty.speed_multiplier,
        state.difficulty.spawn_interval
    );

    true
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.stats.escaped += 1;
    state.difficulty.on_escape();
    state.apply_speed_multiplier();
    state.push_event(GameEvent::Escaped {
        lives_left: state.lives,
    });
    log::debug!("Balloon escaped, {} lives left", state.lives);
}

fn end_game(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.push_event(GameEvent::GameOver { score: state.score });
    log::info!(
        "Game over! Score {} after {:.1}s ({} popped, {} escaped)",
        state.score,
        state.stats.elapsed,
        state.stats.popped,
        state.stats.escaped
    );
}

/// Negative or non-finite frame times would corrupt positions; treat them as 0
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Rejected frame delta {dt}, using 0");
        0.0
    }
}
