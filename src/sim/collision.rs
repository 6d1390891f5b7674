//! Click hit-testing against balloon hitboxes
//!
//! Hitboxes are circles of radius `size * hitbox_scale` around the balloon
//! center. The horizontal offset is divided by the aspect ratio the click was
//! converted with, so the test happens in the same squashed space the click
//! came from.

use glam::Vec2;

use super::state::Balloon;

/// Squared hitbox-space distance from a balloon center to the click
#[inline]
pub fn hitbox_distance_sq(balloon: &Balloon, click: Vec2, aspect_ratio: f32) -> f32 {
    let dx = (click.x - balloon.pos.x) / aspect_ratio;
    let dy = click.y - balloon.pos.y;
    dx * dx + dy * dy
}

/// Check whether a click lands inside one balloon's hitbox
pub fn click_hits_balloon(
    balloon: &Balloon,
    click: Vec2,
    aspect_ratio: f32,
    hitbox_scale: f32,
) -> bool {
    let radius = balloon.size * hitbox_scale;
    hitbox_distance_sq(balloon, click, aspect_ratio) <= radius * radius
}

/// Index of the first balloon (storage order) whose hitbox contains the click.
///
/// First hit wins, not closest: one click pops at most one balloon. Non-finite
/// clicks and non-positive or non-finite aspect ratios never hit.
pub fn pick_balloon(
    balloons: &[Balloon],
    click: Vec2,
    aspect_ratio: f32,
    hitbox_scale: f32,
) -> Option<usize> {
    if !click.is_finite() || !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return None;
    }

    balloons
        .iter()
        .position(|balloon| click_hits_balloon(balloon, click, aspect_ratio, hitbox_scale))
}
