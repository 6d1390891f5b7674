//! Read-only views handed to the presentation layer each frame
//!
//! Views are copies; renderers must not hold on to them across ticks since
//! balloon and fragment order changes on removal.

use glam::{Vec2, Vec3};
use serde::Serialize;

use super::state::{Balloon, Fragment, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalloonView {
    pub position: Vec2,
    pub size: f32,
    pub color: Vec3,
}

impl From<&Balloon> for BalloonView {
    fn from(balloon: &Balloon) -> Self {
        Self {
            position: balloon.pos,
            size: balloon.size,
            color: balloon.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FragmentView {
    pub position: Vec2,
    pub color: Vec3,
    pub alpha: f32,
    pub size: f32,
}

impl From<&Fragment> for FragmentView {
    fn from(fragment: &Fragment) -> Self {
        Self {
            position: fragment.pos,
            color: fragment.color.truncate(),
            alpha: fragment.alpha(),
            size: fragment.size,
        }
    }
}

/// Everything a HUD needs besides the entity lists
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudView {
    pub score: u64,
    pub lives: u8,
    pub game_over: bool,
    pub speed_multiplier: f32,
}

impl GameState {
    /// Balloons in storage order (also hit-test order)
    pub fn snapshot_balloons(&self) -> Vec<BalloonView> {
        self.balloons.iter().map(BalloonView::from).collect()
    }

    /// Fragments, oldest first
    pub fn snapshot_fragments(&self) -> Vec<FragmentView> {
        self.fragments.iter().map(FragmentView::from).collect()
    }

    pub fn hud(&self) -> HudView {
        HudView {
            score: self.score,
            lives: self.lives,
            game_over: self.is_game_over(),
            speed_multiplier: self.difficulty.speed_multiplier,
        }
    }
}
