//! Framebuffer <-> normalized scene coordinate transforms
//!
//! Pixel origin is the top-left corner with y growing down. Normalized
//! coordinates put (0, 0) in the middle with y growing up, [-1, 1] on both axes.

use glam::{Mat4, Vec2};

use crate::sim::PointerClick;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Zero dimensions are bumped to 1 pixel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Track a framebuffer resize. Minimized windows report 0x0; those are
    /// ignored and the previous size kept. Returns true if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {width}x{height}");
            return false;
        }
        let changed = (width, height) != (self.width, self.height);
        self.width = width;
        self.height = height;
        changed
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Convert a cursor position in pixels to normalized coordinates
    pub fn to_normalized(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            (px / self.width as f32) * 2.0 - 1.0,
            (py / self.height as f32) * -2.0 + 1.0,
        )
    }

    /// Inverse of [`Self::to_normalized`]
    pub fn to_pixels(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            (pos.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - pos.y) * 0.5 * self.height as f32,
        )
    }

    /// Pointer press at a pixel position, ready for the simulation
    pub fn click(&self, px: f32, py: f32) -> PointerClick {
        PointerClick {
            pos: self.to_normalized(px, py),
            aspect_ratio: self.aspect_ratio(),
        }
    }

    /// Orthographic projection covering [-aspect, aspect] x [-1, 1]
    pub fn projection(&self) -> Mat4 {
        let aspect = self.aspect_ratio();
        Mat4::orthographic_rh_gl(-aspect, aspect, -1.0, 1.0, -1.0, 1.0)
    }
}
