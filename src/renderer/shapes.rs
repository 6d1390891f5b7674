//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in scene coordinates; the
//! viewport projection handles the aspect ratio.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{BalloonView, FragmentView};

/// Segments around a balloon outline
pub const BALLOON_SEGMENTS: u32 = 20;

/// Balloon width relative to its height
pub const BALLOON_WIDTH_RATIO: f32 = 0.5;

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an axis-aligned square
pub fn square(center: Vec2, half_extent: f32, color: [f32; 4]) -> [Vertex; 6] {
    let min = center - Vec2::splat(half_extent);
    let max = center + Vec2::splat(half_extent);
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, min.y, color),
    ]
}

/// Upright oval: half as wide as it is tall, fully opaque
pub fn balloon(view: &BalloonView) -> Vec<Vertex> {
    let radii = Vec2::new(view.size * BALLOON_WIDTH_RATIO, view.size);
    ellipse(
        view.position,
        radii,
        view.color.extend(1.0).to_array(),
        BALLOON_SEGMENTS,
    )
}

/// Small square at the fragment's current alpha
pub fn fragment(view: &FragmentView) -> [Vertex; 6] {
    square(
        view.position,
        view.size * 0.5,
        view.color.extend(view.alpha).to_array(),
    )
}
