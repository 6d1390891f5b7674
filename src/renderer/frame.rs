//! Frame assembly: snapshots in, one interleaved vertex buffer out

use super::shapes;
use super::vertex::Vertex;
use super::Presenter;
use crate::sim::{BalloonView, FragmentView};

/// Builds the per-frame vertex list a GPU backend would upload.
///
/// The buffer is reused between frames. Balloons are drawn first and
/// fragments on top.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
    frames: u64,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Frames built so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for FrameBuilder {
    fn render(&mut self, balloons: &[BalloonView], fragments: &[FragmentView]) {
        self.vertices.clear();
        for balloon in balloons {
            self.vertices.extend(shapes::balloon(balloon));
        }
        for fragment in fragments {
            self.vertices.extend(shapes::fragment(fragment));
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::{spawn_balloon, spawn_burst};
    use crate::sim::GameState;
    use glam::{Vec2, Vec3};

    #[test]
    fn test_frame_holds_every_entity() {
        let mut state = GameState::with_seed(12);
        spawn_balloon(&mut state);
        spawn_balloon(&mut state);
        spawn_burst(&mut state, Vec2::ZERO, Vec3::ONE);

        let mut frame = FrameBuilder::new();
        frame.render(&state.snapshot_balloons(), &state.snapshot_fragments());

        let balloon_vertices = 2 * (shapes::BALLOON_SEGMENTS * 3) as usize;
        assert_eq!(frame.vertices().len(), balloon_vertices + 10 * 6);
        assert_eq!(frame.as_bytes().len(), frame.vertices().len() * Vertex::STRIDE);
        assert_eq!(frame.frames(), 1);
    }

    #[test]
    fn test_buffer_is_rebuilt_each_frame() {
        let mut state = GameState::with_seed(12);
        spawn_balloon(&mut state);

        let mut frame = FrameBuilder::new();
        frame.render(&state.snapshot_balloons(), &[]);
        frame.render(&state.snapshot_balloons(), &[]);
        assert_eq!(frame.vertices().len(), (shapes::BALLOON_SEGMENTS * 3) as usize);

        frame.render(&[], &[]);
        assert!(frame.vertices().is_empty());
        assert_eq!(frame.frames(), 3);
    }
}
