//! Presentation-side helpers
//!
//! Window, context, and draw calls belong to the host. This module covers the
//! two contracts the simulation relies on: turning snapshots into geometry and
//! turning pixel clicks into normalized scene coordinates.

pub mod frame;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use frame::FrameBuilder;
pub use vertex::Vertex;
pub use viewport::Viewport;

use crate::sim::{BalloonView, FragmentView};

/// Anything that can draw a frame from simulation snapshots
pub trait Presenter {
    fn render(&mut self, balloons: &[BalloonView], fragments: &[FragmentView]);
}
