//! Pop Balloons - click the balloons before they float away
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, hit-testing, difficulty)
//! - `renderer`: CPU side of presentation (viewport transform, tessellation)
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{SizeMode, SpawnTimerMode, Tuning, TuningError};

/// Scene boundaries in normalized coordinates
pub mod consts {
    /// Balloons escape once their center passes this height
    pub const TOP_BOUNDARY: f32 = 1.0;
    /// New balloons start here
    pub const SPAWN_Y: f32 = -1.0;
    /// Spawn x is uniform in [-SPAWN_HALF_WIDTH, SPAWN_HALF_WIDTH]
    pub const SPAWN_HALF_WIDTH: f32 = 1.0;
}
