//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame delta and clicks are the only inputs
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{click_hits_balloon, pick_balloon};
pub use difficulty::Difficulty;
pub use snapshot::{BalloonView, FragmentView, HudView};
pub use spawn::{maybe_spawn, spawn_balloon, spawn_burst};
pub use state::{Balloon, Fragment, GameEvent, GamePhase, GameState, SessionStats};
pub use tick::{PointerClick, TickInput, TickResult, handle_click, pop_balloon, step, tick};
pub use timer::SpawnTimer;
