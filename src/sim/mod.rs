//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order = left-to-right)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check, detect};
pub use obstacles::{Obstacle, ObstacleField};
pub use state::{Body, CrashCause, GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
