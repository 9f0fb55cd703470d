//! Sky Flap - A side-scrolling "flap through the gaps" arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `game`: Frame driver that owns the simulation and schedules ticks
//! - `renderer`: Snapshot-to-display-list rendering layer
//! - `platform`: Browser/native input abstraction
//! - `config`: Validated simulation configuration

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use game::{FrameStatus, FrameToken, Game};

/// Game configuration constants
///
/// Distances are in pixels with the origin at the top-left of the playfield
/// (y grows downward). Rates are per second.
pub mod consts {
    /// Nominal simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta fed to a single tick (tab switches, hitches)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 64.0;

    /// Downward acceleration (px/s²) - 0.25 px/frame² at 60 Hz
    pub const GRAVITY: f32 = 900.0;
    /// Velocity set by a flap (px/s, negative is up) - 8 px/frame at 60 Hz
    pub const FLAP_IMPULSE: f32 = -480.0;

    /// Body (square) size and fixed horizontal column
    pub const BODY_SIZE: f32 = 30.0;
    pub const BODY_X: f32 = 80.0;

    /// Obstacle scroll speed (px/s) - 3 px/frame at 60 Hz
    pub const OBSTACLE_SPEED: f32 = 180.0;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Vertical opening in every obstacle
    pub const GAP_HEIGHT: f32 = 120.0;
    /// Minimum distance between the gap and the top of the playfield
    pub const GAP_MARGIN_TOP: f32 = 50.0;
    /// Minimum distance between the gap and the ground
    pub const GAP_MARGIN_BOTTOM: f32 = 50.0;
    /// Horizontal distance the newest obstacle travels before the next spawns
    pub const SPAWN_SPACING: f32 = 300.0;
}
