//! Game state and core simulation types
//!
//! Everything the loop owns lives in [`GameState`]; the render side only ever
//! sees an owned [`Snapshot`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::{Obstacle, ObstacleField};
use crate::config::SimConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first activate
    #[default]
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; score is frozen
    GameOver,
}

/// The player-controlled body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top edge, pixels from the top of the playfield (never negative)
    pub y: f32,
    /// Vertical velocity in px/s (negative is up)
    pub vy: f32,
}

impl Body {
    /// Body at rest at the given height
    pub fn at(y: f32) -> Self {
        Self { y, vy: 0.0 }
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Ground,
    /// Only reachable if a body escapes the integrator's ceiling clamp
    Ceiling,
    Obstacle { id: u32 },
}

/// Things that happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began (from Start or GameOver)
    Started,
    /// Activate applied an upward impulse
    Flapped,
    ObstacleSpawned { id: u32 },
    /// Body cleared an obstacle; `score` is the new total
    Scored { id: u32, score: u32 },
    Crashed { cause: CrashCause },
    /// GameOver dismissed back to the title screen
    ReturnedToStart,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Gap placement source; continues across restarts
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub body: Body,
    pub obstacles: ObstacleField,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state on the title screen
    pub fn new(seed: u64, config: &SimConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            score: 0,
            body: Body::at(config.body_start_y()),
            obstacles: ObstacleField::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Put everything except the RNG back to its start-of-run values
    pub fn reset_run(&mut self, config: &SimConfig) {
        self.score = 0;
        self.body = Body::at(config.body_start_y());
        self.obstacles.clear();
        self.time_ticks = 0;
    }

    /// Owned copy for the render consumer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            body: self.body,
            obstacles: self.obstacles.active.clone(),
            time_ticks: self.time_ticks,
            events: self.events.clone(),
        }
    }
}

/// Read-only view of one tick's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub body: Body,
    /// Left-to-right
    pub obstacles: Vec<Obstacle>,
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
}
