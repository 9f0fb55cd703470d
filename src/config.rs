//! Simulation configuration
//!
//! Defaults mirror [`crate::consts`]. A config is fixed for the lifetime of a
//! [`crate::Game`]; it is validated once at construction and never mid-loop.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a configuration is rejected at initialization
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length or rate that must be strictly positive was not
    NotPositive { field: &'static str, value: f32 },
    /// A rate that must be non-negative was negative
    Negative { field: &'static str, value: f32 },
    /// Flap impulse must point up (negative y)
    ImpulseNotUpward(f32),
    /// Ground height must leave room in the playfield
    GroundOutOfRange { ground_height: f32, playfield_height: f32 },
    /// Margins and gap height leave no valid placement for a gap
    EmptyGapRange { min: f32, max: f32 },
    /// Gap is too short for the body to fit through
    GapNarrowerThanBody { gap_height: f32, body_size: f32 },
    /// Body column must lie inside the playfield
    BodyOutOfRange { body_x: f32, playfield_width: f32 },
    /// Body column must sit further right than one frame of scrolling, or an
    /// obstacle can pass it and be recycled within a single tick
    BodyTooFarLeft { body_x: f32, min_body_x: f32 },
    /// Config text could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{} must not be negative (got {})", field, value)
            }
            ConfigError::ImpulseNotUpward(v) => {
                write!(f, "flap_impulse must be negative/upward (got {})", v)
            }
            ConfigError::GroundOutOfRange {
                ground_height,
                playfield_height,
            } => write!(
                f,
                "ground_height {} does not fit in playfield_height {}",
                ground_height, playfield_height
            ),
            ConfigError::EmptyGapRange { min, max } => {
                write!(f, "no room to place a gap: gap_top range [{}, {}] is empty", min, max)
            }
            ConfigError::GapNarrowerThanBody {
                gap_height,
                body_size,
            } => write!(
                f,
                "gap_height {} is smaller than body_size {}",
                gap_height, body_size
            ),
            ConfigError::BodyOutOfRange {
                body_x,
                playfield_width,
            } => write!(
                f,
                "body_x {} lies outside playfield_width {}",
                body_x, playfield_width
            ),
            ConfigError::BodyTooFarLeft { body_x, min_body_x } => write!(
                f,
                "body_x {} must be greater than {} (obstacle_speed * MAX_FRAME_DT)",
                body_x, min_body_x
            ),
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_height: f32,

    // === Physics ===
    pub gravity: f32,
    pub flap_impulse: f32,

    // === Body ===
    pub body_size: f32,
    pub body_x: f32,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,
    pub spawn_spacing: f32,

    // === Flow ===
    /// Route GameOver -> Start -> Playing instead of restarting directly
    pub restart_via_start_screen: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,

            body_size: BODY_SIZE,
            body_x: BODY_X,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            spawn_spacing: SPAWN_SPACING,

            restart_via_start_screen: false,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()
    }

    /// Check every invariant the simulation relies on, returning the config
    /// unchanged when it is usable
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("body_size", self.body_size),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("spawn_spacing", self.spawn_spacing),
        ] {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_margin_top", self.gap_margin_top),
            ("gap_margin_bottom", self.gap_margin_bottom),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !(self.flap_impulse < 0.0) {
            return Err(ConfigError::ImpulseNotUpward(self.flap_impulse));
        }

        if !(self.ground_height >= 0.0 && self.ground_height < self.playfield_height) {
            return Err(ConfigError::GroundOutOfRange {
                ground_height: self.ground_height,
                playfield_height: self.playfield_height,
            });
        }

        if !(self.body_x >= 0.0 && self.body_x + self.body_size <= self.playfield_width) {
            return Err(ConfigError::BodyOutOfRange {
                body_x: self.body_x,
                playfield_width: self.playfield_width,
            });
        }

        // Scoring runs after recycling, so a trailing edge must land strictly
        // between 0 and body_x on some tick
        let min_body_x = self.obstacle_speed * MAX_FRAME_DT;
        if self.body_x <= min_body_x {
            return Err(ConfigError::BodyTooFarLeft {
                body_x: self.body_x,
                min_body_x,
            });
        }

        if self.gap_height < self.body_size {
            return Err(ConfigError::GapNarrowerThanBody {
                gap_height: self.gap_height,
                body_size: self.body_size,
            });
        }

        let (min, max) = self.gap_top_range();
        if min > max {
            return Err(ConfigError::EmptyGapRange { min, max });
        }

        Ok(self)
    }

    /// Inclusive range of valid `gap_top` values
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.gap_margin_top;
        let max = self.ground_y() - self.gap_height - self.gap_margin_bottom;
        (min, max)
    }

    /// Top edge of the ground strip
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Starting height of the body (mid-playfield)
    #[inline]
    pub fn body_start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }
}
