//! Idle/demo mode - the game plays itself
//!
//! Produces activate decisions from the current state. A flap rises
//! `impulse² / (2·gravity)` before falling again, so the autopilot waits until
//! the body is low enough that the top of that arc lands just inside the next
//! gap, then flaps.

use super::state::{GamePhase, GameState};
use crate::config::SimConfig;

/// How far the body rises after a flap before gravity turns it around
#[inline]
pub fn flap_rise(config: &SimConfig) -> f32 {
    if config.gravity > 0.0 {
        config.flap_impulse * config.flap_impulse / (2.0 * config.gravity)
    } else {
        f32::INFINITY
    }
}

/// Height the autopilot tries to keep the top of its flap arc at
pub fn target_apex(state: &GameState, config: &SimConfig) -> f32 {
    match state.obstacles.next_unpassed() {
        Some(obstacle) => {
            let slack = (obstacle.gap_height - config.body_size).max(0.0);
            obstacle.gap_top + slack * 0.25
        }
        None => config.body_start_y() - config.body_size,
    }
}

/// Whether to press activate this tick
pub fn should_activate(state: &GameState, config: &SimConfig) -> bool {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Playing => {
            let falling = state.body.vy >= 0.0;
            let apex_if_flapped = state.body.y - flap_rise(config);
            let about_to_land = state.body.y + config.body_size
                >= config.ground_y() - config.body_size;
            falling && (apex_if_flapped >= target_apex(state, config) || about_to_land)
        }
    }
}
