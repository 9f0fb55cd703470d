//! Per-frame simulation tick
//!
//! Core game loop: phase transitions on activate, and the Playing pipeline
//! (integrate, scroll, spawn, score, collide).

use super::collision;
use super::physics;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::SimConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap / start / restart (click, tap, space)
    pub activate: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, config: &SimConfig, dt: f32) {
    state.events.clear();

    match state.phase {
        GamePhase::Start => {
            if input.activate {
                start_run(state, config);
            }
        }

        GamePhase::GameOver => {
            if input.activate {
                if config.restart_via_start_screen {
                    state.phase = GamePhase::Start;
                    state.events.push(GameEvent::ReturnedToStart);
                    log::info!("Back to start screen");
                } else {
                    start_run(state, config);
                }
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;

            if input.activate {
                physics::activate(&mut state.body, config.flap_impulse);
                state.events.push(GameEvent::Flapped);
            }

            physics::advance(&mut state.body, config.gravity, dt);

            state.obstacles.advance(config.obstacle_speed, dt);
            if let Some(id) = state.obstacles.maybe_spawn(&mut state.rng, config) {
                state.events.push(GameEvent::ObstacleSpawned { id });
            }

            for id in state.obstacles.score_pass(config.body_x) {
                state.score += 1;
                state.events.push(GameEvent::Scored {
                    id,
                    score: state.score,
                });
                log::debug!("Passed obstacle {} (score {})", id, state.score);
            }

            // Mutations from this tick stand; the final frame shows the impact
            if let Some(cause) = collision::detect(
                &state.body,
                &state.obstacles.active,
                config.playfield_height,
                config.ground_height,
                config.body_x,
                config.body_size,
            ) {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::Crashed { cause });
                log::info!(
                    "Crashed ({:?}) after {} ticks with score {}",
                    cause,
                    state.time_ticks,
                    state.score
                );
            }

            log::trace!(
                "tick {}: y={:.2} vy={:.2} obstacles={}",
                state.time_ticks,
                state.body.y,
                state.body.vy,
                state.obstacles.active.len()
            );
        }
    }
}

/// Reset the run and give the opening flap
fn start_run(state: &mut GameState, config: &SimConfig) {
    state.reset_run(config);
    state.phase = GamePhase::Playing;
    physics::activate(&mut state.body, config.flap_impulse);
    state.events.push(GameEvent::Started);
    log::info!("Run started (seed {})", state.seed);
}
