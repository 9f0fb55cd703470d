//! Display list generation from a snapshot
//!
//! Pure functions: the snapshot is only read. Painting order is the order of
//! the returned list (sky, obstacles, ground, body, overlay).

use glam::Vec2;

use super::quad::{Quad, colors};
use crate::config::SimConfig;
use crate::sim::{GamePhase, Obstacle, Snapshot};

/// Height of the lip drawn at the gap end of each barrier
const CAP_HEIGHT: f32 = 20.0;
/// How far the lip sticks out on each side
const CAP_OVERHANG: f32 = 4.0;

/// Top and bottom barriers (with lips) for one obstacle
pub fn obstacle_quads(obstacle: &Obstacle, ground_y: f32) -> Vec<Quad> {
    let left = obstacle.x;
    let right = obstacle.trailing_edge();
    let gap_bottom = obstacle.gap_bottom();

    let top = Quad::new(
        Vec2::new(left, 0.0),
        Vec2::new(right, obstacle.gap_top),
        colors::OBSTACLE,
    );
    let top_cap = Quad::new(
        Vec2::new(left - CAP_OVERHANG, (obstacle.gap_top - CAP_HEIGHT).max(0.0)),
        Vec2::new(right + CAP_OVERHANG, obstacle.gap_top),
        colors::OBSTACLE_CAP,
    );
    let bottom = Quad::new(
        Vec2::new(left, gap_bottom),
        Vec2::new(right, ground_y),
        colors::OBSTACLE,
    );
    let bottom_cap = Quad::new(
        Vec2::new(left - CAP_OVERHANG, gap_bottom),
        Vec2::new(right + CAP_OVERHANG, (gap_bottom + CAP_HEIGHT).min(ground_y)),
        colors::OBSTACLE_CAP,
    );

    [top, top_cap, bottom, bottom_cap]
        .into_iter()
        .filter(|q| !q.is_empty())
        .collect()
}

/// Everything to paint for this frame, back to front
pub fn display_list(snapshot: &Snapshot, config: &SimConfig) -> Vec<Quad> {
    let width = config.playfield_width;
    let height = config.playfield_height;
    let ground_y = config.ground_y();

    let mut quads = Vec::with_capacity(4 + snapshot.obstacles.len() * 4);
    quads.push(Quad::new(Vec2::ZERO, Vec2::new(width, height), colors::SKY));

    for obstacle in &snapshot.obstacles {
        quads.extend(obstacle_quads(obstacle, ground_y));
    }

    quads.push(Quad::new(
        Vec2::new(0.0, ground_y),
        Vec2::new(width, height),
        colors::GROUND,
    ));

    // The body only appears once a run has begun
    if snapshot.phase != GamePhase::Start {
        let color = if snapshot.phase == GamePhase::GameOver {
            colors::BODY_CRASHED
        } else {
            colors::BODY
        };
        let top_left = Vec2::new(config.body_x, snapshot.body.y);
        quads.push(Quad::new(
            top_left,
            top_left + Vec2::splat(config.body_size),
            color,
        ));
    }

    if snapshot.phase != GamePhase::Playing {
        quads.push(Quad::new(Vec2::ZERO, Vec2::new(width, height), colors::OVERLAY));
    }

    quads
}

/// Text size class for HUD lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Small,
}

/// One centered line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    /// Baseline, pixels from the top
    pub y: f32,
    pub size: TextSize,
}

impl HudLine {
    fn new(text: impl Into<String>, y: f32, size: TextSize) -> Self {
        Self {
            text: text.into(),
            y,
            size,
        }
    }
}

/// Score while playing, prompts on the start and game-over screens
pub fn hud_text(snapshot: &Snapshot, config: &SimConfig) -> Vec<HudLine> {
    let mid = config.playfield_height / 2.0;
    match snapshot.phase {
        GamePhase::Playing => vec![HudLine::new(snapshot.score.to_string(), 60.0, TextSize::Large)],
        GamePhase::Start => vec![
            HudLine::new("Sky Flap", mid - 40.0, TextSize::Large),
            HudLine::new("Click, tap or press SPACE to flap", mid + 10.0, TextSize::Small),
        ],
        GamePhase::GameOver => vec![
            HudLine::new("Game Over", mid - 40.0, TextSize::Large),
            HudLine::new(format!("Score: {}", snapshot.score), mid + 5.0, TextSize::Small),
            HudLine::new("Flap to play again", mid + 35.0, TextSize::Small),
        ],
    }
}
