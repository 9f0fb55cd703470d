//! Obstacle spawning, scrolling, recycling and pass-through scoring
//!
//! Obstacles enter at the right edge, scroll left at a constant speed and are
//! dropped once fully past the left edge. The active list stays in spawn
//! order, which is also left-to-right order.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// A top/bottom barrier pair with a vertical gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    /// Top of the opening
    pub gap_top: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Set once, when the trailing edge crosses the body column
    pub passed: bool,
}

impl Obstacle {
    /// Right edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom of the opening
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }
}

/// The active obstacle set plus its id counter
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    /// Oldest (leftmost) first
    pub active: Vec<Obstacle>,
    /// Last id handed out (0 = none yet)
    next_id: u32,
}

impl ObstacleField {
    /// Scroll everything left and drop obstacles that are fully off-screen.
    /// Returns how many were recycled.
    pub fn advance(&mut self, speed: f32, dt: f32) -> usize {
        let dx = speed * dt;
        for obstacle in &mut self.active {
            obstacle.x -= dx;
        }

        let before = self.active.len();
        self.active.retain(|o| o.trailing_edge() > 0.0);
        before - self.active.len()
    }

    /// Spawn at the right edge once the newest obstacle has moved far enough in.
    /// Returns the new obstacle's id if one was spawned.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R, config: &SimConfig) -> Option<u32> {
        let threshold = config.playfield_width - config.spawn_spacing;
        let due = match self.active.last() {
            None => true,
            Some(last) => last.x < threshold,
        };
        if !due {
            return None;
        }

        let (min, max) = config.gap_top_range();
        let gap_top = if max > min {
            rng.random_range(min..=max)
        } else {
            min
        };

        self.next_id += 1;
        let id = self.next_id;
        self.active.push(Obstacle {
            id,
            x: config.playfield_width,
            gap_top,
            gap_height: config.gap_height,
            width: config.obstacle_width,
            passed: false,
        });
        log::debug!("Spawned obstacle {} with gap at {:.1}", id, gap_top);
        Some(id)
    }

    /// Mark every obstacle whose trailing edge is now strictly left of the body
    /// column. Returns the ids that flipped this call (usually zero or one).
    pub fn score_pass(&mut self, body_x: f32) -> Vec<u32> {
        self.active
            .iter_mut()
            .filter(|o| !o.passed && o.trailing_edge() < body_x)
            .map(|o| {
                o.passed = true;
                o.id
            })
            .collect()
    }

    /// Empty the field and restart ids (new run)
    pub fn clear(&mut self) {
        self.active.clear();
        self.next_id = 0;
    }

    /// First obstacle the body has not yet cleared
    pub fn next_unpassed(&self) -> Option<&Obstacle> {
        self.active.iter().find(|o| !o.passed)
    }
}
