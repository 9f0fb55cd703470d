//! Collision detection for the body against the ground and obstacles
//!
//! Everything here is axis-aligned and pure: no state is mutated. Only the
//! ground and obstacles end a run; the integrator already keeps the body at
//! or below the ceiling, so a body resting at `y == 0` is not a collision.

use glam::Vec2;

use super::obstacles::Obstacle;
use super::state::{Body, CrashCause};

/// Axis-aligned box, `min` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box from its top-left corner
    pub fn square(top_left: Vec2, size: f32) -> Self {
        Self::new(top_left, top_left + Vec2::splat(size))
    }

    /// Open-interval overlap on the x axis (touching edges do not overlap)
    #[inline]
    pub fn overlaps_x(&self, min_x: f32, max_x: f32) -> bool {
        self.max.x > min_x && self.min.x < max_x
    }

    /// Whether the vertical span lies inside `[top, bottom]` (edges inclusive)
    #[inline]
    pub fn within_y(&self, top: f32, bottom: f32) -> bool {
        self.min.y >= top && self.max.y <= bottom
    }
}

/// Box occupied by the body
#[inline]
pub fn body_box(body: &Body, body_x: f32, body_size: f32) -> Aabb {
    Aabb::square(Vec2::new(body_x, body.y), body_size)
}

/// Whether the body box hits this obstacle's solid parts
pub fn hits_obstacle(body: &Aabb, obstacle: &Obstacle) -> bool {
    body.overlaps_x(obstacle.x, obstacle.trailing_edge())
        && !body.within_y(obstacle.gap_top, obstacle.gap_bottom())
}

/// Find the first rule that ends the run, if any.
///
/// Checked in order: ground, ceiling, then obstacles left-to-right.
pub fn detect(
    body: &Body,
    obstacles: &[Obstacle],
    playfield_height: f32,
    ground_height: f32,
    body_x: f32,
    body_size: f32,
) -> Option<CrashCause> {
    if body.y + body_size > playfield_height - ground_height {
        return Some(CrashCause::Ground);
    }
    if body.y < 0.0 {
        return Some(CrashCause::Ceiling);
    }

    let bounds = body_box(body, body_x, body_size);
    obstacles
        .iter()
        .find(|o| hits_obstacle(&bounds, o))
        .map(|o| CrashCause::Obstacle { id: o.id })
}

/// Whether the body collides with the ground or any obstacle
pub fn check(
    body: &Body,
    obstacles: &[Obstacle],
    playfield_height: f32,
    ground_height: f32,
    body_x: f32,
    body_size: f32,
) -> bool {
    detect(
        body,
        obstacles,
        playfield_height,
        ground_height,
        body_x,
        body_size,
    )
    .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 600.0;
    const GROUND: f32 = 64.0;
    const BODY_X: f32 = 80.0;
    const SIZE: f32 = 30.0;

    fn obstacle(id: u32, x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            id,
            x,
            gap_top,
            gap_height: 120.0,
            width: 60.0,
            passed: false,
        }
    }

    fn crash(body: &Body, obstacles: &[Obstacle]) -> Option<CrashCause> {
        detect(body, obstacles, H, GROUND, BODY_X, SIZE)
    }

    #[test]
    fn test_ground_collision() {
        let body = Body::at(H - GROUND - SIZE + 1.0);
        assert!(check(&body, &[], H, GROUND, BODY_X, SIZE));
        assert_eq!(crash(&body, &[]), Some(CrashCause::Ground));
    }

    #[test]
    fn test_resting_on_ground_line_is_safe() {
        let body = Body::at(H - GROUND - SIZE);
        assert!(!check(&body, &[], H, GROUND, BODY_X, SIZE));
    }

    #[test]
    fn test_ceiling_clamp_is_not_a_collision() {
        let body = Body::at(0.0);
        assert!(!check(&body, &[], H, GROUND, BODY_X, SIZE));
    }

    #[test]
    fn test_above_ceiling_reported() {
        let body = Body::at(-1.0);
        assert_eq!(crash(&body, &[]), Some(CrashCause::Ceiling));
    }

    #[test]
    fn test_pass_through_gap() {
        // Body spans x 80..110, obstacle 70..130; gap 200..320, body 250..280
        let obstacles = [obstacle(1, 70.0, 200.0)];
        let body = Body::at(250.0);
        assert!(!check(&body, &obstacles, H, GROUND, BODY_X, SIZE));
    }

    #[test]
    fn test_gap_edges_inclusive() {
        let obstacles = [obstacle(1, 70.0, 200.0)];
        assert!(!check(&Body::at(200.0), &obstacles, H, GROUND, BODY_X, SIZE));
        assert!(!check(&Body::at(290.0), &obstacles, H, GROUND, BODY_X, SIZE));
    }

    #[test]
    fn test_hit_upper_barrier() {
        let obstacles = [obstacle(4, 70.0, 200.0)];
        let body = Body::at(195.0);
        assert_eq!(crash(&body, &obstacles), Some(CrashCause::Obstacle { id: 4 }));
    }

    #[test]
    fn test_hit_lower_barrier() {
        let obstacles = [obstacle(4, 70.0, 200.0)];
        let body = Body::at(291.0);
        assert_eq!(crash(&body, &obstacles), Some(CrashCause::Obstacle { id: 4 }));
    }

    #[test]
    fn test_no_horizontal_overlap_no_collision() {
        // Obstacle leading edge exactly at body's right edge: touching, not overlapping
        let ahead = [obstacle(1, BODY_X + SIZE, 400.0)];
        assert!(!check(&Body::at(100.0), &ahead, H, GROUND, BODY_X, SIZE));

        // Trailing edge exactly at body's left edge
        let behind = [obstacle(2, BODY_X - 60.0, 400.0)];
        assert!(!check(&Body::at(100.0), &behind, H, GROUND, BODY_X, SIZE));
    }

    #[test]
    fn test_ground_reported_before_obstacle() {
        let obstacles = [obstacle(1, 70.0, 50.0)];
        let body = Body::at(H - GROUND - SIZE + 5.0);
        assert_eq!(crash(&body, &obstacles), Some(CrashCause::Ground));
    }

    #[test]
    fn test_first_overlapping_obstacle_reported() {
        let obstacles = [obstacle(1, 60.0, 400.0), obstacle(2, 100.0, 400.0)];
        let body = Body::at(100.0);
        assert_eq!(crash(&body, &obstacles), Some(CrashCause::Obstacle { id: 1 }));
    }
}
