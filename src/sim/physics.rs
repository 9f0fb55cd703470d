//! Vertical physics for the body
//!
//! Semi-implicit Euler: velocity first, then position. The top of the
//! playfield is a soft ceiling (clamp, no loss); the bottom is left to the
//! collision detector.

use super::state::Body;

/// Advance the body by one timestep under gravity
#[inline]
pub fn advance(body: &mut Body, gravity: f32, dt: f32) {
    body.vy += gravity * dt;
    body.y += body.vy * dt;

    if body.y < 0.0 {
        body.y = 0.0;
        body.vy = 0.0;
    }
}

/// Flap: overwrite velocity with the (upward) impulse
#[inline]
pub fn activate(body: &mut Body, impulse: f32) {
    body.vy = impulse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FLAP_IMPULSE, GRAVITY, SIM_DT};
    use proptest::prelude::*;

    #[test]
    fn test_advance_from_rest() {
        let mut body = Body::at(300.0);
        advance(&mut body, GRAVITY, SIM_DT);
        // 0.25 px/frame after one 60 Hz frame
        assert!((body.vy - 15.0).abs() < 1e-4);
        assert!((body.y - 300.25).abs() < 1e-4);
    }

    #[test]
    fn test_ceiling_clamps_and_stops() {
        let mut body = Body { y: 2.0, vy: -480.0 };
        advance(&mut body, GRAVITY, SIM_DT);
        assert_eq!(body.y, 0.0);
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn test_no_floor_clamp() {
        let mut body = Body { y: 10_000.0, vy: 600.0 };
        advance(&mut body, GRAVITY, SIM_DT);
        assert!(body.y > 10_000.0);
    }

    #[test]
    fn test_activate_overwrites_velocity() {
        let mut body = Body { y: 300.0, vy: 700.0 };
        activate(&mut body, FLAP_IMPULSE);
        assert_eq!(body.vy, FLAP_IMPULSE);
        assert_eq!(body.y, 300.0);

        // Not additive
        activate(&mut body, FLAP_IMPULSE);
        assert_eq!(body.vy, FLAP_IMPULSE);
    }

    proptest! {
        #[test]
        fn prop_position_never_negative(
            y in 0.0f32..1000.0,
            vy in -5000.0f32..5000.0,
            dt in 0.0f32..0.1,
        ) {
            let mut body = Body { y, vy };
            advance(&mut body, GRAVITY, dt);
            prop_assert!(body.y >= 0.0);
        }

        #[test]
        fn prop_activate_sets_exact_impulse(vy in -5000.0f32..5000.0, impulse in -2000.0f32..-1.0) {
            let mut body = Body { y: 100.0, vy };
            activate(&mut body, impulse);
            prop_assert_eq!(body.vy, impulse);
        }
    }
}
