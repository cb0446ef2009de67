//! Reference-frame transforms between the world and the paddle frame
//!
//! The paddle frame is co-moving and co-rotated: subtract the paddle's
//! velocity (Galilean boost), then rotate by `-orientation` so the paddle's
//! direction of travel becomes the frame's +x axis. Both frames put their
//! origin at the collision point, so positions only rotate; the boost
//! applies to velocities alone.

use glam::DVec2;

use super::state::{BallState, PaddleState};

/// Rotate a vector by an angle in degrees, counter-clockwise positive.
///
/// Direct sin/cos composition; exact at the cardinal angles up to the
/// rounding of `to_radians`.
#[inline]
pub fn rotate_deg(v: DVec2, angle_deg: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Express a world-frame ball state in the paddle's frame.
pub fn to_paddle_frame(ball: &BallState, paddle: &PaddleState) -> BallState {
    BallState {
        pos: rotate_deg(ball.pos, -paddle.orientation_deg),
        vel: rotate_deg(ball.vel - paddle.vel, -paddle.orientation_deg),
    }
}

/// Exact inverse of [`to_paddle_frame`]: rotate by `+orientation`, then add
/// the paddle velocity back.
pub fn to_world_frame(ball: &BallState, paddle: &PaddleState) -> BallState {
    BallState {
        pos: rotate_deg(ball.pos, paddle.orientation_deg),
        vel: rotate_deg(ball.vel, paddle.orientation_deg) + paddle.vel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() <= 1e-9 * (1.0 + b.length())
    }

    #[test]
    fn test_rotate_deg_quarter_turn() {
        let v = rotate_deg(DVec2::X, 90.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_recovers_state() {
        let ball = BallState::new(DVec2::new(0.3, -0.1), DVec2::new(4.7, 1.7));
        let paddle = PaddleState::from_polar(2.0, 10.0, 5.0);
        let back = to_world_frame(&to_paddle_frame(&ball, &paddle), &paddle);
        assert!(close(back.pos, ball.pos));
        assert!(close(back.vel, ball.vel));
    }

    #[test]
    fn test_stationary_paddle_is_pure_rotation() {
        let ball = BallState::new(DVec2::ZERO, DVec2::new(3.0, 4.0));
        let paddle = PaddleState::from_polar(0.0, 90.0, 0.0);
        let in_paddle = to_paddle_frame(&ball, &paddle);
        // Speed unchanged, heading rotated by -90
        assert!((in_paddle.speed() - 5.0).abs() < 1e-9);
        assert!(close(in_paddle.vel, DVec2::new(4.0, -3.0)));
    }

    #[test]
    fn test_paddle_travel_maps_to_plus_x() {
        // A ball co-moving with the paddle is at rest in the paddle frame;
        // one moving faster along the same line travels along +x.
        let paddle = PaddleState::from_polar(2.0, 35.0, 0.0);
        let co_moving = BallState::new(DVec2::ZERO, paddle.vel);
        assert!(close(to_paddle_frame(&co_moving, &paddle).vel, DVec2::ZERO));

        let faster = BallState::new(DVec2::ZERO, paddle.vel * 2.0);
        let rel = to_paddle_frame(&faster, &paddle).vel;
        assert!((rel.x - 2.0).abs() < 1e-9);
        assert!(rel.y.abs() < 1e-9);
    }

    #[test]
    fn test_cardinal_orientations_stay_finite() {
        let ball = BallState::new(DVec2::new(0.1, 0.2), DVec2::new(5.0, 0.0));
        for orientation in [0.0, 90.0, 180.0, 270.0, -90.0, 360.0] {
            let paddle = PaddleState::from_polar(1.0, orientation, 0.0);
            let in_paddle = to_paddle_frame(&ball, &paddle);
            assert!(in_paddle.pos.is_finite(), "pos at {orientation}");
            assert!(in_paddle.vel.is_finite(), "vel at {orientation}");
            let back = to_world_frame(&in_paddle, &paddle);
            assert!(close(back.vel, ball.vel), "round trip at {orientation}");
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_tolerance(
            px in -10.0f64..10.0,
            py in -10.0f64..10.0,
            vx in -50.0f64..50.0,
            vy in -50.0f64..50.0,
            v_paddle in 0.0f64..20.0,
            orientation in -720.0f64..720.0,
            closure in -90.0f64..90.0,
        ) {
            let ball = BallState::new(DVec2::new(px, py), DVec2::new(vx, vy));
            let paddle = PaddleState::from_polar(v_paddle, orientation, closure);
            let back = to_world_frame(&to_paddle_frame(&ball, &paddle), &paddle);
            prop_assert!(close(back.pos, ball.pos));
            prop_assert!(close(back.vel, ball.vel));
        }

        #[test]
        fn prop_boost_preserves_relative_speed(
            vx in -50.0f64..50.0,
            vy in -50.0f64..50.0,
            v_paddle in 0.0f64..20.0,
            orientation in -360.0f64..360.0,
        ) {
            // Rotation is an isometry: |v_ball - v_paddle| is the paddle-frame speed.
            let ball = BallState::new(DVec2::ZERO, DVec2::new(vx, vy));
            let paddle = PaddleState::from_polar(v_paddle, orientation, 0.0);
            let rel = to_paddle_frame(&ball, &paddle);
            let expected = (ball.vel - paddle.vel).length();
            prop_assert!((rel.speed() - expected).abs() <= 1e-9 * (1.0 + expected));
        }
    }
}
