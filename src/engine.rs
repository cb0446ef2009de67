//! The two public calculations
//!
//! Stateless composition of the `sim` parts: transform the incoming ball
//! into the paddle frame, bounce it, sample the plot series, assemble the
//! payload. The reachable-arc check recomputes the incoming paddle-frame
//! heading from the request it is given rather than reading anything
//! cached, so out-of-order calls validate independently.

use glam::DVec2;

use crate::api::{
    FramePlot, PaddleFrameRequest, PaddleFrameResponse, PaddleFrameVisualization,
    WorldFrameRequest, WorldFrameResponse, WorldFrameVisualization,
};
use crate::consts::{ARC_POINTS, ARC_RADIUS, BAT_HALF_LEN, TRAJ_POINTS, TRAJ_WINDOW};
use crate::error::EngineError;
use crate::sim::{
    BallState, CollisionEvent, Experiment, LinearPath, PaddleState, face_segment, rebound,
    to_paddle_frame, to_world_frame,
};
use crate::viz;

fn finite_output(what: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::Computation { what })
    }
}

/// Resolve the impact: build both states from the request, transform the
/// incoming ball into the paddle frame, and bounce it off the face.
fn resolve_impact(req: &PaddleFrameRequest) -> (PaddleState, CollisionEvent) {
    let paddle = PaddleState::from_polar(req.v_paddle, req.angle_paddle, req.closed_paddle);
    let incoming_world = BallState::at_impact(req.v_ball, req.angle_ball);
    let incoming_paddle = to_paddle_frame(&incoming_world, &paddle);
    let bounce = rebound(incoming_paddle.vel, req.closed_paddle);
    let event = CollisionEvent {
        pos: DVec2::ZERO,
        incoming_world,
        incoming_paddle,
        outgoing_paddle: BallState::new(DVec2::ZERO, bounce.vel),
    };
    (paddle, event)
}

/// Plot series for one frame: the pre-impact path ending at the collision
/// point, the face segment, and the collision point itself.
fn pre_impact_plot(at: DVec2, incoming_vel: DVec2, face_angle_deg: f64) -> FramePlot {
    let path = LinearPath::ending_at(at, incoming_vel, TRAJ_WINDOW, TRAJ_POINTS);
    let (x_ball_after, y_ball_after) = viz::split_xy(path.points());
    let [a, b] = face_segment(at, face_angle_deg, BAT_HALF_LEN);
    FramePlot {
        x_ball_after,
        y_ball_after,
        x_bat: [a.x, b.x],
        y_bat: [a.y, b.y],
        x_p: at.x,
        y_p: at.y,
        x_f: None,
        y_f: None,
        x_arc: None,
        y_arc: None,
    }
}

/// Compute the shot as seen from the paddle: the incoming heading and speed
/// in the paddle frame, with plot series for both frames.
pub fn paddle_frame_result(req: &PaddleFrameRequest) -> Result<PaddleFrameResponse, EngineError> {
    req.validate()?;
    let (paddle, event) = resolve_impact(req);

    let ball_traj_angle = finite_output("ball_traj_angle", event.incoming_paddle.heading_deg())?;
    let ball_traj_speed = finite_output("ball_traj_speed", event.incoming_paddle.speed())?;
    log::debug!(
        "paddle-frame impact: incoming {ball_traj_angle:.3} deg @ {ball_traj_speed:.3} m/s, rebound {:.3} deg",
        event.outgoing_paddle.heading_deg()
    );

    let world_frame =
        pre_impact_plot(event.pos, event.incoming_world.vel, paddle.face_angle_world_deg());
    let mut paddle_frame =
        pre_impact_plot(event.pos, event.incoming_paddle.vel, paddle.face_angle_paddle_deg());
    let arc = viz::angle_arc(event.pos, 0.0, ball_traj_angle, ARC_RADIUS, ARC_POINTS);
    let (x_arc, y_arc) = viz::split_xy(arc);
    paddle_frame.x_arc = Some(x_arc);
    paddle_frame.y_arc = Some(y_arc);

    Ok(PaddleFrameResponse {
        ball_traj_angle,
        ball_traj_speed,
        visualization: PaddleFrameVisualization {
            world_frame,
            paddle_frame,
        },
    })
}

/// Compute the outcome of a chosen outgoing state back in the world frame.
///
/// The chosen heading must lie in the reachable arc
/// `[incoming heading - 180, incoming heading]`; both boundaries count as
/// reachable.
pub fn world_frame_result(req: &WorldFrameRequest) -> Result<WorldFrameResponse, EngineError> {
    req.validate()?;
    let (paddle, event) = resolve_impact(&req.base);

    let ball_traj_angle = finite_output("ball_traj_angle", event.incoming_paddle.heading_deg())?;
    let arc = Experiment::reachable_arc(ball_traj_angle);
    if !arc.contains(&req.angle_ball_after) {
        return Err(EngineError::OutOfRange {
            field: "angle_ball_after",
            value: req.angle_ball_after,
            min: *arc.start(),
            max: *arc.end(),
        });
    }

    let chosen = Experiment {
        speed: req.v_ball_after,
        angle_deg: req.angle_ball_after,
    };
    let outgoing_paddle = BallState::new(DVec2::ZERO, chosen.velocity());
    let outgoing_world = to_world_frame(&outgoing_paddle, &paddle);

    let speed_ball_after_in_w = finite_output("speed_ball_after_in_w", outgoing_world.speed())?;
    let angle_ball_after_in_w = finite_output("angle_ball_after_in_w", outgoing_world.heading_deg())?;
    log::debug!(
        "world-frame outcome: {angle_ball_after_in_w:.3} deg @ {speed_ball_after_in_w:.3} m/s"
    );

    let mut world_frame =
        pre_impact_plot(event.pos, event.incoming_world.vel, paddle.face_angle_world_deg());
    let post = LinearPath::new(event.pos, outgoing_world.vel, TRAJ_WINDOW, TRAJ_POINTS);
    let (x_f, y_f) = viz::split_xy(post.points());
    world_frame.x_f = Some(x_f);
    world_frame.y_f = Some(y_f);

    Ok(WorldFrameResponse {
        angle_ball_after_in_w,
        speed_ball_after_in_w,
        visualization: WorldFrameVisualization { world_frame },
    })
}
