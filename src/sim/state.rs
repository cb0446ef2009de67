//! Ball, paddle, and impact state types
//!
//! All units are SI:
//! - Position: meters (m)
//! - Velocity: meters per second (m/s)
//! - Angles: degrees, counter-clockwise from the frame's +x axis
//!
//! Every type here is computed fresh per calculation; nothing persists
//! between calls.

use std::ops::RangeInclusive;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{from_polar_deg, to_polar_deg};

/// Point-mass ball state in some reference frame.
///
/// The ball carries no radius or spin; which frame the coordinates live in
/// is the caller's context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl BallState {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the moment of impact: sitting on the collision point (the
    /// origin) with the given polar velocity.
    pub fn at_impact(speed: f64, angle_deg: f64) -> Self {
        Self {
            pos: DVec2::ZERO,
            vel: from_polar_deg(speed, angle_deg),
        }
    }

    /// Current speed (m/s)
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Direction of travel, degrees in (-180, 180]
    #[inline]
    pub fn heading_deg(&self) -> f64 {
        to_polar_deg(self.vel).1
    }
}

/// Paddle state in the world frame.
///
/// `orientation_deg` is the paddle's direction of travel from the world +x
/// axis. `face_closure_deg` tilts the reflective face relative to the
/// perpendicular-to-travel orientation; zero means a square hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleState {
    pub vel: DVec2,
    pub orientation_deg: f64,
    pub face_closure_deg: f64,
}

impl PaddleState {
    /// Build from polar inputs. Zero speed is a stationary paddle; the
    /// orientation still defines the frame rotation.
    pub fn from_polar(speed: f64, orientation_deg: f64, face_closure_deg: f64) -> Self {
        Self {
            vel: from_polar_deg(speed, orientation_deg),
            orientation_deg,
            face_closure_deg,
        }
    }

    /// Face line angle in the paddle frame, degrees from the travel (+x)
    /// axis. Nominally perpendicular to travel, tilted by the closure.
    #[inline]
    pub fn face_angle_paddle_deg(&self) -> f64 {
        90.0 + self.face_closure_deg
    }

    /// Face line angle in the world frame.
    #[inline]
    pub fn face_angle_world_deg(&self) -> f64 {
        self.orientation_deg + self.face_angle_paddle_deg()
    }
}

/// The instant of impact.
///
/// The collision point is the origin of both frames, so `pos` reads the
/// same in either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub pos: DVec2,
    pub incoming_world: BallState,
    pub incoming_paddle: BallState,
    pub outgoing_paddle: BallState,
}

/// A user-chosen counterfactual outgoing state, expressed in the paddle
/// frame: "what if the ball left at this angle and speed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Chosen outgoing speed (m/s)
    pub speed: f64,
    /// Chosen outgoing heading, degrees from the paddle's travel axis
    pub angle_deg: f64,
}

impl Experiment {
    /// Outgoing directions reachable by a reflection, given the incoming
    /// heading in the paddle frame. A rebound cannot send the ball back
    /// through the paddle, so the arc spans the half turn ending at the
    /// incoming heading. Both boundaries are reachable.
    pub fn reachable_arc(incoming_heading_deg: f64) -> RangeInclusive<f64> {
        (incoming_heading_deg - 180.0)..=incoming_heading_deg
    }

    /// The chosen outgoing velocity vector in the paddle frame.
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        from_polar_deg(self.speed, self.angle_deg)
    }
}
