//! Specular reflection at the paddle face
//!
//! In the paddle frame the face is a line through the origin at
//! `90° + closure` from the travel axis. Reflection keeps the velocity
//! component parallel to the face and negates the perpendicular one: an
//! idealized elastic bounce, no energy loss, no tangential friction.

use glam::DVec2;

use crate::{from_polar_deg, to_polar_deg};

/// Outgoing paddle-frame velocity after the bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rebound {
    pub vel: DVec2,
    /// Heading from the travel axis, degrees in (-180, 180]
    pub angle_deg: f64,
    /// Magnitude; equals the incoming speed
    pub speed: f64,
}

/// Unit normal of the paddle face in the paddle frame.
///
/// The face line sits at `90° + closure` from the travel axis, so its
/// normal is at `closure` degrees. Defined for any closure value, including
/// ones that turn the face parallel to the incoming velocity.
#[inline]
pub fn face_normal(face_closure_deg: f64) -> DVec2 {
    from_polar_deg(1.0, face_closure_deg)
}

/// Reflect a velocity across the surface with the given unit normal:
/// `v' = v - 2(v·n)n`.
#[inline]
pub fn reflect(vel: DVec2, normal: DVec2) -> DVec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Bounce the incoming paddle-frame velocity off the face.
pub fn rebound(incoming_vel: DVec2, face_closure_deg: f64) -> Rebound {
    let vel = reflect(incoming_vel, face_normal(face_closure_deg));
    let (speed, angle_deg) = to_polar_deg(vel);
    Rebound {
        vel,
        angle_deg,
        speed,
    }
}
