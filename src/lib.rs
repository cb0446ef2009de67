//! batframe - a table-tennis shot explorer
//!
//! Core modules:
//! - `sim`: Pure collision kinematics (frame transforms, face reflection, path sampling)
//! - `engine`: The two public calculations, composed from `sim`
//! - `api`: JSON request/response payloads
//! - `viz`: Presentation helpers (series splitting, angle arcs)
//!
//! All angles cross public APIs in degrees; radians exist only inside the
//! trig calls. Positions are meters, velocities m/s, everything `f64`.

pub mod api;
pub mod engine;
pub mod error;
pub mod sim;
pub mod viz;

pub use error::EngineError;

use glam::DVec2;

/// Plotting and sampling constants
pub mod consts {
    /// Flight time shown before and after impact (seconds)
    pub const TRAJ_WINDOW: f64 = 0.25;
    /// Samples per trajectory series
    pub const TRAJ_POINTS: usize = 101;
    /// Half-length of the paddle face segment (0.15 m face)
    pub const BAT_HALF_LEN: f64 = 0.075;
    /// Radius of the trajectory-angle arc in the paddle-frame plot (meters)
    pub const ARC_RADIUS: f64 = 0.0375;
    /// Samples per angle arc
    pub const ARC_POINTS: usize = 101;
}

/// Normalize an angle in degrees to (-180, 180]
#[inline]
pub fn normalize_deg(mut angle: f64) -> f64 {
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Convert polar (speed, heading in degrees) to a cartesian vector
#[inline]
pub fn from_polar_deg(speed: f64, angle_deg: f64) -> DVec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    DVec2::new(speed * cos, speed * sin)
}

/// Convert a cartesian vector to polar (speed, heading in degrees)
///
/// The heading comes from `atan2`, so axis-aligned vectors are exact and
/// the zero vector maps to heading 0 rather than NaN. `atan2` can return
/// exactly -180 for vectors on the negative x-axis; the result is folded
/// into (-180, 180].
#[inline]
pub fn to_polar_deg(v: DVec2) -> (f64, f64) {
    (v.length(), normalize_deg(v.y.atan2(v.x).to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_deg_wraps_into_half_open_range() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(180.0), 180.0);
        assert_eq!(normalize_deg(-180.0), 180.0);
        assert_eq!(normalize_deg(540.0), 180.0);
        assert_eq!(normalize_deg(-90.0), -90.0);
        assert!((normalize_deg(370.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_polar_round_trip() {
        let v = from_polar_deg(3.5, 20.0);
        let (speed, angle) = to_polar_deg(v);
        assert!((speed - 3.5).abs() < 1e-12);
        assert!((angle - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_polar_deg_zero_vector() {
        let (speed, angle) = to_polar_deg(DVec2::ZERO);
        assert_eq!(speed, 0.0);
        assert_eq!(angle, 0.0);
    }
}
