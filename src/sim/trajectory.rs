//! Straight-line path sampling for plotting
//!
//! Ball motion between events is unaccelerated (the model has no gravity or
//! drag), so a path is `position = start + vel * t` over a fixed window.
//! Windowing and trimming are the caller's concern; the sampler always
//! produces exactly the requested count.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::from_polar_deg;

/// A finite straight-line path, sampled evenly in time from `t = 0` to
/// `t = duration`.
///
/// Sampling is lazy and restartable: [`LinearPath::points`] returns a fresh
/// iterator on every call. Points come out earliest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearPath {
    pub start: DVec2,
    pub vel: DVec2,
    pub duration: f64,
    pub count: usize,
}

impl LinearPath {
    pub fn new(start: DVec2, vel: DVec2, duration: f64, count: usize) -> Self {
        Self {
            start,
            vel,
            duration,
            count,
        }
    }

    /// Path that arrives at `end` after `duration` of flight — a pre-impact
    /// leg, back-tracked from the collision point.
    pub fn ending_at(end: DVec2, vel: DVec2, duration: f64, count: usize) -> Self {
        Self::new(end - vel * duration, vel, duration, count)
    }

    /// Position of sample `index`.
    pub fn point_at(&self, index: usize) -> DVec2 {
        let t = self.duration * index as f64 / self.count.saturating_sub(1).max(1) as f64;
        self.start + self.vel * t
    }

    /// Iterate all `count` samples in time order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        (0..self.count).map(move |i| self.point_at(i))
    }

    /// Position after the full duration.
    #[inline]
    pub fn end(&self) -> DVec2 {
        self.start + self.vel * self.duration
    }
}

/// The two endpoints of the paddle face segment, centered on the collision
/// point and ordered along the face direction.
pub fn face_segment(center: DVec2, face_angle_deg: f64, half_len: f64) -> [DVec2; 2] {
    let along = from_polar_deg(half_len, face_angle_deg);
    [center - along, center + along]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_produces_exact_count_and_endpoints() {
        let path = LinearPath::new(DVec2::new(1.0, 2.0), DVec2::new(4.0, -2.0), 0.5, 11);
        let points: Vec<_> = path.points().collect();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], DVec2::new(1.0, 2.0));
        let last = points[10];
        assert!((last.x - 3.0).abs() < 1e-12);
        assert!((last.y - 1.0).abs() < 1e-12);
        assert_eq!(last, path.end());
    }

    #[test]
    fn test_points_are_time_ordered_and_evenly_spaced() {
        let path = LinearPath::new(DVec2::ZERO, DVec2::new(10.0, 0.0), 1.0, 5);
        let points: Vec<_> = path.points().collect();
        for (i, pair) in points.windows(2).enumerate() {
            let step = pair[1].x - pair[0].x;
            assert!((step - 2.5).abs() < 1e-12, "step {i} was {step}");
        }
    }

    #[test]
    fn test_sampling_is_restartable() {
        let path = LinearPath::new(DVec2::ZERO, DVec2::X, 1.0, 3);
        let first: Vec<_> = path.points().collect();
        let second: Vec<_> = path.points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_counts() {
        let path = LinearPath::new(DVec2::new(1.0, 1.0), DVec2::X, 1.0, 1);
        let points: Vec<_> = path.points().collect();
        assert_eq!(points, vec![DVec2::new(1.0, 1.0)]);

        let empty = LinearPath::new(DVec2::ZERO, DVec2::X, 1.0, 0);
        assert_eq!(empty.points().count(), 0);
    }

    #[test]
    fn test_ending_at_backtracks_start() {
        let vel = DVec2::new(4.7, 1.7);
        let path = LinearPath::ending_at(DVec2::ZERO, vel, 0.25, 101);
        assert!((path.end()).length() < 1e-12);
        assert!((path.start + vel * 0.25).length() < 1e-12);
        // Last sample lands on the collision point
        let last = path.point_at(100);
        assert!(last.length() < 1e-9);
    }

    #[test]
    fn test_face_segment_centered_and_sized() {
        let [a, b] = face_segment(DVec2::ZERO, 90.0, 0.075);
        // Square face: a vertical segment of total length 0.15
        assert!(a.x.abs() < 1e-12 && b.x.abs() < 1e-12);
        assert!((a.y + 0.075).abs() < 1e-12);
        assert!((b.y - 0.075).abs() < 1e-12);
        assert!(((a - b).length() - 0.15).abs() < 1e-12);

        let center = DVec2::new(0.5, -0.5);
        let [c, d] = face_segment(center, 30.0, 0.075);
        assert!(((c + d) * 0.5 - center).length() < 1e-12);
    }
}
