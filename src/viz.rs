//! Presentation helpers
//!
//! Plotting support with no physics in it: splitting point sequences into
//! the parallel x/y arrays the charting layer consumes, and sampling angle
//! arcs for the on-plot angle markers. Kept outside `sim` so the kinematics
//! core stays free of drawing concerns.

use glam::DVec2;

use crate::from_polar_deg;

/// Split a point sequence into parallel x and y arrays.
pub fn split_xy(points: impl IntoIterator<Item = DVec2>) -> (Vec<f64>, Vec<f64>) {
    let iter = points.into_iter();
    let (lower, _) = iter.size_hint();
    let mut xs = Vec::with_capacity(lower);
    let mut ys = Vec::with_capacity(lower);
    for p in iter {
        xs.push(p.x);
        ys.push(p.y);
    }
    (xs, ys)
}

/// Sample an angle arc: `count` points on the circle of `radius` around
/// `center`, sweeping `sweep_deg` degrees from `start_deg`. A negative
/// sweep runs clockwise.
pub fn angle_arc(
    center: DVec2,
    start_deg: f64,
    sweep_deg: f64,
    radius: f64,
    count: usize,
) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count.saturating_sub(1).max(1) as f64;
            center + from_polar_deg(radius, start_deg + t * sweep_deg)
        })
        .collect()
}
