//! Curve sampling: control points → polyline.
//!
//! A curve is sampled at `t = i / resolution` for `i = 0..=resolution`.
//! The whole sample list is rebuilt on every call; moving any single
//! control point shifts every sample, so there is nothing to patch.

use crate::eval::evaluate;
use crate::model::{Curve, Point};
use crate::resolution::Resolution;

/// Sample the curve defined by `control_points` at `resolution` intervals.
///
/// Returns an empty list for two or fewer control points. Otherwise the
/// result has `resolution + 1` entries and its first entry is the first
/// control point itself, not an evaluated approximation of it.
pub fn sample(control_points: &[Point], resolution: Resolution) -> Vec<Point> {
    if control_points.len() <= 2 {
        return Vec::new();
    }

    let steps = resolution.get();
    let mut points = Vec::with_capacity(steps as usize + 1);
    points.push(control_points[0]);
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        points.push(evaluate(t, control_points));
    }
    points
}

/// Replace `curve`'s samples with a fresh sampling of its control points.
pub fn resample(curve: &mut Curve, resolution: Resolution) {
    curve.curve_points = sample(&curve.control_points, resolution);
    log::trace!(
        "resampled curve: {} control points -> {} samples",
        curve.control_points.len(),
        curve.curve_points.len()
    );
}
