//! Generalized De Casteljau evaluation.
//!
//! Evaluates a Bezier curve of any degree at a parameter `t` by repeated
//! linear interpolation of neighbouring points, without ever forming the
//! Bernstein polynomial coefficients. Cost is O(n²) in the degree.

use crate::model::Point;
use smallvec::SmallVec;

/// Control point counts up to this size are evaluated without allocating.
const INLINE_POINTS: usize = 16;

/// Compute the point at parameter `t` on the curve defined by
/// `control_points` (`n + 1` points for a curve of degree `n`).
///
/// # Panics
///
/// Panics if fewer than two control points are given. Callers only
/// evaluate curves that have passed the `len > 2` sampling gate.
pub fn evaluate(t: f64, control_points: &[Point]) -> Point {
    assert!(
        control_points.len() >= 2,
        "De Casteljau evaluation needs at least 2 control points, got {}",
        control_points.len()
    );

    let n = control_points.len() - 1;

    // First pass reads the original points; later passes reduce in place.
    let mut work: SmallVec<[Point; INLINE_POINTS]> = control_points
        .windows(2)
        .map(|pair| Point::lerp(pair[0], pair[1], t))
        .collect();

    for k in 2..=n {
        for i in 0..=n - k {
            work[i] = Point::lerp(work[i], work[i + 1], t);
        }
    }

    work[0]
}
