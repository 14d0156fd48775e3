//! Hit testing: pointer position → control point lookup.
//!
//! Walks curves in creation order and each curve's control points in
//! order, returning the first handle whose pick box contains the pointer.
//! The pick box is axis-aligned (it matches the square handles the
//! renderer draws), so overlapping handles always resolve to the curve
//! with the lower index.

use bc_core::model::{Curve, Point};

/// Half-width of the square pick box around each control point.
pub const PICK_RADIUS: f64 = 8.0;

/// A control point located by [`hit_test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPointHit {
    pub curve: usize,
    pub point: usize,
}

/// Find the first control point within [`PICK_RADIUS`] of `pos`.
/// Returns `None` if the pointer is over empty canvas.
pub fn hit_test(curves: &[Curve], pos: Point) -> Option<ControlPointHit> {
    hit_test_with_radius(curves, pos, PICK_RADIUS)
}

/// [`hit_test`] with an explicit pick radius. Bounds are inclusive.
pub fn hit_test_with_radius(curves: &[Curve], pos: Point, radius: f64) -> Option<ControlPointHit> {
    curves.iter().enumerate().find_map(|(curve, c)| {
        c.control_points()
            .iter()
            .position(|cp| (pos.x - cp.x).abs() <= radius && (pos.y - cp.y).abs() <= radius)
            .map(|point| ControlPointHit { curve, point })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::Resolution;
    use pretty_assertions::assert_eq;

    fn curve(points: &[(f64, f64)]) -> Curve {
        Curve::new(
            points.iter().map(|&p| Point::from(p)).collect(),
            Resolution::DEFAULT,
        )
        .unwrap()
    }

    #[test]
    fn hit_control_point() {
        let curves = vec![curve(&[(10.0, 10.0), (100.0, 100.0), (200.0, 10.0)])];
        assert_eq!(
            hit_test(&curves, Point::new(103.0, 95.0)),
            Some(ControlPointHit { curve: 0, point: 1 })
        );
    }

    #[test]
    fn miss_returns_none() {
        let curves = vec![curve(&[(10.0, 10.0), (100.0, 100.0)])];
        assert_eq!(hit_test(&curves, Point::new(50.0, 50.0)), None);
        assert_eq!(hit_test(&[], Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn pick_box_is_square_and_inclusive() {
        let curves = vec![curve(&[(100.0, 100.0)])];
        // Corner of the box: outside a circle of radius 8, inside the square.
        assert!(hit_test(&curves, Point::new(108.0, 92.0)).is_some());
        assert!(hit_test(&curves, Point::new(108.01, 100.0)).is_none());
        assert!(hit_test(&curves, Point::new(100.0, 91.99)).is_none());
    }

    #[test]
    fn earlier_curve_wins_on_overlap() {
        let curves = vec![
            curve(&[(0.0, 0.0), (50.0, 50.0)]),
            curve(&[(50.0, 50.0), (300.0, 300.0)]),
        ];
        assert_eq!(
            hit_test(&curves, Point::new(50.0, 50.0)),
            Some(ControlPointHit { curve: 0, point: 1 })
        );
    }

    #[test]
    fn earlier_point_wins_within_curve() {
        let curves = vec![curve(&[(20.0, 20.0), (24.0, 24.0), (60.0, 0.0)])];
        assert_eq!(
            hit_test(&curves, Point::new(22.0, 22.0)),
            Some(ControlPointHit { curve: 0, point: 0 })
        );
    }

    #[test]
    fn custom_radius() {
        let curves = vec![curve(&[(0.0, 0.0)])];
        assert!(hit_test_with_radius(&curves, Point::new(15.0, 0.0), 16.0).is_some());
        assert!(hit_test_with_radius(&curves, Point::new(15.0, 0.0), 4.0).is_none());
    }
}
