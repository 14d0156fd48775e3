//! Editor state → drawing primitives.
//!
//! The paint pass knows what to draw but not how: it emits filled squares
//! for control point handles and stroked line segments for control
//! polygons and curve polylines into a [`Surface`] supplied by the host.
//! Each layer is gated by its [`Visibility`] flag, and the active curve is
//! drawn in a different color from the rest.

use crate::hit::PICK_RADIUS;
use bc_core::model::{Curve, Point, Visibility};
use kurbo::{Line, Rect};
use peniko::Color;

/// Side length of the square drawn for each control point.
pub const HANDLE_SIZE: f64 = PICK_RADIUS * 2.0;

/// The drawing primitives the paint pass needs from a host canvas.
pub trait Surface {
    /// Wipe the drawing area before a frame.
    fn clear(&mut self) {}

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_line(&mut self, line: Line, color: Color);
}

/// Colors for active and inactive geometry.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Active curve and in-progress points.
    pub active: Color,
    /// Every other curve.
    pub inactive: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: Color::from_rgb8(0xFF, 0x00, 0x00),
            inactive: Color::from_rgb8(0x00, 0x00, 0x00),
        }
    }
}

/// Borrowed snapshot of everything the renderer draws.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub curves: &'a [Curve],
    /// `None` when there are no curves.
    pub active_curve: Option<usize>,
    /// Points placed for a curve that has not been created yet.
    pub pending: &'a [Point],
    pub visibility: Visibility,
}

/// Paint one frame. Call after every state change with a cleared surface.
pub fn paint_scene<S: Surface + ?Sized>(surface: &mut S, view: &SceneView<'_>, palette: &Palette) {
    let vis = view.visibility;
    if !vis.any() {
        return;
    }

    let active = view.active_curve.filter(|&i| i < view.curves.len());
    if let Some(index) = active {
        paint_curve(surface, &view.curves[index], vis, palette.active);
    }
    for (i, curve) in view.curves.iter().enumerate() {
        if Some(i) != active {
            paint_curve(surface, curve, vis, palette.inactive);
        }
    }

    if vis.show_points {
        paint_handles(surface, view.pending, palette.active);
    }
    if vis.show_polygon {
        paint_polyline(surface, view.pending, palette.active);
    }

    log::trace!(
        "painted {} curves, {} pending points",
        view.curves.len(),
        view.pending.len()
    );
}

fn paint_curve<S: Surface + ?Sized>(surface: &mut S, curve: &Curve, vis: Visibility, color: Color) {
    if vis.show_points {
        paint_handles(surface, curve.control_points(), color);
    }
    if vis.show_polygon {
        paint_polyline(surface, curve.control_points(), color);
    }
    if vis.show_curve && curve.is_smooth() {
        paint_polyline(surface, curve.curve_points(), color);
    }
}

// ─── Primitives ──────────────────────────────────────────────────────────

fn paint_handles<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color) {
    for p in points {
        surface.fill_rect(handle_rect(*p), color);
    }
}

fn paint_polyline<S: Surface + ?Sized>(surface: &mut S, points: &[Point], color: Color) {
    for pair in points.windows(2) {
        surface.stroke_line(Line::new(to_kurbo(pair[0]), to_kurbo(pair[1])), color);
    }
}

/// The square handle drawn (and picked) around a control point.
pub fn handle_rect(p: Point) -> Rect {
    Rect::from_center_size(to_kurbo(p), (HANDLE_SIZE, HANDLE_SIZE))
}

fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::model::Layer;
    use bc_core::Resolution;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Op {
        Rect { active: bool },
        Line { active: bool },
    }

    /// Records primitives, tagging each by which palette color it used.
    struct Recorder {
        palette: Palette,
        ops: Vec<Op>,
        rects: Vec<Rect>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                palette: Palette::default(),
                ops: Vec::new(),
                rects: Vec::new(),
            }
        }

        fn is_active(&self, color: Color) -> bool {
            color.components == self.palette.active.components
        }

        fn count(&self, op: Op) -> usize {
            self.ops.iter().filter(|o| **o == op).count()
        }
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            let active = self.is_active(color);
            self.ops.push(Op::Rect { active });
            self.rects.push(rect);
        }

        fn stroke_line(&mut self, _line: Line, color: Color) {
            let active = self.is_active(color);
            self.ops.push(Op::Line { active });
        }
    }

    fn curve(points: &[(f64, f64)], steps: u32) -> Curve {
        Curve::new(
            points.iter().map(|&p| Point::from(p)).collect(),
            Resolution::new(steps).unwrap(),
        )
        .unwrap()
    }

    fn paint(view: &SceneView<'_>) -> Recorder {
        let mut rec = Recorder::new();
        let palette = rec.palette;
        paint_scene(&mut rec, view, &palette);
        rec
    }

    #[test]
    fn paints_every_layer_of_a_smooth_curve() {
        let curves = vec![curve(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)], 4)];
        let rec = paint(&SceneView {
            curves: &curves,
            active_curve: Some(0),
            pending: &[],
            visibility: Visibility::default(),
        });
        // 3 handles, 2 polygon segments, 4 curve segments.
        assert_eq!(rec.count(Op::Rect { active: true }), 3);
        assert_eq!(rec.count(Op::Line { active: true }), 6);
        assert_eq!(rec.ops.len(), 9);
    }

    #[test]
    fn handles_are_centered_squares() {
        let curves = vec![curve(&[(40.0, 30.0)], 4)];
        let rec = paint(&SceneView {
            curves: &curves,
            active_curve: Some(0),
            pending: &[],
            visibility: Visibility::default(),
        });
        assert_eq!(rec.rects, vec![Rect::new(32.0, 22.0, 48.0, 38.0)]);
    }

    #[test]
    fn active_curve_painted_first_in_active_color() {
        let curves = vec![
            curve(&[(0.0, 0.0), (10.0, 10.0)], 4),
            curve(&[(100.0, 0.0)], 4),
        ];
        let rec = paint(&SceneView {
            curves: &curves,
            active_curve: Some(1),
            pending: &[],
            visibility: Visibility::default(),
        });
        assert_eq!(
            rec.ops,
            vec![
                Op::Rect { active: true },
                Op::Rect { active: false },
                Op::Rect { active: false },
                Op::Line { active: false },
            ]
        );
    }

    #[test]
    fn line_curve_has_no_curve_layer() {
        let curves = vec![curve(&[(0.0, 0.0), (10.0, 10.0)], 4)];
        let mut vis = Visibility::default();
        vis.toggle(Layer::Points);
        vis.toggle(Layer::Polygon);
        let rec = paint(&SceneView {
            curves: &curves,
            active_curve: Some(0),
            pending: &[],
            visibility: vis,
        });
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn pending_points_use_active_color_without_curve() {
        let pending = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let rec = paint(&SceneView {
            curves: &[],
            active_curve: None,
            pending: &pending,
            visibility: Visibility::default(),
        });
        assert_eq!(rec.count(Op::Rect { active: true }), 3);
        assert_eq!(rec.count(Op::Line { active: true }), 2);
        assert_eq!(rec.ops.len(), 5);
    }

    #[test]
    fn nothing_drawn_when_all_layers_hidden() {
        let curves = vec![curve(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)], 4)];
        let rec = paint(&SceneView {
            curves: &curves,
            active_curve: Some(0),
            pending: &[Point::new(1.0, 1.0)],
            visibility: Visibility {
                show_points: false,
                show_polygon: false,
                show_curve: false,
            },
        });
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn curve_layer_only() {
        let curves = vec![curve(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)], 10)];
        let rec = paint(&SceneView {
            curves: &curves,
            active_curve: Some(0),
            pending: &[],
            visibility: Visibility {
                show_points: false,
                show_polygon: false,
                show_curve: true,
            },
        });
        assert_eq!(rec.count(Op::Line { active: true }), 10);
        assert_eq!(rec.ops.len(), 10);
    }
}
