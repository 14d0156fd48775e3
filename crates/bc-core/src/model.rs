//! Core data model for the Bezier canvas.
//!
//! A canvas holds any number of curves. Each curve owns its user-placed
//! control points and a derived polyline of curve samples. The samples are
//! a cache: every mutator on [`Curve`] rebuilds them before returning, so a
//! reader never sees samples computed from an older set of control points.

use crate::resolution::Resolution;
use crate::sample;
use serde::Serialize;

// ─── Point ───────────────────────────────────────────────────────────────

/// A 2D position in canvas-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation `(1 - t) * a + t * b`, the single step of
    /// De Casteljau evaluation.
    #[inline]
    pub fn lerp(a: Point, b: Point, t: f64) -> Point {
        let complement = 1.0 - t;
        Point::new(complement * a.x + t * b.x, complement * a.y + t * b.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ─── Curve ───────────────────────────────────────────────────────────────

/// A Bezier curve of arbitrary degree.
///
/// `curve_points` is empty while the curve has two or fewer control points
/// (a dot or a straight segment, drawn by the control polygon alone) and
/// holds exactly `resolution + 1` samples otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Curve {
    pub(crate) control_points: Vec<Point>,
    pub(crate) curve_points: Vec<Point>,
}

impl Curve {
    /// Build a curve from a non-empty list of control points, sampling it
    /// at `resolution` when it has more than two.
    /// Returns `None` for an empty list.
    pub fn new(control_points: Vec<Point>, resolution: Resolution) -> Option<Self> {
        if control_points.is_empty() {
            return None;
        }
        let mut curve = Self {
            control_points,
            curve_points: Vec::new(),
        };
        curve.resample(resolution);
        Some(curve)
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn curve_points(&self) -> &[Point] {
        &self.curve_points
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Whether the curve has enough control points to be sampled.
    pub fn is_smooth(&self) -> bool {
        self.control_points.len() > 2
    }

    /// Index of the last control point, or 0 for an empty curve.
    pub fn last_index(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }

    /// Discard the samples and rebuild them from the current control points.
    pub fn resample(&mut self, resolution: Resolution) {
        sample::resample(self, resolution);
    }

    /// Append a control point and resample.
    pub fn push_control_point(&mut self, point: Point, resolution: Resolution) {
        self.control_points.push(point);
        self.resample(resolution);
    }

    /// Move control point `index` to `point` and resample.
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set_control_point(&mut self, index: usize, point: Point, resolution: Resolution) -> bool {
        let Some(slot) = self.control_points.get_mut(index) else {
            return false;
        };
        *slot = point;
        self.resample(resolution);
        true
    }

    /// Remove the control point at `index`, clamped into range, and
    /// resample. Returns the index actually removed, or `None` if the
    /// curve had no control points.
    pub fn remove_control_point(&mut self, index: usize, resolution: Resolution) -> Option<usize> {
        if self.control_points.is_empty() {
            return None;
        }
        let index = index.min(self.control_points.len() - 1);
        self.control_points.remove(index);
        self.resample(resolution);
        Some(index)
    }
}

// ─── Visibility ──────────────────────────────────────────────────────────

/// One of the independently toggled visualization layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Control point handles.
    Points,
    /// Control polygon segments.
    Polygon,
    /// Sampled curve polyline.
    Curve,
}

/// Which layers the renderer draws. All layers are visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub show_points: bool,
    pub show_polygon: bool,
    pub show_curve: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            show_points: true,
            show_polygon: true,
            show_curve: true,
        }
    }
}

impl Visibility {
    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Points => self.show_points,
            Layer::Polygon => self.show_polygon,
            Layer::Curve => self.show_curve,
        }
    }

    /// Flip one layer. Returns the new state of that layer.
    pub fn toggle(&mut self, layer: Layer) -> bool {
        let flag = match layer {
            Layer::Points => &mut self.show_points,
            Layer::Polygon => &mut self.show_polygon,
            Layer::Curve => &mut self.show_curve,
        };
        *flag = !*flag;
        *flag
    }

    /// True if at least one layer is drawn.
    pub fn any(&self) -> bool {
        self.show_points || self.show_polygon || self.show_curve
    }
}
