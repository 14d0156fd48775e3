//! Editor state machine.
//!
//! `EditorState` is the single owner and the only writer of the curve
//! collection. It holds the curves, the points placed for a curve that has
//! not been created yet, which curve and control point are active, whether
//! a drag is in progress, and the display settings. Every mutating method
//! runs to completion, leaves every curve's samples consistent with its
//! control points, and returns `true` when the caller should redraw.
//!
//! Pointer lifecycle:
//!
//! ```text
//! Idle --press on handle--> Dragging --release--> Idle
//! Idle --press on empty canvas, release--> Idle (point appended to pending)
//! ```

use crate::commands::EditorCommand;
use crate::config::EditorConfig;
use crate::input::InputEvent;
use crate::shortcuts::ShortcutMap;
use bc_core::model::{Curve, Layer, Point, Visibility};
use bc_core::Resolution;
use bc_render::hit::hit_test_with_radius;
use bc_render::paint::SceneView;

#[derive(Debug, Clone)]
pub struct EditorState {
    config: EditorConfig,
    curves: Vec<Curve>,
    pending: Vec<Point>,
    /// Index into `curves`; only meaningful while `curves` is non-empty.
    active_curve: usize,
    /// Control point targeted by drags and by point deletion.
    active_point: usize,
    dragging: bool,
    resolution: Resolution,
    visibility: Visibility,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            curves: Vec::new(),
            pending: Vec::new(),
            active_curve: 0,
            active_point: 0,
            dragging: false,
            resolution: config.initial_resolution,
            visibility: Visibility::default(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn pending_points(&self) -> &[Point] {
        &self.pending
    }

    /// Index of the active curve, or `None` when there are no curves.
    pub fn active_curve_index(&self) -> Option<usize> {
        (!self.curves.is_empty()).then_some(self.active_curve)
    }

    pub fn active_curve(&self) -> Option<&Curve> {
        self.active_curve_index().map(|i| &self.curves[i])
    }

    pub fn active_control_point_index(&self) -> usize {
        self.active_point
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Everything the renderer needs for the next frame.
    pub fn scene(&self) -> SceneView<'_> {
        SceneView {
            curves: &self.curves,
            active_curve: self.active_curve_index(),
            pending: &self.pending,
            visibility: self.visibility,
        }
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Route a pointer or key event to the matching operation.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => self.press(Point::new(*x, *y)),
            InputEvent::PointerMove { x, y } => self.drag_to(Point::new(*x, *y)),
            InputEvent::PointerUp { x, y } => self.release(Point::new(*x, *y)),
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                Some(command) => self.execute(command),
                None => false,
            },
        }
    }

    /// Pointer pressed: start dragging the control point under `pos`, if
    /// any. Returns `true` if a drag started.
    pub fn press(&mut self, pos: Point) -> bool {
        if self.dragging {
            return false;
        }
        let Some(hit) = hit_test_with_radius(&self.curves, pos, self.config.pick_radius) else {
            return false;
        };
        self.active_curve = hit.curve;
        self.active_point = hit.point;
        self.dragging = true;
        log::trace!("drag start: curve {} point {}", hit.curve, hit.point);
        true
    }

    /// Pointer released: finish the drag in progress, or otherwise place
    /// `pos` as a pending point for the next curve.
    pub fn release(&mut self, pos: Point) -> bool {
        if self.dragging {
            self.end_drag()
        } else {
            self.pending.push(pos);
            true
        }
    }

    /// One-shot press and release at `pos`: grabs the handle under `pos`
    /// if there is one, otherwise appends `pos` to the pending points.
    pub fn begin_point(&mut self, pos: Point) -> bool {
        if self.dragging {
            return false;
        }
        if !self.press(pos) {
            self.pending.push(pos);
        }
        true
    }

    /// Move the dragged control point to `pos` and resample its curve.
    pub fn drag_to(&mut self, pos: Point) -> bool {
        if !self.dragging {
            return false;
        }
        let resolution = self.resolution;
        match self.curves.get_mut(self.active_curve) {
            Some(curve) => curve.set_control_point(self.active_point, pos, resolution),
            None => false,
        }
    }

    pub fn end_drag(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        log::trace!("drag end: curve {} point {}", self.active_curve, self.active_point);
        true
    }

    // ─── Curves ──────────────────────────────────────────────────────────

    /// Turn the pending points into a new curve and make it active.
    pub fn create_curve(&mut self) -> bool {
        let points = std::mem::take(&mut self.pending);
        let Some(curve) = Curve::new(points, self.resolution) else {
            return false;
        };
        self.active_point = curve.last_index();
        self.curves.push(curve);
        self.active_curve = self.curves.len() - 1;
        self.dragging = false;
        log::debug!(
            "created curve {} with {} control points",
            self.active_curve,
            self.curves[self.active_curve].len()
        );
        true
    }

    pub fn select_next(&mut self) -> bool {
        if self.curves.len() <= 1 {
            return false;
        }
        let next = (self.active_curve + 1) % self.curves.len();
        self.activate(next);
        true
    }

    pub fn select_previous(&mut self) -> bool {
        if self.curves.len() <= 1 {
            return false;
        }
        let len = self.curves.len();
        let prev = (self.active_curve + len - 1) % len;
        self.activate(prev);
        true
    }

    /// Retargets the active point, so any drag in progress ends here.
    fn activate(&mut self, index: usize) {
        self.active_curve = index;
        self.active_point = self.curves[index].last_index();
        self.dragging = false;
    }

    /// Remove the active curve. With no curves left this is [`clear_all`].
    ///
    /// [`clear_all`]: EditorState::clear_all
    pub fn delete_curve(&mut self) -> bool {
        if self.curves.is_empty() {
            return self.clear_all();
        }
        let removed = self.active_curve.min(self.curves.len() - 1);
        self.curves.remove(removed);
        self.dragging = false;
        log::debug!("deleted curve {removed}");

        if self.curves.is_empty() {
            self.clear_all();
        } else if removed == self.curves.len() && removed != 0 {
            self.active_curve = removed - 1;
        }
        true
    }

    /// Drop every curve and every pending point.
    pub fn clear_all(&mut self) -> bool {
        let changed = !self.curves.is_empty() || !self.pending.is_empty();
        self.curves.clear();
        self.pending.clear();
        self.active_curve = 0;
        self.dragging = false;
        if changed {
            log::debug!("cleared canvas");
        }
        changed
    }

    // ─── Control points ──────────────────────────────────────────────────

    /// Append the configured default point to the active curve.
    pub fn add_control_point(&mut self) -> bool {
        self.add_control_point_at(self.config.new_point)
    }

    pub fn add_control_point_at(&mut self, pos: Point) -> bool {
        let resolution = self.resolution;
        let Some(curve) = self.curves.get_mut(self.active_curve) else {
            return false;
        };
        curve.push_control_point(pos, resolution);
        true
    }

    /// Remove the active control point (clamped into range) from the
    /// active curve. A curve that loses its last point is deleted.
    pub fn delete_control_point(&mut self) -> bool {
        let resolution = self.resolution;
        let Some(curve) = self.curves.get_mut(self.active_curve) else {
            return false;
        };
        let removed = curve
            .remove_control_point(self.active_point, resolution)
            .unwrap_or(0);
        self.active_point = removed.saturating_sub(1);
        self.dragging = false;

        if curve.is_empty() {
            self.curves.remove(self.active_curve);
            self.active_curve = 0;
            log::debug!("deleted empty curve");
        }
        true
    }

    // ─── Settings ────────────────────────────────────────────────────────

    /// Store `resolution` and resample every curve with it.
    pub fn set_resolution(&mut self, resolution: Resolution) -> bool {
        self.resolution = resolution;
        for curve in &mut self.curves {
            curve.resample(resolution);
        }
        log::debug!("resolution set to {resolution}");
        true
    }

    /// [`set_resolution`](EditorState::set_resolution) from free text;
    /// unusable text selects the default resolution.
    pub fn set_resolution_text(&mut self, text: &str) -> bool {
        self.set_resolution(Resolution::parse_lossy(text))
    }

    pub fn toggle_visibility(&mut self, layer: Layer) -> bool {
        let shown = self.visibility.toggle(layer);
        log::debug!("{layer:?} layer {}", if shown { "shown" } else { "hidden" });
        true
    }

    /// Run a host command.
    pub fn execute(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::Create => self.create_curve(),
            EditorCommand::SelectPrevious => self.select_previous(),
            EditorCommand::SelectNext => self.select_next(),
            EditorCommand::AddPoint => self.add_control_point(),
            EditorCommand::DeletePoint => self.delete_control_point(),
            EditorCommand::DeleteCurve => self.delete_curve(),
            EditorCommand::ClearAll => self.clear_all(),
            EditorCommand::Toggle(layer) => self.toggle_visibility(layer),
        }
    }
}
