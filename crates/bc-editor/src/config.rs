//! Editor configuration.

use bc_core::{Point, Resolution};
use bc_render::PICK_RADIUS;

/// Tunable constants for an [`EditorState`](crate::EditorState).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Half-width of the square pick box used when pressing on a handle.
    pub pick_radius: f64,
    /// Where the "add point" command places new control points.
    pub new_point: Point,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Resolution the editor starts with and falls back to.
    pub initial_resolution: Resolution,
}

impl EditorConfig {
    /// Configuration for a canvas of the given size. New control points
    /// are placed at its center.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            new_point: Point::new(width / 2.0, height / 2.0),
            canvas_width: width,
            canvas_height: height,
            initial_resolution: Resolution::DEFAULT,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::for_canvas(850.0, 450.0)
    }
}
