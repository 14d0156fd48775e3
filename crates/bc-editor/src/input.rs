//! Input abstraction layer.
//!
//! Normalizes host pointer and keyboard events into an `InputEvent` enum
//! carrying canvas-local coordinates.

use bc_core::Point;

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// Key press, resolved through [`ShortcutMap`](crate::ShortcutMap).
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn pointer_down(pos: Point) -> Self {
        Self::PointerDown { x: pos.x, y: pos.y }
    }

    pub fn pointer_move(pos: Point) -> Self {
        Self::PointerMove { x: pos.x, y: pos.y }
    }

    pub fn pointer_up(pos: Point) -> Self {
        Self::PointerUp { x: pos.x, y: pos.y }
    }

    /// Unmodified key press.
    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// Extract the canvas position if this is a pointer event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some(Point::new(*x, *y))
            }
            Self::Key { .. } => None,
        }
    }
}

/// Translate a viewport (client) position into canvas-local coordinates,
/// given the canvas's top-left corner in the same viewport space.
pub fn client_to_canvas(client_x: f64, client_y: f64, canvas_left: f64, canvas_top: f64) -> Point {
    Point::new(client_x - canvas_left, client_y - canvas_top)
}
