//! WASM bridge for BC — exposes the Bezier editor to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards canvas
//! pointer events, toolbar buttons, the resolution text field, and key
//! presses; after any call that returns `true` it calls `render`.

mod render2d;

use bc_core::{Resolution, Visibility};
use bc_editor::input::client_to_canvas;
use bc_editor::{EditorCommand, EditorConfig, EditorState, InputEvent};
use bc_render::paint::{Palette, Surface, paint_scene};
use render2d::Canvas2dSurface;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Owns the editor state. All interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct BezierCanvas {
    state: EditorState,
    palette: Palette,
}

/// Status snapshot handed to the page so its widgets can mirror the state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusSnapshot {
    curves: usize,
    active_curve: Option<usize>,
    pending: usize,
    resolution: Resolution,
    dragging: bool,
    #[serde(flatten)]
    visibility: Visibility,
}

#[wasm_bindgen]
impl BezierCanvas {
    /// Create a controller for a canvas of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        Self {
            state: EditorState::with_config(EditorConfig::for_canvas(width, height)),
            palette: Palette::default(),
        }
    }

    /// Handle pointer down at canvas-local coordinates.
    /// Returns true if a drag started.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.state.handle_input(&InputEvent::PointerDown { x, y })
    }

    /// Handle pointer move. Returns true if a curve changed.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.state.handle_input(&InputEvent::PointerMove { x, y })
    }

    /// Handle pointer up. Returns true if the state changed.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.state.handle_input(&InputEvent::PointerUp { x, y })
    }

    /// Translate a `MouseEvent`'s client position using the canvas's
    /// bounding rect. Returns `[x, y]` in canvas coordinates.
    pub fn canvas_position(client_x: f64, client_y: f64, left: f64, top: f64) -> Vec<f64> {
        let p = client_to_canvas(client_x, client_y, left, top);
        vec![p.x, p.y]
    }

    /// Handle a keyboard event. Returns true if a shortcut fired and
    /// changed the state.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.state.handle_input(&InputEvent::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Run a toolbar command by its button identifier (`"create"`,
    /// `"prev"`, `"next"`, `"add-point"`, `"delete-point"`,
    /// `"delete-curve"`, `"clear"`, `"toggle-points"`, `"toggle-polygon"`,
    /// `"toggle-curve"`).
    pub fn command(&mut self, name: &str) -> bool {
        match EditorCommand::from_name(name) {
            Some(cmd) => self.state.execute(cmd),
            None => {
                log::warn!("unknown command {name:?}");
                false
            }
        }
    }

    /// Apply the resolution text field. Unusable text selects the default.
    pub fn set_resolution(&mut self, text: &str) -> bool {
        self.state.set_resolution_text(text)
    }

    pub fn get_resolution(&self) -> u32 {
        self.state.resolution().get()
    }

    /// Clear the canvas and draw the current state.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let config = self.state.config();
        let mut surface = Canvas2dSurface::new(ctx, config.canvas_width, config.canvas_height);
        surface.clear();
        paint_scene(&mut surface, &self.state.scene(), &self.palette);
    }

    /// Current status as JSON:
    /// `{"curves":n,"activeCurve":i|null,"pending":n,"resolution":n,
    /// "dragging":bool,"showPoints":bool,"showPolygon":bool,"showCurve":bool}`
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl BezierCanvas {
    fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            curves: self.state.curves().len(),
            active_curve: self.state.active_curve_index(),
            pending: self.state.pending_points().len(),
            resolution: self.state.resolution(),
            dragging: self.state.is_dragging(),
            visibility: self.state.visibility(),
        }
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("BC WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
