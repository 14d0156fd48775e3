pub mod hit;
pub mod paint;

pub use hit::{ControlPointHit, PICK_RADIUS, hit_test, hit_test_with_radius};
pub use paint::{Palette, SceneView, Surface, paint_scene};
