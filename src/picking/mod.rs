//! Pointer-to-world picking.
//!
//! Converts a pointer position into a camera ray and intersects it
//! against the ground plane and every placed block, reporting the nearest
//! hit.

mod ray;
mod resolver;

pub use ray::Ray;
pub use resolver::{resolve_pointer, PickResult, PickTarget, Viewport};
