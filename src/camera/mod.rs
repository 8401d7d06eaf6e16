//! Camera system for the block scene.
//!
//! Provides an orbital camera parameterized by spherical coordinates around
//! the world origin, driven by discrete nudges, pointer drags, and wheel
//! zoom.

/// Orbital camera controller managing nudges, drag grabs, and zoom.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Spherical orbit state and its clamping limits.
pub mod orbit;

pub use controller::{CameraController, CameraStep};
pub use self::core::{Camera, CameraUniform};
pub use orbit::{OrbitLimits, OrbitState};
