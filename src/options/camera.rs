use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit limits, and control sensitivities.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Cartesian eye position the orbit is derived from at mount.
    #[schemars(skip)]
    pub initial_eye: [f32; 3],
    /// Drag rotation in radians per pixel of pointer movement.
    #[schemars(title = "Drag Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub drag_speed: f32,
    /// Radius change per unit of wheel `deltaY`.
    #[schemars(title = "Wheel Zoom Speed", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub wheel_zoom_speed: f32,
    /// Closest allowed orbit radius.
    #[schemars(skip)]
    pub min_radius: f32,
    /// Farthest allowed orbit radius.
    #[schemars(skip)]
    pub max_radius: f32,
    /// Smallest polar angle (closest to straight down), radians.
    #[schemars(skip)]
    pub min_polar: f32,
    /// Largest polar angle (closest to the horizon), radians.
    #[schemars(skip)]
    pub max_polar: f32,
    /// Azimuth change for one rotate nudge, radians.
    #[schemars(title = "Rotate Step", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub rotate_step: f32,
    /// Polar change for one tilt nudge, radians.
    #[schemars(title = "Tilt Step", range(min = 0.05, max = 0.5), extend("step" = 0.05))]
    pub tilt_step: f32,
    /// Radius change for one zoom nudge.
    #[schemars(title = "Zoom Step", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub zoom_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_eye: [12.0, 16.0, 20.0],
            drag_speed: 0.005,
            wheel_zoom_speed: 0.02,
            min_radius: 8.0,
            max_radius: 60.0,
            min_polar: 0.2,
            max_polar: FRAC_PI_2 - 0.05,
            rotate_step: 0.2,
            tilt_step: 0.1,
            zoom_step: 2.0,
        }
    }
}
