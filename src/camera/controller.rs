use glam::{Vec2, Vec3};

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::orbit::{OrbitLimits, OrbitState};
use crate::options::CameraOptions;

/// One discrete camera nudge, as triggered by a button or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraStep {
    /// Decrease azimuth by one rotate step.
    RotateLeft,
    /// Increase azimuth by one rotate step.
    RotateRight,
    /// Decrease polar angle (camera rises toward the pole).
    TiltUp,
    /// Increase polar angle (camera sinks toward the horizon).
    TiltDown,
    /// Decrease radius by one zoom step.
    ZoomIn,
    /// Increase radius by one zoom step.
    ZoomOut,
}

/// The pointer currently rotating the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGrab {
    pointer_id: u32,
    last: Vec2,
}

/// Orbital camera controller that always looks at the world origin.
///
/// User intent arrives as discrete nudges, a continuous pointer drag, or
/// wheel scrolls; each one mutates the spherical [`OrbitState`], which is
/// then clamped and converted back into the camera eye position.
///
/// At most one pointer may drag at a time. The grab is released only by
/// the pointer that took it.
pub struct CameraController {
    orbit: OrbitState,
    limits: OrbitLimits,
    grab: Option<DragGrab>,

    /// Derived perspective camera. Rebuilt after every orbit mutation.
    pub camera: Camera,

    drag_speed: f32,
    wheel_zoom_speed: f32,
    rotate_step: f32,
    tilt_step: f32,
    zoom_step: f32,
}

impl CameraController {
    /// Create a controller from camera options and the viewport aspect
    /// ratio. The orbit is derived from `options.initial_eye`.
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let limits = OrbitLimits::from(options);
        let orbit = OrbitState::from_eye(Vec3::from(options.initial_eye), &limits);

        let camera = Camera {
            eye: orbit.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            orbit,
            limits,
            grab: None,
            camera,
            drag_speed: options.drag_speed,
            wheel_zoom_speed: options.wheel_zoom_speed,
            rotate_step: options.rotate_step,
            tilt_step: options.tilt_step,
            zoom_step: options.zoom_step,
        }
    }

    /// Push new camera options. Limits are re-applied to the current orbit;
    /// the orbit itself is not reset and an active drag is kept.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.limits = OrbitLimits::from(options);
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.drag_speed = options.drag_speed;
        self.wheel_zoom_speed = options.wheel_zoom_speed;
        self.rotate_step = options.rotate_step;
        self.tilt_step = options.tilt_step;
        self.zoom_step = options.zoom_step;
        self.orbit.constrain(&self.limits);
        self.update_camera_pos();
    }

    /// Current spherical state.
    pub fn orbit(&self) -> OrbitState {
        self.orbit
    }

    /// Bounds currently applied to the orbit.
    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    fn update_camera_pos(&mut self) {
        self.camera.eye = self.orbit.eye();
        self.camera.target = Vec3::ZERO;
        self.camera.up = Vec3::Y;
    }

    /// Uniform snapshot of the current camera.
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform
    }

    /// Update the aspect ratio after a viewport resize. Degenerate sizes
    /// are ignored. The orbit is untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.camera.aspect = width / height;
        }
    }

    /// Add deltas to azimuth, polar, and radius, clamping polar and radius.
    pub fn nudge(
        &mut self,
        delta_azimuth: f32,
        delta_polar: f32,
        delta_radius: f32,
    ) {
        self.orbit
            .shift(delta_azimuth, delta_polar, delta_radius, &self.limits);
        self.update_camera_pos();
    }

    /// Apply one discrete nudge using the configured step sizes.
    pub fn step(&mut self, step: CameraStep) {
        match step {
            CameraStep::RotateLeft => self.nudge(-self.rotate_step, 0.0, 0.0),
            CameraStep::RotateRight => self.nudge(self.rotate_step, 0.0, 0.0),
            CameraStep::TiltUp => self.nudge(0.0, -self.tilt_step, 0.0),
            CameraStep::TiltDown => self.nudge(0.0, self.tilt_step, 0.0),
            CameraStep::ZoomIn => self.nudge(0.0, 0.0, -self.zoom_step),
            CameraStep::ZoomOut => self.nudge(0.0, 0.0, self.zoom_step),
        }
    }

    /// Scroll zoom in DOM `deltaY` convention: positive scrolls zoom out.
    pub fn wheel_zoom(&mut self, delta_y: f32) {
        self.nudge(0.0, 0.0, delta_y * self.wheel_zoom_speed);
    }

    /// Whether a pointer currently holds the drag grab.
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Pointer holding the drag grab, if any.
    pub fn drag_pointer(&self) -> Option<u32> {
        self.grab.map(|grab| grab.pointer_id)
    }

    /// Start a drag. Returns `false` (and changes nothing) if another
    /// drag is already active; the caller should capture the pointer
    /// only on `true`.
    pub fn begin_drag(&mut self, pointer_id: u32, x: f32, y: f32) -> bool {
        if self.grab.is_some() {
            return false;
        }
        self.grab = Some(DragGrab {
            pointer_id,
            last: Vec2::new(x, y),
        });
        true
    }

    /// Rotate by the pixel delta since the last drag position. Returns
    /// `false` when no drag is active or `pointer_id` does not own it.
    pub fn continue_drag(&mut self, pointer_id: u32, x: f32, y: f32) -> bool {
        let Some(grab) = self
            .grab
            .as_mut()
            .filter(|grab| grab.pointer_id == pointer_id)
        else {
            return false;
        };
        let current = Vec2::new(x, y);
        let delta = current - grab.last;
        grab.last = current;

        // Dragging right swings the camera around +azimuth; dragging down
        // raises it toward the pole.
        self.nudge(delta.x * self.drag_speed, -delta.y * self.drag_speed, 0.0);
        true
    }

    /// Release the drag if `pointer_id` owns it. Returns `true` when the
    /// grab was released and pointer capture should be dropped.
    pub fn end_drag(&mut self, pointer_id: u32) -> bool {
        match self.grab {
            Some(grab) if grab.pointer_id == pointer_id => {
                self.grab = None;
                true
            }
            _ => false,
        }
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
