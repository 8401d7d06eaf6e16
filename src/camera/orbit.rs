//! Spherical camera parameterization around the world origin.
//!
//! Polar angle is measured from the +Y axis, azimuth from +X toward +Z:
//!
//! ```text
//! x = r · sin(polar) · cos(azimuth)
//! y = r · cos(polar)
//! z = r · sin(polar) · sin(azimuth)
//! ```

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::options::CameraOptions;

/// Bounds applied to [`OrbitState`] after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Closest allowed radius.
    pub min_radius: f32,
    /// Farthest allowed radius.
    pub max_radius: f32,
    /// Smallest polar angle. Keeps the camera off the pole.
    pub min_polar: f32,
    /// Largest polar angle. Keeps the camera above the ground plane.
    pub max_polar: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_radius: 8.0,
            max_radius: 60.0,
            min_polar: 0.2,
            max_polar: FRAC_PI_2 - 0.05,
        }
    }
}

impl From<&CameraOptions> for OrbitLimits {
    fn from(options: &CameraOptions) -> Self {
        // A preset with inverted bounds would make `clamp` panic.
        Self {
            min_radius: options.min_radius.min(options.max_radius),
            max_radius: options.max_radius.max(options.min_radius),
            min_polar: options.min_polar.min(options.max_polar),
            max_polar: options.max_polar.max(options.min_polar),
        }
    }
}

/// Camera position in spherical coordinates around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Distance from the origin.
    pub radius: f32,
    /// Angle from the +Y axis, radians.
    pub polar: f32,
    /// Angle around the Y axis from +X toward +Z, radians, in `[0, 2π)`.
    pub azimuth: f32,
}

impl OrbitState {
    /// Derive spherical coordinates from a Cartesian eye position looking
    /// at the origin, then clamp into `limits`.
    pub fn from_eye(eye: Vec3, limits: &OrbitLimits) -> Self {
        let radius = eye.length();
        let polar = if radius > f32::EPSILON {
            (eye.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            limits.max_polar
        };
        let mut state = Self {
            radius,
            polar,
            azimuth: eye.z.atan2(eye.x),
        };
        state.constrain(limits);
        state
    }

    /// Cartesian eye position for the current angles.
    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        Vec3::new(
            self.radius * sin_polar * cos_azimuth,
            self.radius * cos_polar,
            self.radius * sin_polar * sin_azimuth,
        )
    }

    /// Add deltas to each coordinate and re-apply `limits`. Non-finite
    /// deltas are dropped, leaving their coordinate unchanged.
    pub fn shift(
        &mut self,
        delta_azimuth: f32,
        delta_polar: f32,
        delta_radius: f32,
        limits: &OrbitLimits,
    ) {
        self.azimuth += finite_or(delta_azimuth, 0.0);
        self.polar += finite_or(delta_polar, 0.0);
        self.radius += finite_or(delta_radius, 0.0);
        self.constrain(limits);
    }

    /// Clamp radius and polar; wrap azimuth into `[0, 2π)`.
    ///
    /// Non-finite inputs collapse to the nearest bound instead of
    /// poisoning the eye position.
    pub fn constrain(&mut self, limits: &OrbitLimits) {
        self.radius = finite_or(self.radius, limits.max_radius)
            .clamp(limits.min_radius, limits.max_radius);
        self.polar = finite_or(self.polar, limits.max_polar)
            .clamp(limits.min_polar, limits.max_polar);
        let azimuth = finite_or(self.azimuth, 0.0).rem_euclid(TAU);
        // rem_euclid can round a tiny negative remainder up to TAU itself.
        self.azimuth = if azimuth >= TAU { 0.0 } else { azimuth };
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
