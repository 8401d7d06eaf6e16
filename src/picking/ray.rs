use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. Returns `None` for a zero or
    /// non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    /// Ray from the camera eye through a point in normalized device
    /// coordinates (`[-1, 1]` on both axes, +Y up).
    ///
    /// Built from the camera basis and the half-angle of the vertical field
    /// of view, which matches unprojecting through the perspective matrix
    /// without the precision loss of inverting it.
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Option<Self> {
        let forward = camera.forward();
        let right = forward.cross(camera.up).try_normalize()?;
        let up = right.cross(forward);
        let half_height = (camera.fovy.to_radians() * 0.5).tan();
        let half_width = half_height * camera.aspect;
        let direction = forward
            + right * (ndc.x * half_width)
            + up * (ndc.y * half_height);
        Self::new(camera.eye, direction)
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Parameter at which the ray crosses the horizontal plane `y = height`,
    /// from either side. `None` if parallel or behind the origin.
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<f32> {
        if self.direction.y.abs() < 1e-6 {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t >= 0.0).then_some(t)
    }

    /// Slab test against an axis-aligned box. Returns the entry parameter
    /// and the outward normal of the face that was entered.
    ///
    /// Rays starting inside the box report no hit: box faces are only
    /// visible from outside.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<(f32, Vec3)> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            if dir.abs() < 1e-8 {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let (t0, t1) = {
                let a = (min[axis] - origin) * inv;
                let b = (max[axis] - origin) * inv;
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            };
            if t0 > t_near {
                t_near = t0;
                normal = Vec3::ZERO;
                normal[axis] = -dir.signum();
            }
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        (t_near >= 0.0 && normal != Vec3::ZERO).then_some((t_near, normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn down_ray(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 10.0, z), Vec3::NEG_Y).unwrap()
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn plane_hit_from_above_and_below() {
        let t = down_ray(0.0, 0.0).intersect_horizontal_plane(-0.01).unwrap();
        assert!((t - 10.01).abs() < EPS);

        let up = Ray::new(Vec3::new(0.0, -5.0, 0.0), Vec3::Y).unwrap();
        assert!(up.intersect_horizontal_plane(0.0).is_some());
    }

    #[test]
    fn plane_behind_or_parallel_misses() {
        let up = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y).unwrap();
        assert!(up.intersect_horizontal_plane(0.0).is_none());
        let flat = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X).unwrap();
        assert!(flat.intersect_horizontal_plane(0.0).is_none());
    }

    #[test]
    fn aabb_top_face_normal() {
        let (t, normal) = down_ray(0.2, -0.1)
            .intersect_aabb(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 1.0, 0.5))
            .unwrap();
        assert!((t - 9.0).abs() < EPS);
        assert_eq!(normal, Vec3::Y);
    }

    #[test]
    fn aabb_side_face_normal() {
        let ray = Ray::new(Vec3::new(5.0, 0.5, 0.0), Vec3::NEG_X).unwrap();
        let (t, normal) = ray
            .intersect_aabb(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 1.0, 0.5))
            .unwrap();
        assert!((t - 4.5).abs() < EPS);
        assert_eq!(normal, Vec3::X);
    }

    #[test]
    fn aabb_miss_and_inside() {
        let min = Vec3::new(-0.5, 0.0, -0.5);
        let max = Vec3::new(0.5, 1.0, 0.5);
        assert!(down_ray(3.0, 0.0).intersect_aabb(min, max).is_none());

        let inside = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::X).unwrap();
        assert!(inside.intersect_aabb(min, max).is_none());
    }

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(12.0, 16.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.5,
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn camera_center_ray_points_at_target() {
        let camera = camera();
        let ray = Ray::from_camera(&camera, Vec2::ZERO).unwrap();
        assert_eq!(ray.origin, camera.eye);
        let expected = -camera.eye.normalize();
        assert!(ray.direction.distance(expected) < 1e-5);
    }

    #[test]
    fn corner_rays_agree_with_projection() {
        let camera = camera();
        let view_proj = camera.build_matrix();
        for ndc in [Vec2::new(1.0, 1.0), Vec2::new(-0.5, 0.25)] {
            let ray = Ray::from_camera(&camera, ndc).unwrap();
            let projected = view_proj.project_point3(ray.at(25.0));
            assert!((projected.x - ndc.x).abs() < 1e-3);
            assert!((projected.y - ndc.y).abs() < 1e-3);
        }
    }

    #[test]
    fn camera_looking_along_up_has_no_ray() {
        let camera = Camera {
            eye: Vec3::new(0.0, 10.0, 0.0),
            ..camera()
        };
        assert!(Ray::from_camera(&camera, Vec2::ZERO).is_none());
    }
}
